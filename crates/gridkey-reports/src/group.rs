//! Post-processing helpers over extracted records.

use indexmap::IndexMap;

use gridkey_model::ExtractedRecord;

/// Groups records by the display form of `label`, in first-seen order.
///
/// Records without a usable `label` key are skipped.
pub fn group_by_key<'a>(
    records: &'a [ExtractedRecord],
    label: &str,
) -> IndexMap<String, Vec<&'a ExtractedRecord>> {
    let mut groups: IndexMap<String, Vec<&ExtractedRecord>> = IndexMap::new();
    for record in records {
        if let Some(key) = record.key_text(label) {
            groups.entry(key).or_default().push(record);
        }
    }
    groups
}

/// Drops records whose `label` key is absent or empty.
pub fn retain_with_key(mut records: Vec<ExtractedRecord>, label: &str) -> Vec<ExtractedRecord> {
    records.retain(|record| record.key_text(label).is_some());
    records
}

/// Stable sort by the display form of `label`; missing keys sort first.
pub fn sort_by_key(records: &mut [ExtractedRecord], label: &str) {
    records.sort_by_cached_key(|record| record.key_text(label));
}
