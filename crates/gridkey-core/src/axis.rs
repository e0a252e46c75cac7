//! Header axis resolution: one spec, one axis, one fragment per position.

use gridkey_model::{Axis, AxisFragment, CellValue, GridSnapshot, HeaderSpec};
use tracing::trace;

use crate::cascade::cascade;

/// Raw header values for `spec` along `axis`, before transform and exclusion.
///
/// Index-less specs synthesize the position ordinals `0..n`.
pub fn header_sequence(grid: &GridSnapshot, axis: Axis, spec: &HeaderSpec) -> Vec<CellValue> {
    let values = match spec.index {
        Some(index) => grid.header_values(axis, index),
        None => (0..grid.axis_len(axis))
            .map(|position| CellValue::Integer(position as i64))
            .collect(),
    };
    if spec.cascading {
        cascade(values)
    } else {
        values
    }
}

/// Resolves `spec` into one [`AxisFragment`] per position along `axis`.
///
/// `exclude` sees the raw (cascaded) header value; `transform` only shapes
/// the key.
pub fn resolve_axis(grid: &GridSnapshot, axis: Axis, spec: &HeaderSpec) -> Vec<AxisFragment> {
    header_sequence(grid, axis, spec)
        .into_iter()
        .enumerate()
        .map(|(position, raw)| {
            let exclude = spec
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude(&raw, position));
            let value = match &spec.transform {
                Some(transform) => transform(&raw, position),
                None => raw,
            };
            if exclude {
                trace!(%axis, label = %spec.label, position, "header position excluded");
            }
            AxisFragment {
                position,
                header: spec.label.clone(),
                value,
                exclude,
            }
        })
        .collect()
}
