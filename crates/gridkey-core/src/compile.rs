//! Turns declarative [`SpecConfig`] documents into runtime specs.

use gridkey_model::{
    CellValue, ExcludeRule, ExtractionSpecs, HeaderSpec, HeaderSpecConfig, SpecConfig, SpecError,
    TransformKind,
};

use crate::dates::date_key;

/// Validates `config` and builds the callbacks it names.
///
/// # Errors
///
/// Returns a [`SpecError`] when the document fails validation.
pub fn compile_specs(config: &SpecConfig) -> Result<ExtractionSpecs, SpecError> {
    config.validate()?;
    let mut specs = ExtractionSpecs {
        colwise: config.headers.colwise.iter().map(compile_header).collect(),
        rowwise: config.headers.rowwise.iter().map(compile_header).collect(),
        within_range: None,
    };
    if let Some(range) = config.range {
        specs = specs.with_range(move |row, col| range.contains(row, col));
    }
    Ok(specs)
}

fn compile_header(config: &HeaderSpecConfig) -> HeaderSpec {
    let mut spec = HeaderSpec::new(config.label.clone());
    spec.index = config.index;
    spec.cascading = config.cascading;
    if let Some(kind) = config.transform {
        spec = spec.with_transform(move |value, _| apply_transform(kind, value));
    }
    if let Some(rule) = &config.exclude {
        let rule = rule.clone();
        spec = spec.with_exclude(move |value, position| excludes(&rule, value, position));
    }
    spec
}

pub fn apply_transform(kind: TransformKind, value: &CellValue) -> CellValue {
    match kind {
        TransformKind::Date => date_key(value),
        TransformKind::Text => text_or_empty(value.to_string()),
        TransformKind::Trim => match value {
            CellValue::Text(text) => text_or_empty(text.trim().to_string()),
            other => other.clone(),
        },
        TransformKind::Upper => match value {
            CellValue::Text(text) => CellValue::Text(text.to_uppercase()),
            other => other.clone(),
        },
        TransformKind::Lower => match value {
            CellValue::Text(text) => CellValue::Text(text.to_lowercase()),
            other => other.clone(),
        },
    }
}

fn text_or_empty(text: String) -> CellValue {
    if text.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(text)
    }
}

fn excludes(rule: &ExcludeRule, value: &CellValue, position: usize) -> bool {
    if rule.empty && value.is_empty() {
        return true;
    }
    if rule.positions.contains(&position) {
        return true;
    }
    if rule.values.is_empty() {
        return false;
    }
    let display = value.to_string();
    rule.values.iter().any(|candidate| *candidate == display)
}
