//! Forward fill for merged header cells.

use gridkey_model::CellValue;

/// Spreads each non-empty value into the empty cells that follow it.
///
/// Single left-to-right pass; positions before the first non-empty value
/// become `Empty`.
pub fn cascade(values: Vec<CellValue>) -> Vec<CellValue> {
    let mut last: Option<CellValue> = None;
    values
        .into_iter()
        .map(|value| {
            if !value.is_empty() {
                last = Some(value.clone());
                value
            } else {
                last.clone().unwrap_or_default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|value| CellValue::from(*value)).collect()
    }

    #[test]
    fn fills_gaps_with_previous_label() {
        assert_eq!(cascade(texts(&["A", "", "", "B"])), texts(&["A", "A", "A", "B"]));
    }

    #[test]
    fn leading_blanks_stay_empty() {
        let filled = cascade(texts(&["", "", "X", ""]));
        assert_eq!(filled[0], CellValue::Empty);
        assert_eq!(filled[1], CellValue::Empty);
        assert_eq!(filled[3], CellValue::from("X"));
    }

    #[test]
    fn numeric_zero_is_carried() {
        let filled = cascade(vec![CellValue::Integer(0), CellValue::Empty]);
        assert_eq!(filled, vec![CellValue::Integer(0), CellValue::Integer(0)]);
    }
}
