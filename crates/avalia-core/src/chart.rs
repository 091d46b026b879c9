//! Display-time numeric view of the body-composition group.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::record::AssessmentRecord;

/// One bar of the body-composition chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// The four body-composition values, in display order.
pub fn body_composition_chart(record: &AssessmentRecord) -> Vec<ChartBar> {
    let comp = &record.body_composition;
    [
        ("Peso Atual (Kg)", &comp.current_weight),
        ("Peso Desejável (Kg)", &comp.desired_weight),
        ("Massa Magra (Kg)", &comp.lean_mass),
        ("Peso de Gordura (Kg)", &comp.fat_weight),
    ]
    .into_iter()
    .map(|(label, raw)| ChartBar {
        label: label.to_string(),
        value: parse_measurement(raw),
    })
    .collect()
}

/// Best-effort number parsing for free-form field text.
///
/// Skips leading whitespace and reads the longest numeric prefix
/// (`"70.5 kg"` is `70.5`). Anything without digits, or a non-finite result,
/// is `0.0`.
pub fn parse_measurement(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        digit_count += frac_end - (end + 1);
        end = frac_end;
    }

    if digit_count == 0 {
        return 0.0;
    }

    // An exponent only counts when it has digits of its own.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::set_field;
    use crate::models::record::BodyCompositionField;

    #[test]
    fn chart_follows_the_record() {
        let chart = body_composition_chart(&AssessmentRecord::default_snapshot());
        let values: Vec<f64> = chart.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![70.0, 66.0, 48.78, 21.22]);
        assert_eq!(chart[0].label, "Peso Atual (Kg)");
        assert_eq!(chart[3].label, "Peso de Gordura (Kg)");
    }

    #[test]
    fn unparsable_values_chart_as_zero() {
        let record = set_field(
            &AssessmentRecord::default_snapshot(),
            BodyCompositionField::LeanMass,
            "não medido",
        );
        let chart = body_composition_chart(&record);
        assert_eq!(chart[2].value, 0.0);
        assert_eq!(chart[0].value, 70.0);
    }

    #[test]
    fn parses_numeric_prefixes() {
        assert_eq!(parse_measurement("70.00"), 70.0);
        assert_eq!(parse_measurement("  66 kg"), 66.0);
        assert_eq!(parse_measurement("-1.5x"), -1.5);
        assert_eq!(parse_measurement(".5"), 0.5);
        assert_eq!(parse_measurement("5."), 5.0);
        assert_eq!(parse_measurement("1e3"), 1000.0);
        assert_eq!(parse_measurement("2e"), 2.0);
        assert_eq!(parse_measurement("3,5"), 3.0);
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_measurement(""), 0.0);
        assert_eq!(parse_measurement("-"), 0.0);
        assert_eq!(parse_measurement("."), 0.0);
        assert_eq!(parse_measurement("kg 70"), 0.0);
        assert_eq!(parse_measurement("1e999"), 0.0);
    }
}
