//! Free-text lab result interpretation.

use pji_core::models::AbnormalFlag;

/// Parse operator-entered numeric text. Anything that is not a plain
/// float is "no signal".
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Flag a result against its normal range.
///
/// Range grammar, checked in order: `"low - high"` (split on the first
/// dash), then `"< max"`, then `"> min"`. Empty inputs, unparseable
/// results, and unparseable bounds all yield no flag rather than an
/// error — the operator may still be typing.
pub fn classify_result(result: &str, normal_range: &str) -> Option<AbnormalFlag> {
    if result.trim().is_empty() || normal_range.trim().is_empty() {
        return None;
    }
    let value = parse_number(result)?;

    if let Some((low, high)) = normal_range.split_once('-') {
        let low = parse_number(low)?;
        let high = parse_number(high)?;
        if value < low {
            return Some(AbnormalFlag::Low);
        }
        if value > high {
            return Some(AbnormalFlag::High);
        }
        return None;
    }

    let trimmed = normal_range.trim();
    if let Some(rest) = trimmed.strip_prefix('<') {
        let max = parse_number(rest)?;
        return (value > max).then_some(AbnormalFlag::High);
    }
    if let Some(rest) = trimmed.strip_prefix('>') {
        let min = parse_number(rest)?;
        return (value < min).then_some(AbnormalFlag::Low);
    }

    None
}
