//! Drag-data channel payload.
//!
//! A drag carries its source position as plain text. Reading it back uses
//! leading-integer semantics: `"2px"` reads as 2, `"x2"` reads as nothing.

use super::PositionIndex;

/// Text carried from drag start to drop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragPayload(String);

impl DragPayload {
    /// Payload naming the dragged position.
    pub fn from_position(position: PositionIndex) -> Self {
        Self(position.to_string())
    }

    /// Arbitrary text, as another drag source might supply.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Raw payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading integer of the payload, if it has one.
    pub fn parse_integer(&self) -> Option<i64> {
        parse_leading_integer(&self.0)
    }

    /// Board position named by the payload.
    ///
    /// `None` for non-numeric and negative payloads.
    pub fn position(&self) -> Option<PositionIndex> {
        self.parse_integer()
            .and_then(|value| usize::try_from(value).ok())
            .map(PositionIndex::new)
    }
}

/// Parse optional whitespace, an optional sign, then at least one digit.
///
/// Trailing text after the digits is ignored. Values that overflow `i64`
/// are treated as not a number.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_from_position_reads_back() {
        let payload = DragPayload::from_position(PositionIndex::new(12));
        assert_eq!(payload.as_str(), "12");
        assert_eq!(payload.position(), Some(PositionIndex::new(12)));
    }

    #[test]
    fn leading_integer_ignores_trailing_text() {
        assert_eq!(parse_leading_integer("2px"), Some(2));
        assert_eq!(parse_leading_integer("  7 "), Some(7));
        assert_eq!(parse_leading_integer("+3"), Some(3));
    }

    #[test]
    fn leading_integer_rejects_non_numbers() {
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("abc"), None);
        assert_eq!(parse_leading_integer("x2"), None);
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn negative_payload_names_no_position() {
        let payload = DragPayload::from_text("-1");
        assert_eq!(payload.parse_integer(), Some(-1));
        assert_eq!(payload.position(), None);
    }
}
