/// One source cell before coercion.
///
/// Fields that parse directly as integers become [`RawCell::Number`] at
/// read time; everything else stays text until the coercer handles the
/// percent-suffixed and space-grouped variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(i64),
}

impl RawCell {
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return RawCell::Empty;
        }

        if let Ok(n) = trimmed.parse::<i64>() {
            return RawCell::Number(n);
        }

        RawCell::Text(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer_becomes_number() {
        assert_eq!(RawCell::from_field("592"), RawCell::Number(592));
        assert_eq!(RawCell::from_field(" 592 "), RawCell::Number(592));
        assert_eq!(RawCell::from_field("-7"), RawCell::Number(-7));
    }

    #[test]
    fn test_formatted_values_stay_text() {
        assert_eq!(RawCell::from_field("85%"), RawCell::Text("85%".to_string()));
        assert_eq!(
            RawCell::from_field("1 234 567"),
            RawCell::Text("1 234 567".to_string())
        );
    }

    #[test]
    fn test_blank_field_is_empty() {
        assert_eq!(RawCell::from_field(""), RawCell::Empty);
        assert_eq!(RawCell::from_field("   "), RawCell::Empty);
    }
}
