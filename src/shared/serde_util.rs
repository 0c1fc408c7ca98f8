//! Custom serde + formatting helpers for backend wire quirks.

use rust_decimal::Decimal;

/// Formats an optional monetary amount for display.
///
/// The backend omits `pricePerUnit`/`totalAmount` on some legacy orders;
/// those render as a placeholder dash instead of failing.
pub fn format_amount(amount: Option<Decimal>) -> String {
    match amount {
        Some(a) => a.normalize().to_string(),
        None => "-".to_string(),
    }
}

/// Deserializes a Decimal that the backend may send as a JSON number,
/// a string, or (for optional fields) omit entirely.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    fn convert<E: serde::de::Error>(raw: Raw) -> Result<Decimal, E> {
        match raw {
            Raw::Num(n) => Decimal::try_from(n)
                .map_err(|e| E::custom(format!("invalid amount: {e}"))),
            Raw::Str(s) => Decimal::from_str(&s)
                .map_err(|e| E::custom(format!("invalid amount: {e}"))),
        }
    }

    /// Optional amount: `pricePerUnit`/`totalAmount` on legacy orders.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => convert(raw).map(Some),
        }
    }

    /// Required amount: catalog item `price`.
    pub fn required<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        convert(Raw::deserialize(deserializer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_amount_present() {
        assert_eq!(format_amount(Some(Decimal::new(500, 0))), "500");
        assert_eq!(format_amount(Some(Decimal::new(4999, 2))), "49.99");
    }

    #[test]
    fn test_format_amount_missing_is_dash() {
        assert_eq!(format_amount(None), "-");
    }

    #[test]
    fn test_lenient_decimal_accepts_number_and_string() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
            total: Option<Decimal>,
        }

        let r: Row = serde_json::from_str(r#"{"total": 500}"#).unwrap();
        assert_eq!(r.total, Some(Decimal::new(500, 0)));

        let r: Row = serde_json::from_str(r#"{"total": "499.50"}"#).unwrap();
        assert_eq!(r.total, Some(Decimal::new(49950, 2)));

        let r: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(r.total, None);
    }

    #[test]
    fn test_lenient_required_accepts_number_and_string() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(deserialize_with = "lenient_decimal::required")]
            price: Decimal,
        }

        let r: Row = serde_json::from_str(r#"{"price": 1200}"#).unwrap();
        assert_eq!(r.price, Decimal::new(1200, 0));

        let r: Row = serde_json::from_str(r#"{"price": "350"}"#).unwrap();
        assert_eq!(r.price, Decimal::new(350, 0));

        assert!(serde_json::from_str::<Row>(r#"{}"#).is_err());
    }
}
