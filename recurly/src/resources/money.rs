//! Multi-currency amounts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config;

/// Amounts in cents keyed by ISO currency code.
///
/// On the wire each currency is its own element:
/// `<unit_amount_in_cents><USD>7900</USD><EUR>6900</EUR></unit_amount_in_cents>`.
///
/// ## Examples
///
/// ```rust
/// use recurly::resources::Money;
///
/// let price = Money::new("USD", 79_00).with("EUR", 69_00);
/// assert_eq!(price.get("EUR"), Some(69_00));
/// assert_eq!(price.get("GBP"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(BTreeMap<String, i64>);

impl Money {
    /// A single amount in `currency`.
    pub fn new(currency: impl Into<String>, cents: i64) -> Self {
        Self(BTreeMap::from([(currency.into(), cents)]))
    }

    /// A single amount in the configured default currency.
    pub fn in_default_currency(cents: i64) -> Self {
        Self::new(config::default_currency(), cents)
    }

    /// Adds or replaces the amount for `currency`.
    pub fn with(mut self, currency: impl Into<String>, cents: i64) -> Self {
        self.0.insert(currency.into(), cents);
        self
    }

    /// Sets the amount for `currency`.
    pub fn set(&mut self, currency: impl Into<String>, cents: i64) {
        self.0.insert(currency.into(), cents);
    }

    /// The amount in `currency`.
    pub fn get(&self, currency: &str) -> Option<i64> {
        self.0.get(currency).copied()
    }

    /// Currencies and amounts, ordered by currency code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(currency, cents)| (currency.as_str(), *cents))
    }

    /// Returns `true` if no currency is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::format::WireFormat;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        unit_amount_in_cents: Money,
    }

    #[test]
    fn test_xml_shape() {
        let priced = Priced {
            unit_amount_in_cents: Money::new("USD", 7900).with("EUR", 6900),
        };
        let xml = WireFormat::Xml.encode("plan", &priced).unwrap();
        assert_eq!(
            xml,
            "<plan><unit_amount_in_cents><EUR>6900</EUR><USD>7900</USD></unit_amount_in_cents></plan>"
        );

        let decoded: Priced = WireFormat::Xml
            .decode(
                br#"<plan><unit_amount_in_cents>
                    <USD type="integer">7900</USD>
                </unit_amount_in_cents></plan>"#,
            )
            .unwrap();
        assert_eq!(decoded.unit_amount_in_cents.get("USD"), Some(7900));
    }

    #[test]
    fn test_json_shape() {
        let priced = Priced {
            unit_amount_in_cents: Money::new("USD", 500),
        };
        let json = WireFormat::Json.encode("plan", &priced).unwrap();
        assert_eq!(json, r#"{"unit_amount_in_cents":{"USD":500}}"#);
    }

    #[test]
    fn test_default_currency_follows_thread_override() {
        let _guard = config::scoped(Settings::new().default_currency("EUR"));
        let money = Money::in_default_currency(1200);
        assert_eq!(money.iter().collect::<Vec<_>>(), [("EUR", 1200)]);
    }
}
