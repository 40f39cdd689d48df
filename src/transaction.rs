// Transaction value type
// Core fields are immutable once constructed: corrections are new entries

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One recorded income or expense event.
///
/// `amount` is signed: positive for income, negative for expenses.
/// `category` and `description` are free text, case-sensitive, never
/// normalized. There is no edit or delete operation; a wrong entry is
/// corrected by recording a compensating one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,

    /// Stored as a JSON number, but older files may carry it as a numeric
    /// string ("-4.50"); both forms parse.
    #[serde(deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,

    pub category: String,

    /// Calendar date only, serialized as ISO `YYYY-MM-DD`.
    pub posted_on: NaiveDate,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        posted_on: NaiveDate,
    ) -> Self {
        Transaction {
            description: description.into(),
            amount,
            category: category.into(),
            posted_on,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric amount: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serialize_uses_iso_date_and_numeric_amount() {
        let tx = Transaction::new("Coffee", -4.5, "food", date(2024, 1, 5));
        let json = serde_json::to_string(&tx).unwrap();

        assert!(json.contains("\"posted_on\":\"2024-01-05\""));
        assert!(json.contains("\"amount\":-4.5"));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let tx = Transaction::new("Paycheck", 2000.0, "salary", date(2024, 1, 1));
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(back, tx);
    }

    #[test]
    fn test_amount_accepts_numeric_string() {
        let json = r#"{
            "description": "Coffee",
            "amount": "-4.50",
            "category": "food",
            "posted_on": "2024-01-05"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.amount, -4.5);
        assert!(tx.is_expense());
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let json = r#"{
            "description": "Coffee",
            "amount": "lots",
            "category": "food",
            "posted_on": "2024-01-05"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        let json = r#"{
            "description": "Coffee",
            "amount": -4.5,
            "category": "food",
            "posted_on": "01/05/2024"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{
            "description": "Coffee",
            "amount": -4.5,
            "posted_on": "2024-01-05"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
