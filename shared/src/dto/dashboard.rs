use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::money::Cents;
use crate::mock;

/// Placeholder for a missing date or title.
pub const MISSING_TEXT: &str = "--";

/// Placeholder for a missing kind or status.
pub const MISSING_LABEL: &str = "—";

/// Percentage-change captions shown under each KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDeltas {
    pub available: String,
    pub locked: String,
    pub sales: String,
    pub tx: String,
}

/// Balances and counters for the KPI cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub available_balance_cents: Cents,
    pub locked_balance_cents: Cents,
    pub sales_today_cents: Cents,
    pub transactions_count: u64,
    pub deltas: SummaryDeltas,
}

/// Payment state of a sale.
///
/// Unknown values from the server are kept verbatim in [`SaleStatus::Other`] and displayed
/// literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaleStatus {
    Paid,
    Pending,
    Other(String),
}

impl SaleStatus {
    pub fn label(&self) -> &str {
        match self {
            SaleStatus::Paid => "Pago",
            SaleStatus::Pending => "Pendente",
            SaleStatus::Other(raw) if raw.is_empty() => MISSING_LABEL,
            SaleStatus::Other(raw) => raw,
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            SaleStatus::Paid => "paid",
            SaleStatus::Pending => "pending",
            SaleStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for SaleStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "paid" => SaleStatus::Paid,
            "pending" => SaleStatus::Pending,
            other => SaleStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for SaleStatus {
    fn from(raw: String) -> Self {
        SaleStatus::from(raw.as_str())
    }
}

impl From<SaleStatus> for String {
    fn from(status: SaleStatus) -> Self {
        status.as_wire().to_string()
    }
}

/// One row of the "last sales" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub at: String,
    pub title: String,
    pub amount_cents: Cents,
    pub status: SaleStatus,
}

/// One row of the movements table. The sign of `amount_cents` is the direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    pub at: String,
    pub kind: String,
    pub amount_cents: Cents,
    pub status: String,
}

impl MovementRecord {
    /// Movements still being processed get a different badge tone.
    pub fn is_processing(&self) -> bool {
        self.status.to_lowercase() == "processando"
    }
}

fn text_or(value: &Value, key: &str, fallback: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

fn cents_or(value: &Value, key: &str, fallback: Cents) -> Cents {
    value.get(key).and_then(Value::as_i64).unwrap_or(fallback)
}

/// Decode a summary body. Each field falls back to the mock default on its own.
pub fn decode_summary(body: &Value) -> AccountSummary {
    let mock = mock::summary();
    let deltas = body.get("deltas").unwrap_or(&Value::Null);

    AccountSummary {
        available_balance_cents: cents_or(body, "availableBalanceCents", mock.available_balance_cents),
        locked_balance_cents: cents_or(body, "lockedBalanceCents", mock.locked_balance_cents),
        sales_today_cents: cents_or(body, "salesTodayCents", mock.sales_today_cents),
        transactions_count: body
            .get("transactionsCount")
            .and_then(Value::as_u64)
            .unwrap_or(mock.transactions_count),
        deltas: SummaryDeltas {
            available: text_or(deltas, "available", &mock.deltas.available),
            locked: text_or(deltas, "locked", &mock.deltas.locked),
            sales: text_or(deltas, "sales", &mock.deltas.sales),
            tx: text_or(deltas, "tx", &mock.deltas.tx),
        },
    }
}

/// Decode a sales series body: `{ "points": [..] }` with at least two numbers.
pub fn decode_series(body: &Value) -> Result<Vec<f64>, FetchError> {
    let points = body
        .get("points")
        .and_then(Value::as_array)
        .ok_or(FetchError::Shape("points is not an array"))?;

    if points.len() < 2 {
        return Err(FetchError::Shape("points has fewer than two values"));
    }

    points
        .iter()
        .map(|p| p.as_f64().ok_or(FetchError::Shape("points contains a non-number")))
        .collect()
}

fn non_empty_items(body: &Value) -> Result<&Vec<Value>, FetchError> {
    match body.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => Ok(items),
        Some(_) => Err(FetchError::Shape("items is empty")),
        None => Err(FetchError::Shape("items is not an array")),
    }
}

/// Decode a last-sales body: `{ "items": [..] }`, non-empty.
pub fn decode_sales(body: &Value) -> Result<Vec<SaleRecord>, FetchError> {
    let items = non_empty_items(body)?;
    Ok(items
        .iter()
        .map(|item| SaleRecord {
            at: text_or(item, "at", MISSING_TEXT),
            title: text_or(item, "title", MISSING_TEXT),
            amount_cents: cents_or(item, "amountCents", 0),
            status: SaleStatus::from(text_or(item, "status", MISSING_LABEL)),
        })
        .collect())
}

/// Decode a movements body: `{ "items": [..] }`, non-empty.
pub fn decode_movements(body: &Value) -> Result<Vec<MovementRecord>, FetchError> {
    let items = non_empty_items(body)?;
    Ok(items
        .iter()
        .map(|item| MovementRecord {
            at: text_or(item, "at", MISSING_TEXT),
            kind: text_or(item, "kind", MISSING_LABEL),
            amount_cents: cents_or(item, "amountCents", 0),
            status: text_or(item, "status", MISSING_LABEL),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_full_body() {
        let body = json!({
            "availableBalanceCents": 125000,
            "lockedBalanceCents": 3000,
            "salesTodayCents": 48990,
            "transactionsCount": 17,
            "deltas": { "available": "+2,1% hoje", "locked": "-0,4% semana", "sales": "+8,0% vs. ontem", "tx": "+3,2% mês" }
        });
        let summary = decode_summary(&body);
        assert_eq!(summary.available_balance_cents, 125000);
        assert_eq!(summary.transactions_count, 17);
        assert_eq!(summary.deltas.sales, "+8,0% vs. ontem");
    }

    #[test]
    fn test_summary_fields_fall_back_individually() {
        let body = json!({
            "availableBalanceCents": 5000,
            "lockedBalanceCents": "lots",
            "transactionsCount": -3,
            "deltas": { "tx": "+1,0% mês", "sales": null }
        });
        let summary = decode_summary(&body);
        let mock = mock::summary();
        assert_eq!(summary.available_balance_cents, 5000);
        assert_eq!(summary.locked_balance_cents, mock.locked_balance_cents);
        assert_eq!(summary.sales_today_cents, mock.sales_today_cents);
        assert_eq!(summary.transactions_count, mock.transactions_count);
        assert_eq!(summary.deltas.tx, "+1,0% mês");
        assert_eq!(summary.deltas.sales, mock.deltas.sales);
    }

    #[test]
    fn test_summary_from_non_object_is_mock() {
        assert_eq!(decode_summary(&json!(null)), mock::summary());
        assert_eq!(decode_summary(&json!([1, 2])), mock::summary());
    }

    #[test]
    fn test_series_requires_two_numbers() {
        assert_eq!(decode_series(&json!({ "points": [1, 2.5] })).unwrap(), vec![1.0, 2.5]);
        assert!(decode_series(&json!({ "points": [1] })).is_err());
        assert!(decode_series(&json!({ "points": "1,2" })).is_err());
        assert!(decode_series(&json!({ "points": [1, "x"] })).is_err());
        assert!(decode_series(&json!({})).is_err());
    }

    #[test]
    fn test_sales_items_with_missing_fields() {
        let body = json!({ "items": [
            { "at": "20/09 08:00", "title": "Pedido #2000", "amountCents": 4500, "status": "paid" },
            { "amountCents": 12.5, "status": "refunded" },
            "garbage"
        ]});
        let sales = decode_sales(&body).unwrap();
        assert_eq!(sales.len(), 3);
        assert_eq!(sales[0].status, SaleStatus::Paid);
        assert_eq!(sales[1].at, MISSING_TEXT);
        assert_eq!(sales[1].amount_cents, 0);
        assert_eq!(sales[1].status.label(), "refunded");
        assert_eq!(sales[2].title, MISSING_TEXT);
        assert_eq!(sales[2].status.label(), MISSING_LABEL);
    }

    #[test]
    fn test_empty_items_are_rejected() {
        assert!(decode_sales(&json!({ "items": [] })).is_err());
        assert!(decode_movements(&json!({ "items": [] })).is_err());
        assert!(decode_movements(&json!({ "rows": [{}] })).is_err());
    }

    #[test]
    fn test_movements_decode() {
        let body = json!({ "items": [ { "at": "21/09 10:00", "kind": "Saque", "amountCents": -1500, "status": "PROCESSANDO" } ]});
        let moves = decode_movements(&body).unwrap();
        assert_eq!(moves[0].amount_cents, -1500);
        assert!(moves[0].is_processing());
    }

    #[test]
    fn test_sale_status_labels() {
        assert_eq!(SaleStatus::from("paid").label(), "Pago");
        assert_eq!(SaleStatus::from("pending").label(), "Pendente");
        assert_eq!(SaleStatus::from("chargeback").label(), "chargeback");
        assert_eq!(SaleStatus::from("").label(), MISSING_LABEL);
    }

    #[test]
    fn test_sale_record_wire_names() {
        let record = SaleRecord {
            at: "19/09 10:15".into(),
            title: "Pedido #1234".into(),
            amount_cents: 12000,
            status: SaleStatus::Paid,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["amountCents"], 12000);
        assert_eq!(value["status"], "paid");
    }
}
