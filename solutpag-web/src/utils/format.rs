//! # Display Helpers
//!
//! Styling decisions that depend on data values. Amount formatting itself lives in
//! [`shared::money`].
//!
//! ## Functions
//!
//! - [`sale_status_class`] - Badge classes for a sale's payment state
//! - [`movement_status_class`] - Badge classes for a movement's status
//! - [`movement_amount`] - Signed amount text for the movements table

use shared::dto::{MovementRecord, SaleStatus};
use shared::money::format_signed_brl;

pub fn sale_status_class(status: &SaleStatus) -> &'static str {
    match status {
        SaleStatus::Paid => "badge badge-paid",
        SaleStatus::Pending => "badge badge-pending",
        SaleStatus::Other(_) => "badge badge-muted",
    }
}

pub fn movement_status_class(movement: &MovementRecord) -> &'static str {
    if movement.is_processing() {
        "badge badge-processing"
    } else {
        "badge badge-paid"
    }
}

/// Signed amount, e.g. "- R$ 50,00".
pub fn movement_amount(movement: &MovementRecord) -> String {
    format_signed_brl(movement.amount_cents)
}

/// Tone for a KPI delta caption.
pub fn delta_class(positive: bool) -> &'static str {
    if positive {
        "kpi-delta kpi-delta-pos"
    } else {
        "kpi-delta kpi-delta-neg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::mock;

    #[test]
    fn test_sale_status_class() {
        assert_eq!(sale_status_class(&SaleStatus::Paid), "badge badge-paid");
        assert_eq!(sale_status_class(&SaleStatus::from("refunded")), "badge badge-muted");
    }

    #[test]
    fn test_movement_display() {
        let moves = mock::movements();
        assert_eq!(movement_status_class(&moves[0]), "badge badge-processing");
        assert_eq!(movement_status_class(&moves[1]), "badge badge-paid");
        assert_eq!(movement_amount(&moves[0]), "- R$ 50,00");
        assert_eq!(movement_amount(&moves[1]), "+ R$ 200,00");
    }
}
