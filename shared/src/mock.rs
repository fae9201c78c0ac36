//! Mock fixtures.
//!
//! Every dashboard page renders these until (and unless) the server provides real data.

use crate::dto::{AccountSummary, MovementRecord, SaleRecord, SaleStatus, SummaryDeltas};
use crate::money::Cents;

/// Balance the withdrawal screen works against.
pub const WITHDRAWAL_AVAILABLE_CENTS: Cents = 100_000;

pub fn summary() -> AccountSummary {
    AccountSummary {
        available_balance_cents: 0,
        locked_balance_cents: 0,
        sales_today_cents: 0,
        transactions_count: 0,
        deltas: SummaryDeltas {
            available: "+0,0% hoje".to_string(),
            locked: "-0,0% semana".to_string(),
            sales: "+0,0% vs. ontem".to_string(),
            tx: "+0,0% mês".to_string(),
        },
    }
}

pub fn last_sales() -> Vec<SaleRecord> {
    vec![
        sale("19/09 10:15", "Pedido #1234", 12000, SaleStatus::Paid),
        sale("19/09 09:30", "Pedido #1233", 8990, SaleStatus::Pending),
        sale("18/09 16:45", "Pedido #1232", 25000, SaleStatus::Paid),
    ]
}

pub fn movements() -> Vec<MovementRecord> {
    vec![
        movement("19/09 09:10", "Saque", -5000, "Processando"),
        movement("18/09 14:20", "Depósito", 20000, "Concluído"),
        movement("17/09 11:05", "Taxa", -250, "Concluído"),
    ]
}

fn sale(at: &str, title: &str, amount_cents: Cents, status: SaleStatus) -> SaleRecord {
    SaleRecord {
        at: at.to_string(),
        title: title.to_string(),
        amount_cents,
        status,
    }
}

fn movement(at: &str, kind: &str, amount_cents: Cents, status: &str) -> MovementRecord {
    MovementRecord {
        at: at.to_string(),
        kind: kind.to_string(),
        amount_cents,
        status: status.to_string(),
    }
}
