//! History analytics over past hedging decisions.
//! All functions are pure: they borrow the records and return new values.

use crate::market::{format_inr, round1, Commodity};
use chrono::{Datelike, NaiveDate};
use smallvec::SmallVec;
use std::collections::BTreeMap;

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub commodity: Commodity,
    /// Quintals
    pub quantity: f64,
    pub locked_price: f64,
    pub actual_price: f64,
    pub hedged: bool,
    pub profit: f64,
}

/// A transaction as the history page lists it.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub profit_pct: f64,
    pub decision: String,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub label: String,
    pub profit: f64,
    pub cumulative: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct WinLoss {
    pub profitable: usize,
    pub loss: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    pub month: String,
    pub profit: f64,
    pub revenue: f64,
    pub transactions: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total_profit: f64,
    pub total_transactions: usize,
    /// Percent, one decimal. Zero for an empty history.
    pub win_rate: f64,
    pub win_loss: WinLoss,
    pub cumulative_pnl: Vec<CumulativePoint>,
    /// Chronological. A year of history stays inline.
    pub monthly: SmallVec<[MonthlyAggregate; 12]>,
}

impl Transaction {
    #[inline]
    pub fn is_win(&self) -> bool {
        self.profit > 0.0
    }

    #[inline]
    pub fn revenue(&self) -> f64 {
        self.quantity * self.actual_price
    }

    /// Profit relative to the locked notional, percent, one decimal.
    pub fn profit_pct(&self) -> f64 {
        let notional = self.quantity * self.locked_price;
        if notional == 0.0 {
            return 0.0;
        }
        round1(self.profit / notional * 100.0)
    }

    pub fn decision(&self) -> String {
        if self.hedged {
            format!("Hedged at {}", format_inr(self.locked_price))
        } else {
            "Stayed Unhedged".to_string()
        }
    }

    pub fn view(&self) -> TransactionView {
        TransactionView {
            transaction: self.clone(),
            profit_pct: self.profit_pct(),
            decision: self.decision(),
        }
    }
}

pub fn total_profit(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.profit).sum()
}

pub fn win_loss(transactions: &[Transaction]) -> WinLoss {
    let profitable = transactions.iter().filter(|t| t.is_win()).count();
    WinLoss {
        profitable,
        loss: transactions.len() - profitable,
    }
}

/// Share of profitable transactions in percent, one decimal.
pub fn win_rate(transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    let wins = win_loss(transactions).profitable;
    round1(wins as f64 / transactions.len() as f64 * 100.0)
}

/// Running P&L in date order. Same-day records keep their input order.
pub fn cumulative_pnl(transactions: &[Transaction]) -> Vec<CumulativePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|t| t.date);

    let mut running = 0.0;
    ordered
        .into_iter()
        .map(|t| {
            running += t.profit;
            CumulativePoint {
                date: t.date,
                label: t.date.format("%b %-d").to_string(),
                profit: t.profit,
                cumulative: running,
            }
        })
        .collect()
}

pub fn monthly_aggregates(transactions: &[Transaction]) -> SmallVec<[MonthlyAggregate; 12]> {
    // keyed by (year, month) so iteration is chronological
    let mut months: BTreeMap<(i32, u32), MonthlyAggregate> = BTreeMap::new();
    for t in transactions {
        let entry = months
            .entry((t.date.year(), t.date.month()))
            .or_insert_with(|| MonthlyAggregate {
                month: t.date.format("%b %Y").to_string(),
                profit: 0.0,
                revenue: 0.0,
                transactions: 0,
            });
        entry.profit += t.profit;
        entry.revenue += t.revenue();
        entry.transactions += 1;
    }
    months.into_values().collect()
}

pub fn summarize(transactions: &[Transaction]) -> HistorySummary {
    HistorySummary {
        total_profit: total_profit(transactions),
        total_transactions: transactions.len(),
        win_rate: win_rate(transactions),
        win_loss: win_loss(transactions),
        cumulative_pnl: cumulative_pnl(transactions),
        monthly: monthly_aggregates(transactions),
    }
}

/// Newest first, the order the history page lists them.
pub fn transaction_views(transactions: &[Transaction]) -> Vec<TransactionView> {
    let mut views: Vec<TransactionView> = transactions.iter().map(Transaction::view).collect();
    views.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));
    views
}

// (id, y, m, d, commodity, quantity, locked, actual, hedged, profit)
const HISTORY: [(u32, i32, u32, u32, Commodity, f64, f64, f64, bool, f64); 3] = [
    (1, 2025, 2, 1, Commodity::Mustard, 100.0, 5600.0, 5820.0, true, 2000.0),
    (2, 2025, 1, 28, Commodity::Soybean, 150.0, 4250.0, 4280.0, false, 4500.0),
    (3, 2025, 1, 25, Commodity::Groundnut, 80.0, 6100.0, 6120.0, true, 1600.0),
];

/// The built-in decision history shown on the analytics page. Profits are
/// the recorded outcomes, not recomputed from the prices.
pub fn transaction_history() -> Vec<Transaction> {
    HISTORY
        .iter()
        .map(
            |&(id, y, m, d, commodity, quantity, locked_price, actual_price, hedged, profit)| Transaction {
                id,
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                commodity,
                quantity,
                locked_price,
                actual_price,
                hedged,
                profit,
            },
        )
        .collect()
}
