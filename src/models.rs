//! Record types for the generated tables.
//!
//! The serialized field names are the column names downstream grid demos
//! index records by (e.g. `"Total Amount"`, `"Profit Margin"`), so the
//! `#[serde(rename)]` attributes here are load-bearing: changing one breaks
//! every consumer of the table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Column names of the sales table, in declaration order.
pub const SALES_COLUMNS: [&str; 9] = [
    "Date",
    "Product",
    "Category",
    "Region",
    "Sales Rep",
    "Quantity",
    "Unit Price",
    "Total Amount",
    "Profit Margin",
];

/// One row of the synthetic sales table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Transaction date, within the last year.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Product name from the fixed 20-entry catalog.
    #[serde(rename = "Product")]
    pub product: String,
    /// Category, always consistent with the product per the catalog.
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Sales Rep")]
    pub sales_rep: String,
    /// Units sold, weighted towards small orders.
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    /// Price per unit in dollars, 2 decimal places.
    #[serde(rename = "Unit Price")]
    pub unit_price: f64,
    /// Always `round2(quantity * unit_price)`.
    #[serde(rename = "Total Amount")]
    pub total_amount: f64,
    /// Margin as a percentage (e.g. 32.5), 1 decimal place.
    #[serde(rename = "Profit Margin")]
    pub profit_margin: f64,
}

/// One row of the synthetic market-snapshot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    /// Current price: base price plus today's change, 2 decimal places.
    #[serde(rename = "Price")]
    pub price: f64,
    /// Absolute change from the base price.
    #[serde(rename = "Change")]
    pub change: f64,
    /// Percentage change, in [-10, 10].
    #[serde(rename = "Change%")]
    pub change_pct: f64,
    /// Shares traded today.
    #[serde(rename = "Volume")]
    pub volume: u64,
    /// Market capitalization in billions of dollars.
    #[serde(rename = "Market Cap (B)")]
    pub market_cap_b: f64,
    #[serde(rename = "52W Low")]
    pub week_52_low: f64,
    #[serde(rename = "52W High")]
    pub week_52_high: f64,
    /// Price/earnings ratio; absent when not meaningful.
    #[serde(rename = "P/E Ratio")]
    pub pe_ratio: Option<f64>,
    /// Annual dividend yield percentage; 0 for non-paying stocks.
    #[serde(rename = "Dividend Yield%")]
    pub dividend_yield_pct: f64,
    /// 30-day price history as a sequential random walk from the base price.
    #[serde(rename = "Sparkline")]
    pub sparkline: Vec<f64>,
    /// Wall-clock time this snapshot was generated.
    #[serde(rename = "Last Updated")]
    pub last_updated: DateTime<Utc>,
}
