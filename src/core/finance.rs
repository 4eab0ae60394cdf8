//! Market snapshot table generation.
//!
//! `generate_finance_data` derives one snapshot per catalog entry, in
//! catalog order: symbols are never sampled, only truncated. All numeric
//! fields are fresh random draws around each listing's fixed base price,
//! including a 30-day sequential random-walk price history.

use crate::{
    catalog::{Listing, STOCKS},
    core::{DEMO_SEED, round2},
    models::FinanceRecord,
};
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Length of the per-record price history.
const SPARKLINE_DAYS: usize = 30;

/// Generates snapshots for the first `min(num_stocks, 50)` catalog entries.
///
/// Requests beyond the catalog size truncate silently rather than erroring
/// or repeating symbols. The `Last Updated` column carries the wall-clock
/// time of this call; every other field is deterministic under the fixed
/// demo seed.
#[must_use]
pub fn generate_finance_data(num_stocks: usize) -> Vec<FinanceRecord> {
    generate_finance_data_at(num_stocks, Utc::now())
}

/// Same as [`generate_finance_data`] but with an explicit snapshot time, so
/// callers (and tests) can pin the `Last Updated` column.
#[must_use]
pub fn generate_finance_data_at(
    num_stocks: usize,
    last_updated: DateTime<Utc>,
) -> Vec<FinanceRecord> {
    // Locally-owned RNG, independent of the sales generator's.
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);

    let take = num_stocks.min(STOCKS.len());
    tracing::debug!(num_stocks, take, "generating market snapshots");

    let mut records = Vec::with_capacity(take);
    for listing in &STOCKS[..take] {
        records.push(snapshot(listing, last_updated, &mut rng));
    }
    records
}

fn snapshot(listing: &Listing, last_updated: DateTime<Utc>, rng: &mut StdRng) -> FinanceRecord {
    let base = listing.base_price;

    let change_pct = rng.random_range(-10.0..10.0);
    let change = base * change_pct / 100.0;
    let price = base + change;

    let volume = rng.random_range(100_000..10_000_000u64);

    // Shares outstanding between 1B and 5B, in millions granularity.
    let shares_outstanding = f64::from(rng.random_range(1_000..5_000u32)) * 1_000_000.0;
    let market_cap_b = price * shares_outstanding / 1_000_000_000.0;

    let week_52_low = base * rng.random_range(0.7..0.9);
    let week_52_high = base * rng.random_range(1.1..1.5);

    // Technology stocks trade at richer multiples.
    let pe_ratio = if listing.sector == "Technology" {
        rng.random_range(20.0..80.0)
    } else {
        rng.random_range(10.0..35.0)
    };

    // Roughly 30% of stocks pay no dividend.
    let dividend_yield = if rng.random_range(0.0..1.0) > 0.3 {
        rng.random_range(0.0..4.0)
    } else {
        0.0
    };

    // Sequential walk: each day's price depends on the previous day's, so
    // the series is only reproducible as a whole.
    let mut sparkline = Vec::with_capacity(SPARKLINE_DAYS);
    let mut walk = base;
    for _ in 0..SPARKLINE_DAYS {
        walk *= 1.0 + rng.random_range(-0.05..0.05);
        sparkline.push(round2(walk));
    }

    FinanceRecord {
        symbol: listing.symbol.to_string(),
        company: listing.company.to_string(),
        sector: listing.sector.to_string(),
        price: round2(price),
        change: round2(change),
        change_pct: round2(change_pct),
        volume,
        market_cap_b: round2(market_cap_b),
        week_52_low: round2(week_52_low),
        week_52_high: round2(week_52_high),
        pe_ratio: (pe_ratio > 0.0).then_some(round2(pe_ratio)),
        dividend_yield_pct: round2(dividend_yield),
        sparkline,
        last_updated,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::fixed_snapshot_time;

    #[test]
    fn test_returns_catalog_entries_in_order() {
        let records = generate_finance_data(10);
        assert_eq!(records.len(), 10);
        for (record, listing) in records.iter().zip(&STOCKS) {
            assert_eq!(record.symbol, listing.symbol);
            assert_eq!(record.company, listing.company);
            assert_eq!(record.sector, listing.sector);
        }
    }

    #[test]
    fn test_requests_beyond_catalog_truncate_to_fifty() {
        assert_eq!(generate_finance_data(1000).len(), 50);
        assert_eq!(generate_finance_data(50).len(), 50);
        assert_eq!(generate_finance_data(0).len(), 0);
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let at = fixed_snapshot_time();
        let first = generate_finance_data_at(25, at);
        let second = generate_finance_data_at(25, at);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sparklines_are_thirty_positive_prices() {
        for record in generate_finance_data(50) {
            assert_eq!(record.sparkline.len(), 30);
            assert!(record.sparkline.iter().all(|price| *price > 0.0));
        }
    }

    #[test]
    fn test_derived_fields_stay_in_range() {
        for (record, listing) in generate_finance_data(50).iter().zip(&STOCKS) {
            let base = listing.base_price;

            assert!(record.change_pct >= -10.0 && record.change_pct <= 10.0);
            assert!(record.price > 0.0);
            assert!((100_000..10_000_000).contains(&record.volume));
            assert!(record.market_cap_b > 0.0);

            // Low factor in [0.7, 0.9], high factor in [1.1, 1.5], with 2dp
            // rounding slack at the edges.
            assert!(record.week_52_low >= base * 0.7 - 0.005);
            assert!(record.week_52_low <= base * 0.9 + 0.005);
            assert!(record.week_52_high >= base * 1.1 - 0.005);
            assert!(record.week_52_high <= base * 1.5 + 0.005);
            assert!(record.week_52_low < record.week_52_high);

            let pe = record.pe_ratio.unwrap();
            if record.sector == "Technology" {
                assert!(pe >= 20.0 && pe <= 80.0);
            } else {
                assert!(pe >= 10.0 && pe <= 35.0);
            }

            assert!(record.dividend_yield_pct >= 0.0 && record.dividend_yield_pct <= 4.0);
        }
    }

    #[test]
    fn test_some_stocks_pay_no_dividend() {
        let records = generate_finance_data(50);
        let payers = records
            .iter()
            .filter(|record| record.dividend_yield_pct > 0.0)
            .count();
        // 70% payout probability over 50 stocks leaves both groups
        // populated under the fixed seed.
        assert!(payers > 0 && payers < 50);
    }
}
