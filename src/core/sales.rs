//! Sales transaction table generation.
//!
//! `generate_sample_data` builds a table of independent synthetic sales
//! records from the fixed catalogs in [`crate::catalog`]. Every call seeds
//! its own RNG with the fixed demo seed, so two calls with the same count
//! (on the same day) return identical tables, field for field.

use crate::{
    catalog::{PRODUCTS, QUANTITY_CHOICES, QUANTITY_WEIGHTS, REGIONS, SALES_REPS},
    core::{DEMO_SEED, round1, round2},
    errors::Result,
    models::SalesRecord,
};
use chrono::{Duration, NaiveDate, Utc};
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, weighted::WeightedIndex},
    rngs::StdRng,
};

/// Generates `count` synthetic sales records dated within the last year.
///
/// The reference start date is today minus 365 days; each record falls on a
/// uniformly drawn day offset in `[0, 365]` from it. `count == 0` returns an
/// empty table (the column schema lives on [`SalesRecord`] itself).
///
/// # Errors
/// Returns an error only if the quantity weight table cannot form a valid
/// weighted distribution.
pub fn generate_sample_data(count: usize) -> Result<Vec<SalesRecord>> {
    let start_date = Utc::now().date_naive() - Duration::days(365);
    generate_sample_data_from(start_date, count)
}

/// Same as [`generate_sample_data`] but with an explicit reference start
/// date, so callers (and tests) can pin the `Date` column.
///
/// # Errors
/// See [`generate_sample_data`].
pub fn generate_sample_data_from(
    start_date: NaiveDate,
    count: usize,
) -> Result<Vec<SalesRecord>> {
    // Locally-owned RNG: reseeding here must not disturb any other caller.
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let quantity_dist = WeightedIndex::new(QUANTITY_WEIGHTS)?;

    tracing::debug!(count, %start_date, "generating sales records");

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let date = start_date + Duration::days(rng.random_range(0..=365));

        let (product, category) = PRODUCTS[rng.random_range(0..PRODUCTS.len())];
        let region = REGIONS[rng.random_range(0..REGIONS.len())];
        let sales_rep = SALES_REPS[rng.random_range(0..SALES_REPS.len())];
        let quantity = QUANTITY_CHOICES[quantity_dist.sample(&mut rng)];

        let (price_lo, price_hi) = category.price_range();
        let unit_price = round2(rng.random_range(price_lo..price_hi));
        let total_amount = round2(f64::from(quantity) * unit_price);

        let (margin_lo, margin_hi) = category.margin_range();
        let profit_margin = round1(rng.random_range(margin_lo..margin_hi) * 100.0);

        records.push(SalesRecord {
            date,
            product: product.to_string(),
            category: category.name().to_string(),
            region: region.to_string(),
            sales_rep: sales_rep.to_string(),
            quantity,
            unit_price,
            total_amount,
            profit_margin,
        });
    }

    Ok(records)
}

/// A 500-record table, sized for aggregation demos. Pure convenience over
/// [`generate_sample_data`].
///
/// # Errors
/// See [`generate_sample_data`].
pub fn get_aggregation_demo_data() -> Result<Vec<SalesRecord>> {
    generate_sample_data(500)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{fixed_start_date, product_category_map};
    use std::collections::HashMap;

    #[test]
    fn test_generates_exactly_the_requested_count() -> Result<()> {
        let records = generate_sample_data_from(fixed_start_date(), 137)?;
        assert_eq!(records.len(), 137);
        Ok(())
    }

    #[test]
    fn test_zero_count_yields_empty_table() -> Result<()> {
        let records = generate_sample_data(0)?;
        assert!(records.is_empty());
        // The schema survives an empty table: it serializes as an empty
        // JSON array, with columns defined by the record type.
        assert_eq!(serde_json::to_string(&records)?, "[]");
        Ok(())
    }

    #[test]
    fn test_category_always_matches_product() -> Result<()> {
        let lookup = product_category_map();
        let records = generate_sample_data_from(fixed_start_date(), 500)?;
        for record in &records {
            let expected = lookup.get(record.product.as_str()).unwrap();
            assert_eq!(record.category, expected.name(), "for {}", record.product);
        }
        Ok(())
    }

    #[test]
    fn test_total_amount_is_quantity_times_unit_price() -> Result<()> {
        let records = generate_sample_data_from(fixed_start_date(), 500)?;
        for record in &records {
            let expected = crate::core::round2(f64::from(record.quantity) * record.unit_price);
            assert_eq!(record.total_amount, expected);
        }
        Ok(())
    }

    #[test]
    fn test_price_and_margin_stay_within_category_bands() -> Result<()> {
        let lookup = product_category_map();
        let records = generate_sample_data_from(fixed_start_date(), 500)?;
        for record in &records {
            let category = *lookup.get(record.product.as_str()).unwrap();

            let (price_lo, price_hi) = category.price_range();
            assert!(record.unit_price >= price_lo && record.unit_price <= price_hi);

            let (margin_lo, margin_hi) = category.margin_range();
            let margin_fraction = record.profit_margin / 100.0;
            // Rounding to 1dp of the percentage can nudge a draw just past
            // the band edge, so allow half a unit of slack.
            assert!(margin_fraction >= margin_lo - 0.0005);
            assert!(margin_fraction <= margin_hi + 0.0005);
        }
        Ok(())
    }

    #[test]
    fn test_dates_fall_within_the_year_window() -> Result<()> {
        let start = fixed_start_date();
        let records = generate_sample_data_from(start, 500)?;
        for record in &records {
            assert!(record.date >= start);
            assert!(record.date <= start + Duration::days(365));
        }
        Ok(())
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() -> Result<()> {
        let first = generate_sample_data_from(fixed_start_date(), 100)?;
        let second = generate_sample_data_from(fixed_start_date(), 100)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_quantity_frequencies_approximate_the_weights() -> Result<()> {
        let records = generate_sample_data_from(fixed_start_date(), 10_000)?;
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for record in &records {
            *counts.entry(record.quantity).or_default() += 1;
        }

        for (choice, weight) in QUANTITY_CHOICES.iter().zip(QUANTITY_WEIGHTS) {
            let observed = *counts.get(choice).unwrap_or(&0) as f64 / 10_000.0;
            assert!(
                (observed - weight).abs() < 0.02,
                "quantity {choice}: observed {observed}, expected {weight}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_aggregation_demo_data_is_five_hundred_records() -> Result<()> {
        assert_eq!(get_aggregation_demo_data()?.len(), 500);
        Ok(())
    }
}
