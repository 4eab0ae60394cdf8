//! Core generation logic - framework-agnostic dataset builders.
//!
//! Each generator is a pure synchronous function: it owns a freshly seeded
//! RNG for the duration of one call and returns a fully materialized table.
//! Nothing here touches global random state, so interleaving calls to the
//! sales and finance generators cannot perturb either one's output.

/// Market snapshot table generation.
pub mod finance;
/// Sales transaction table generation.
pub mod sales;

/// Fixed seed used by every generator invocation. Reseeding per call is the
/// reproducibility contract: same inputs, bit-identical table.
pub(crate) const DEMO_SEED: u64 = 42;

/// Rounds to 2 decimal places, matching the precision of every currency
/// column in the generated tables.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 1 decimal place, used for the `Profit Margin` column.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
