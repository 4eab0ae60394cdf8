//! Shared test utilities for `demogen`.
//!
//! Helpers for pinning the time-dependent inputs (reference start date,
//! snapshot timestamp) so generator tests compare full tables for equality.

#![allow(clippy::unwrap_used)]

use crate::catalog::{Category, PRODUCTS};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;

/// A fixed reference start date for the sales `Date` column.
pub fn fixed_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A fixed snapshot time for the finance `Last Updated` column.
pub fn fixed_snapshot_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap()
}

/// The product→category lookup as a map, for validating generated rows.
pub fn product_category_map() -> HashMap<&'static str, Category> {
    PRODUCTS.iter().copied().collect()
}
