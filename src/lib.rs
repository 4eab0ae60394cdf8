//! `demogen` - Deterministic synthetic datasets for data-grid demos
//!
//! This crate generates the two reference tables an interactive grid demo
//! feeds on: a synthetic sales-transaction table and a market-snapshot
//! table. Both are built from fixed catalogs and a fixed-seed RNG, so every
//! run of the demo shows the same data. Display concerns (grids, charts,
//! summary cards) live entirely with consumers of these tables.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Fixed reference tables: product and stock catalogs, price/margin bands
pub mod catalog;
/// Demo run configuration (dataset kind, record count, output path)
pub mod config;
/// Core generation logic - framework-agnostic dataset builders
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Serde record types whose field names are the grid column contract
pub mod models;

#[cfg(test)]
pub mod test_utils;
