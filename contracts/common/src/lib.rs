//! Shared building blocks for the accrual ledger contracts.
//!
//! - [`tiers`] — step tables turning time staked and balance size into scores.
//! - [`bonus`] — maps a pair of scores to a capped annual bonus rate.
//! - [`scoring`] — the score record and the cross-contract scorer client.
//! - [`admin_tiers`] — three-level operator authorization.
//!
//! Everything except `admin_tiers` is pure and has no storage footprint.

#![no_std]

pub mod admin_tiers;
pub mod bonus;
pub mod scoring;
pub mod tiers;

pub use scoring::{ActivityScore, ActivityScorerClient};

/// Denominator for every basis-point quantity.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Seconds in a 365-day year, the accrual period for all annual rates.
pub const SECONDS_PER_YEAR: i128 = 31_536_000;
