use crate::scoring::ActivityScore;
use crate::tiers::{MAX_BALANCE_POINTS, MAX_TIME_POINTS};

/// Bonus a perfect time score is worth, in basis points per year.
pub const MAX_TIME_BONUS_BPS: u32 = 200;

/// Bonus a perfect balance score is worth, in basis points per year.
pub const MAX_BALANCE_BONUS_BPS: u32 = 300;

/// Ceiling on the combined bonus, in basis points per year.
pub const MAX_TOTAL_BONUS_BPS: u32 = 500;

/// Map a pair of activity scores to an annual bonus rate in basis points.
///
/// Each half is scaled linearly against its own maximum and floored before
/// the two are added, then the sum is clamped to [`MAX_TOTAL_BONUS_BPS`].
pub fn bonus_bps(time_score: u32, balance_score: u32) -> u32 {
    let time_bps = time_score.min(MAX_TIME_POINTS) * MAX_TIME_BONUS_BPS / MAX_TIME_POINTS;
    let balance_bps =
        balance_score.min(MAX_BALANCE_POINTS) * MAX_BALANCE_BONUS_BPS / MAX_BALANCE_POINTS;

    (time_bps + balance_bps).min(MAX_TOTAL_BONUS_BPS)
}

/// Convenience wrapper over [`bonus_bps`] for a stored score record.
pub fn bonus_bps_for(score: &ActivityScore) -> u32 {
    bonus_bps(score.time_score, score.balance_score)
}
