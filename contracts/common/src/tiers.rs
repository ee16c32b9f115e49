//! Step functions that bucket a continuous input into a discrete score.
//!
//! Both tables have six levels. An input lands in the highest level whose
//! lower bound it reaches, so a value exactly on a boundary is promoted.

/// Highest score the time table can award.
pub const MAX_TIME_POINTS: u32 = 1_000;

/// Highest score the balance table can award.
pub const MAX_BALANCE_POINTS: u32 = 2_000;

/// Lower bounds (seconds staked) of time levels 1 through 5.
///
/// Roughly one month, six months, one year, two years and three years.
pub const TIME_BOUNDARIES: [u64; 5] = [2_628_000, 15_768_000, 31_536_000, 63_072_000, 94_608_000];

/// Score for each time level, level 0 first.
pub const TIME_POINTS: [u32; 6] = [0, 50, 250, 500, 750, MAX_TIME_POINTS];

/// Lower bounds (base units staked) of balance levels 1 through 5.
pub const BALANCE_BOUNDARIES: [i128; 5] = [5_000, 10_000, 20_000, 50_000, 100_000];

/// Score for each balance level, level 0 first.
pub const BALANCE_POINTS: [u32; 6] = [0, 100, 250, 500, 1_000, MAX_BALANCE_POINTS];

/// Score for a position that has been open for `elapsed` seconds.
pub fn time_points(elapsed: u64) -> u32 {
    let level = TIME_BOUNDARIES
        .iter()
        .take_while(|bound| elapsed >= **bound)
        .count();
    TIME_POINTS[level]
}

/// Score for a position currently holding `staked` base units.
///
/// Non-positive balances always score zero.
pub fn balance_points(staked: i128) -> u32 {
    let level = BALANCE_BOUNDARIES
        .iter()
        .take_while(|bound| staked >= **bound)
        .count();
    BALANCE_POINTS[level]
}

/// True when `points` is one of the values the time table can produce.
pub fn is_time_level(points: u32) -> bool {
    TIME_POINTS.contains(&points)
}

/// True when `points` is one of the values the balance table can produce.
pub fn is_balance_level(points: u32) -> bool {
    BALANCE_POINTS.contains(&points)
}
