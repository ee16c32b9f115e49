//! Settlement math shared by the mutating entry points and the preview.
//!
//! Nothing here touches storage. Callers load a [`GlobalState`] and a
//! [`UserAccount`], run them through [`refresh_index`], [`settle_base`] and
//! [`settle_bonus`] in that order, and either persist the result or just
//! read it back. Every division floors, and the division order below is
//! part of the contract: reassociating it changes what users are paid.

use common::{BPS_DENOMINATOR, SECONDS_PER_YEAR};

use crate::storage::{GlobalState, UserAccount};
use crate::ContractError;

/// Fixed-point scale of `reward_per_token_index`.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Index growth per second for an annual rate in basis points.
///
/// ```text
/// rate × PRECISION / BPS_DENOMINATOR / SECONDS_PER_YEAR
/// ```
pub fn index_per_second(base_rate_bps: i128) -> Result<i128, ContractError> {
    let scaled = base_rate_bps
        .checked_mul(PRECISION)
        .ok_or(ContractError::MathOverflow)?;
    Ok(scaled / BPS_DENOMINATOR / SECONDS_PER_YEAR)
}

/// Base reward earned by `staked` units while the index moved from `paid`
/// to `index`.
pub fn base_owed(staked: i128, index: i128, paid: i128) -> Result<i128, ContractError> {
    let delta = index.checked_sub(paid).ok_or(ContractError::MathOverflow)?;
    mul_div_floor(staked, delta, PRECISION)
}

/// Bonus earned by `staked` units over `elapsed` seconds at `bps` per year.
///
/// ```text
/// staked × bps × elapsed / BPS_DENOMINATOR / SECONDS_PER_YEAR
/// ```
///
/// Flooring twice equals flooring once by the product of the divisors, so
/// this is a single `mul_div_floor` by `BPS_DENOMINATOR × SECONDS_PER_YEAR`.
pub fn bonus_owed(staked: i128, bps: u32, elapsed: u64) -> Result<i128, ContractError> {
    let rate_time = i128::from(bps) * i128::from(elapsed);
    mul_div_floor(staked, rate_time, BPS_DENOMINATOR * SECONDS_PER_YEAR)
}

/// `floor(a × b / d)` for a positive `d`, without forming `a × b`.
///
/// Each operand is split around `d` as `x = x_hi·d + x_lo` with
/// `0 <= x_lo < d`, giving
///
/// ```text
/// a × b / d = a_hi·b + a_lo·b_hi + floor(a_lo·b_lo / d)
/// ```
///
/// Every intermediate is bounded by the result or by `d²`, so a position
/// only overflows when the amount actually owed does not fit in an `i128`.
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> Result<i128, ContractError> {
    if d <= 0 {
        return Err(ContractError::MathOverflow);
    }
    let (a_hi, a_lo) = (a.div_euclid(d), a.rem_euclid(d));
    let (b_hi, b_lo) = (b.div_euclid(d), b.rem_euclid(d));

    let whole = a_hi
        .checked_mul(b)
        .and_then(|v| v.checked_add(a_lo.checked_mul(b_hi)?))
        .ok_or(ContractError::MathOverflow)?;
    let low = a_lo
        .checked_mul(b_lo)
        .ok_or(ContractError::MathOverflow)?
        .div_euclid(d);
    whole.checked_add(low).ok_or(ContractError::MathOverflow)
}

/// Bring the global index up to `now`.
///
/// With nothing staked the index is frozen but the clock still moves, so a
/// staking-free interval is never credited to whoever stakes next.
pub fn refresh_index(state: &mut GlobalState, now: u64) -> Result<(), ContractError> {
    let elapsed = now.saturating_sub(state.last_update_time);

    if state.total_staked > 0 && elapsed > 0 {
        let growth = index_per_second(state.base_rate_annual_bps)?
            .checked_mul(i128::from(elapsed))
            .ok_or(ContractError::MathOverflow)?;
        state.reward_per_token_index = state
            .reward_per_token_index
            .checked_add(growth)
            .ok_or(ContractError::MathOverflow)?;
    }

    state.last_update_time = state.last_update_time.max(now);
    Ok(())
}

/// Move base reward owed since the user's last snapshot into
/// `accrued_rewards`. Must follow [`refresh_index`] on the same `state`.
///
/// A second call against an unchanged index adds nothing.
pub fn settle_base(state: &GlobalState, account: &mut UserAccount) -> Result<(), ContractError> {
    let owed = base_owed(
        account.staked_balance,
        state.reward_per_token_index,
        account.reward_per_token_paid,
    )?;
    account.accrued_rewards = account
        .accrued_rewards
        .checked_add(owed)
        .ok_or(ContractError::MathOverflow)?;
    account.reward_per_token_paid = state.reward_per_token_index;
    Ok(())
}

/// Move bonus owed since the user's bonus checkpoint into `accrued_rewards`.
///
/// `current_bps` is only invoked when there is time to integrate over, so
/// callers can defer a cross-contract lookup behind it. The balance used is
/// whatever `account` holds now, i.e. the pre-mutation balance when called
/// ahead of a deposit or withdrawal.
pub fn settle_bonus<F>(
    account: &mut UserAccount,
    now: u64,
    current_bps: F,
) -> Result<(), ContractError>
where
    F: FnOnce() -> u32,
{
    let checkpoint = match account.bonus_checkpoint_time {
        Some(t) if account.staked_balance > 0 => t,
        _ => {
            account.bonus_checkpoint_time = Some(now);
            return Ok(());
        }
    };

    let elapsed = now.saturating_sub(checkpoint);
    if elapsed == 0 {
        return Ok(());
    }

    let bps = current_bps();
    if bps > 0 {
        let bonus = bonus_owed(account.staked_balance, bps, elapsed)?;
        account.accrued_rewards = account
            .accrued_rewards
            .checked_add(bonus)
            .ok_or(ContractError::MathOverflow)?;
    }
    account.bonus_checkpoint_time = Some(now);
    Ok(())
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
