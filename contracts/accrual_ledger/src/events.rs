#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub activity_scorer: Address,
    pub base_rate_bps: i128,
    pub timestamp: u64,
}

/// Fired when a user adds to their position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub user: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user takes stake back out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub user: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user is paid their accrued rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an admin changes the annual base rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseRateSetEvent {
    pub old_rate_bps: i128,
    pub new_rate_bps: i128,
    pub timestamp: u64,
}

/// Fired when an admin tops up the reward reserve.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub total_funded: i128,
    pub timestamp: u64,
}

/// Fired when a user's time score is re-bucketed from `elapsed`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityAttestedEvent {
    pub user: Address,
    pub elapsed: u64,
    pub time_score: u32,
    pub timestamp: u64,
}

/// Fired under `PAUSED` or `UNPAUSED` when the emergency stop changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub caller: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    stake_token: Address,
    reward_token: Address,
    activity_scorer: Address,
    base_rate_bps: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
            activity_scorer,
            base_rate_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    user: Address,
    amount: i128,
    new_balance: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), user.clone()),
        DepositedEvent {
            user,
            amount,
            new_balance,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    user: Address,
    amount: i128,
    new_balance: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), user.clone()),
        WithdrawnEvent {
            user,
            amount,
            new_balance,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), user.clone()),
        RewardClaimedEvent {
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_base_rate_set(env: &Env, old_rate_bps: i128, new_rate_bps: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        BaseRateSetEvent {
            old_rate_bps,
            new_rate_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_funded(env: &Env, funder: Address, amount: i128, total_funded: i128) {
    env.events().publish(
        (symbol_short!("FUNDED"), funder.clone()),
        RewardsFundedEvent {
            funder,
            amount,
            total_funded,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_activity_attested(env: &Env, user: Address, elapsed: u64, time_score: u32) {
    env.events().publish(
        (symbol_short!("ATTESTED"), user.clone()),
        ActivityAttestedEvent {
            user,
            elapsed,
            time_score,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, caller: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PauseToggledEvent {
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unpaused(env: &Env, caller: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        PauseToggledEvent {
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}
