use common::admin_tiers::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const GLOBAL: Symbol = symbol_short!("GLOBAL");
const TOTAL_FUNDED: Symbol = symbol_short!("TOT_FUND");
const TOTAL_CLAIMED: Symbol = symbol_short!("TOT_CLMD");

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_ACCOUNT: Symbol = symbol_short!("ACCOUNT");

const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

// ── Records ──────────────────────────────────────────────────────────────────

/// Addresses fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub stake_token: Address,
    pub reward_token: Address,
    pub activity_scorer: Address,
}

/// The single ledger-wide accumulator.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlobalState {
    pub total_staked: i128,
    /// Cumulative base reward per staked unit, scaled by `PRECISION`.
    pub reward_per_token_index: i128,
    pub last_update_time: u64,
    pub base_rate_annual_bps: i128,
}

/// A user's position and settlement checkpoints.
///
/// Created on first touch and never removed; a fully withdrawn user keeps
/// the record with a zero balance.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserAccount {
    pub staked_balance: i128,
    /// Index value at the last base settlement.
    pub reward_per_token_paid: i128,
    /// Settled and claimable.
    pub accrued_rewards: i128,
    /// `None` until the first bonus settlement of the current position.
    pub bonus_checkpoint_time: Option<u64>,
    /// `None` while the position is empty.
    pub stake_start_time: Option<u64>,
}

// ── Accessors ────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn get_global_state(env: &Env) -> GlobalState {
    env.storage().instance().get(&GLOBAL).unwrap_or_default()
}

pub fn set_global_state(env: &Env, state: &GlobalState) {
    env.storage().instance().set(&GLOBAL, state);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn get_account(env: &Env, user: &Address) -> UserAccount {
    env.storage()
        .persistent()
        .get(&(USER_ACCOUNT, user.clone()))
        .unwrap_or_default()
}

pub fn set_account(env: &Env, user: &Address, account: &UserAccount) {
    let key = (USER_ACCOUNT, user.clone());
    env.storage().persistent().set(&key, account);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_total_funded(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_FUNDED).unwrap_or(0)
}

pub fn set_total_funded(env: &Env, amount: i128) {
    env.storage().instance().set(&TOTAL_FUNDED, &amount);
}

pub fn get_total_claimed(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_CLAIMED).unwrap_or(0)
}

pub fn set_total_claimed(env: &Env, amount: i128) {
    env.storage().instance().set(&TOTAL_CLAIMED, &amount);
}
