#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired whenever either half of a user's score is rewritten.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreUpdatedEvent {
    pub user: Address,
    pub time_score: u32,
    pub balance_score: u32,
    pub timestamp: u64,
}

/// Fired when the admin points the scorer at a ledger.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerSetEvent {
    pub admin: Address,
    pub ledger: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

fn publish_score(env: &Env, topic: soroban_sdk::Symbol, user: Address, time: u32, balance: u32) {
    env.events().publish(
        (topic, user.clone()),
        ScoreUpdatedEvent {
            user,
            time_score: time,
            balance_score: balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_balance_score(env: &Env, user: Address, time: u32, balance: u32) {
    publish_score(env, symbol_short!("SCORE_BAL"), user, time, balance);
}

pub fn publish_time_score(env: &Env, user: Address, time: u32, balance: u32) {
    publish_score(env, symbol_short!("SCORE_TIM"), user, time, balance);
}

pub fn publish_score_set(env: &Env, user: Address, time: u32, balance: u32) {
    publish_score(env, symbol_short!("SCORE_SET"), user, time, balance);
}

pub fn publish_ledger_set(env: &Env, admin: Address, ledger: Address) {
    env.events().publish(
        (symbol_short!("LEDGER"),),
        LedgerSetEvent {
            admin,
            ledger,
            timestamp: env.ledger().timestamp(),
        },
    );
}
