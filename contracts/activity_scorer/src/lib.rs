#![no_std]

pub mod events;

use common::{admin_tiers::TTL_EXTEND_TO, admin_tiers::TTL_THRESHOLD, tiers, ActivityScore};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const LEDGER: Symbol = symbol_short!("LEDGER");

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_SCORE: Symbol = symbol_short!("SCORE");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    LedgerNotSet = 4,
    InvalidScore = 5,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Holds each user's time and balance scores.
///
/// Only the configured ledger may write scores; anyone may read them.
#[contract]
pub struct ActivityScorerContract;

#[contractimpl]
impl ActivityScorerContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&ADMIN) {
            return Err(ContractError::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        Ok(())
    }

    /// Point the scorer at the single ledger allowed to write scores.
    ///
    /// May be called again to re-point after a ledger redeployment.
    pub fn set_ledger(env: Env, admin: Address, ledger: Address) -> Result<(), ContractError> {
        admin.require_auth();
        let stored: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if admin != stored {
            return Err(ContractError::Unauthorized);
        }

        env.storage().instance().set(&LEDGER, &ledger);
        events::publish_ledger_set(&env, admin, ledger);
        Ok(())
    }

    pub fn get_ledger(env: Env) -> Option<Address> {
        env.storage().instance().get(&LEDGER)
    }

    pub fn get_score(env: Env, user: Address) -> ActivityScore {
        Self::load(&env, &user)
    }

    /// Re-bucket the balance half of `user`'s score from the post-mutation
    /// `staked_balance`. The time half is left untouched.
    pub fn refresh_balance_tier(
        env: Env,
        caller: Address,
        user: Address,
        staked_balance: i128,
    ) -> Result<ActivityScore, ContractError> {
        Self::require_ledger(&env, &caller)?;

        let mut score = Self::load(&env, &user);
        score.balance_score = tiers::balance_points(staked_balance);
        Self::store(&env, &user, &score);

        events::publish_balance_score(&env, user, score.time_score, score.balance_score);
        Ok(score)
    }

    /// Re-bucket the time half of `user`'s score for a position that has been
    /// open `elapsed` seconds. The balance half is left untouched.
    pub fn refresh_time_tier(
        env: Env,
        caller: Address,
        user: Address,
        elapsed: u64,
    ) -> Result<ActivityScore, ContractError> {
        Self::require_ledger(&env, &caller)?;

        let mut score = Self::load(&env, &user);
        score.time_score = tiers::time_points(elapsed);
        Self::store(&env, &user, &score);

        events::publish_time_score(&env, user, score.time_score, score.balance_score);
        Ok(score)
    }

    /// Overwrite both halves of `user`'s score. Each half must be a level
    /// its table can actually produce.
    pub fn set_score(
        env: Env,
        caller: Address,
        user: Address,
        score: ActivityScore,
    ) -> Result<(), ContractError> {
        Self::require_ledger(&env, &caller)?;

        if !tiers::is_time_level(score.time_score) || !tiers::is_balance_level(score.balance_score)
        {
            return Err(ContractError::InvalidScore);
        }
        Self::store(&env, &user, &score);

        events::publish_score_set(&env, user, score.time_score, score.balance_score);
        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_ledger(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !env.storage().instance().has(&ADMIN) {
            return Err(ContractError::NotInitialized);
        }
        let ledger: Address = env
            .storage()
            .instance()
            .get(&LEDGER)
            .ok_or(ContractError::LedgerNotSet)?;
        caller.require_auth();
        if *caller != ledger {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn load(env: &Env, user: &Address) -> ActivityScore {
        env.storage()
            .persistent()
            .get(&(USER_SCORE, user.clone()))
            .unwrap_or_default()
    }

    fn store(env: &Env, user: &Address, score: &ActivityScore) {
        let key = (USER_SCORE, user.clone());
        env.storage().persistent().set(&key, score);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
