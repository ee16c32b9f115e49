use common::admin_tiers::{self, AdminTier};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, ContractError};

const PAUSED: Symbol = symbol_short!("PAUSED");

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Rejects user-facing mutations while the emergency stop is engaged.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Engage or release the emergency stop. Requires at least `OperatorAdmin`.
///
/// Accrual keeps running while paused; only entry points are gated.
pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), ContractError> {
    if !admin_tiers::require_tier(env, caller, &AdminTier::OperatorAdmin) {
        return Err(ContractError::Unauthorized);
    }

    env.storage().instance().set(&PAUSED, &paused);

    if paused {
        events::publish_paused(env, caller.clone());
    } else {
        events::publish_unpaused(env, caller.clone());
    }
    Ok(())
}
