use soroban_sdk::{symbol_short, Env, Symbol};

use crate::ContractError;

const LOCKED: Symbol = symbol_short!("LOCKED");

/// Run `op` with the ledger marked busy.
///
/// A nested entry while the flag is set fails with `ReentrantCall` before
/// touching any state. The flag is cleared whether `op` succeeds or not.
pub fn non_reentrant<T, F>(env: &Env, op: F) -> Result<T, ContractError>
where
    F: FnOnce() -> Result<T, ContractError>,
{
    if is_locked(env) {
        return Err(ContractError::ReentrantCall);
    }

    env.storage().instance().set(&LOCKED, &true);
    let result = op();
    env.storage().instance().remove(&LOCKED);

    result
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCKED).unwrap_or(false)
}
