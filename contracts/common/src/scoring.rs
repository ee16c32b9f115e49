use soroban_sdk::{contractclient, contracttype, Address, Env};

/// A user's two behavioural scores as held by the activity scorer.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityScore {
    /// Level from the time table, refreshed on attestation and reset when
    /// the position is fully withdrawn.
    pub time_score: u32,
    /// Level from the balance table, refreshed after every balance change.
    pub balance_score: u32,
}

/// Cross-contract view of the activity scorer, used by the ledger.
///
/// Every mutating call names `caller`, which the scorer compares against its
/// configured ledger address.
#[contractclient(name = "ActivityScorerClient")]
pub trait ActivityScorerInterface {
    fn get_score(env: Env, user: Address) -> ActivityScore;

    fn refresh_balance_tier(
        env: Env,
        caller: Address,
        user: Address,
        staked_balance: i128,
    ) -> ActivityScore;

    fn refresh_time_tier(env: Env, caller: Address, user: Address, elapsed: u64)
        -> ActivityScore;
}
