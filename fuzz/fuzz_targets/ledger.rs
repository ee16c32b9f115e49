#![no_main]

use accrual_ledger::{AccrualLedgerContract, AccrualLedgerContractClient};
use activity_scorer::{ActivityScorerContract, ActivityScorerContractClient};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { user: u8, amount: u64 },
    Withdraw { user: u8, amount: u64 },
    Claim { user: u8 },
    Attest { user: u8 },
    Advance { seconds: u32 },
    SetBaseRate { rate: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let admin = Address::generate(&env);

    let scorer_id = env.register(ActivityScorerContract, ());
    let scorer = ActivityScorerContractClient::new(&env, &scorer_id);
    scorer.initialize(&admin);

    let contract_id = env.register(AccrualLedgerContract, ());
    let client = AccrualLedgerContractClient::new(&env, &contract_id);
    client.initialize(&admin, &stake_token, &reward_token, &scorer_id, &1_000i128);
    scorer.set_ledger(&admin, &contract_id);

    StellarAssetClient::new(&env, &reward_token).mint(&admin, &i64::MAX.into());
    client.fund_rewards(&admin, &i64::MAX.into());

    let users: Vec<Address> = (0..4)
        .map(|_| {
            let user = Address::generate(&env);
            StellarAssetClient::new(&env, &stake_token).mint(&user, &u64::MAX.into());
            user
        })
        .collect();

    let mut last_index = 0i128;

    // Rejected calls are expected; the assertions below are what must hold.
    for action in actions {
        match action {
            FuzzAction::Deposit { user, amount } => {
                let who = &users[usize::from(user) % users.len()];
                let _ = client.try_deposit(who, &i128::from(amount));
            }
            FuzzAction::Withdraw { user, amount } => {
                let who = &users[usize::from(user) % users.len()];
                let _ = client.try_withdraw(who, &i128::from(amount));
            }
            FuzzAction::Claim { user } => {
                let who = &users[usize::from(user) % users.len()];
                let _ = client.try_claim(who);
            }
            FuzzAction::Attest { user } => {
                let who = &users[usize::from(user) % users.len()];
                let _ = client.try_attest_activity(who);
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(u64::from(seconds)));
            }
            FuzzAction::SetBaseRate { rate } => {
                let _ = client.try_set_base_rate(&admin, &i128::from(rate));
            }
        }

        let state = client.get_global_state();
        let staked: i128 = users.iter().map(|u| client.get_staked(u)).sum();
        assert_eq!(staked, state.total_staked);
        assert!(state.reward_per_token_index >= last_index);
        last_index = state.reward_per_token_index;
    }
});
