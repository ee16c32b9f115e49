extern crate std;

use common::admin_tiers::AdminTier;
use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address};

use crate::test::{setup, Setup};
use crate::ContractError;

fn promoted(s: &Setup, tier: AdminTier) -> Address {
    let target = Address::generate(&s.env);
    s.client.promote_admin(&s.admin, &target, &tier);
    target
}

// ── SuperAdmin bootstrapped on initialize ────────────────────────────────────

#[test]
fn test_admin_is_super_admin_after_init() {
    let s = setup(1_000);
    assert_eq!(s.client.get_admin_tier(&s.admin), Some(AdminTier::SuperAdmin));
}

#[test]
fn test_non_admin_has_no_tier() {
    let s = setup(1_000);
    assert_eq!(s.client.get_admin_tier(&Address::generate(&s.env)), None);
}

// ── Promote / demote ─────────────────────────────────────────────────────────

#[test]
fn test_super_admin_promotes_and_demotes() {
    let s = setup(1_000);

    for tier in [
        AdminTier::OperatorAdmin,
        AdminTier::ContractAdmin,
        AdminTier::SuperAdmin,
    ] {
        let target = promoted(&s, tier.clone());
        assert_eq!(s.client.get_admin_tier(&target), Some(tier));

        s.client.demote_admin(&s.admin, &target);
        assert_eq!(s.client.get_admin_tier(&target), None);
    }
}

#[test]
fn test_bootstrapped_admin_cannot_be_demoted() {
    let s = setup(1_000);
    let deputy = promoted(&s, AdminTier::SuperAdmin);

    match s.client.try_demote_admin(&deputy, &s.admin) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(s.client.get_admin_tier(&s.admin), Some(AdminTier::SuperAdmin));
}

#[test]
fn test_lower_tiers_cannot_promote_or_demote() {
    let s = setup(1_000);
    let contract_admin = promoted(&s, AdminTier::ContractAdmin);
    let operator = promoted(&s, AdminTier::OperatorAdmin);
    let target = Address::generate(&s.env);

    for caller in [&contract_admin, &operator] {
        match s
            .client
            .try_promote_admin(caller, &target, &AdminTier::OperatorAdmin)
        {
            Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
            _ => unreachable!("Expected Unauthorized error"),
        }
    }

    match s.client.try_demote_admin(&contract_admin, &operator) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(s.client.get_admin_tier(&operator), Some(AdminTier::OperatorAdmin));
}

// ── ContractAdmin-level functions ────────────────────────────────────────────

#[test]
fn test_contract_admin_can_set_rate_and_fund() {
    let s = setup(1_000);
    let contract_admin = promoted(&s, AdminTier::ContractAdmin);

    s.client.set_base_rate(&contract_admin, &1_500);
    assert_eq!(s.client.get_base_rate(), 1_500);

    StellarAssetClient::new(&s.env, &s.reward_token).mint(&contract_admin, &500);
    let before = s.client.total_funded();
    s.client.fund_rewards(&contract_admin, &500);
    assert_eq!(s.client.total_funded(), before + 500);
}

#[test]
fn test_operator_cannot_touch_economics() {
    let s = setup(1_000);
    let operator = promoted(&s, AdminTier::OperatorAdmin);

    match s.client.try_set_base_rate(&operator, &99) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    match s.client.try_fund_rewards(&operator, &1) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_contract_admin_can_pause() {
    let s = setup(1_000);
    let contract_admin = promoted(&s, AdminTier::ContractAdmin);

    s.client.pause(&contract_admin);
    assert!(s.client.is_paused());
}
