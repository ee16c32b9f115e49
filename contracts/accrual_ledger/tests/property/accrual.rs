#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Properties of a single position accruing over time.

use proptest::prelude::*;

use crate::harness::setup;

const BPS_DENOMINATOR: i128 = 10_000;
const SECONDS_PER_YEAR: i128 = 31_536_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Below the first balance tier there is no bonus, so the payout is
    /// pure base accrual and must never exceed the exact continuous figure.
    #[test]
    fn prop_truncation_never_overpays(
        stake in 1i128..5_000,
        rate in 1i128..20_000,
        elapsed in 1u64..200_000_000,
    ) {
        let h = setup(rate, 1, stake);
        let user = &h.users[0];
        h.client.deposit(user, &stake);
        h.advance(elapsed);

        let exact = stake * rate * i128::from(elapsed) / BPS_DENOMINATOR / SECONDS_PER_YEAR;
        let available = h.client.preview_available(user);
        prop_assert!(available <= exact, "{} > {}", available, exact);
        prop_assert!(available >= 0);
    }

    /// Previewing is a pure read: repeated calls agree and nothing moves.
    #[test]
    fn prop_preview_is_idempotent(
        stake in 1i128..1_000_000,
        elapsed in 0u64..100_000_000,
    ) {
        let h = setup(1_000, 1, stake);
        let user = &h.users[0];
        h.client.deposit(user, &stake);
        h.advance(elapsed);

        let state = h.client.get_global_state();
        let account = h.client.get_account(user);

        let first = h.client.preview_available(user);
        let second = h.client.preview_available(user);

        prop_assert_eq!(first, second);
        prop_assert_eq!(h.client.get_global_state(), state);
        prop_assert_eq!(h.client.get_account(user), account);
    }

    /// With a live position and no claims, what is available only grows.
    #[test]
    fn prop_available_is_monotonic(
        stake in 1i128..1_000_000,
        steps in prop::collection::vec(0u64..10_000_000, 1..12),
    ) {
        let h = setup(1_000, 1, stake);
        let user = &h.users[0];
        h.client.deposit(user, &stake);

        let mut last = 0i128;
        for (i, step) in steps.iter().enumerate() {
            h.advance(*step);
            if i % 3 == 2 {
                h.client.attest_activity(user);
            }
            let now = h.client.preview_available(user);
            prop_assert!(now >= last);
            last = now;
        }
    }
}
