//! Property tests for the allocation engine

use proptest::prelude::*;
use rust_decimal::Decimal;
use tip_model::*;
use tipout_integration_tests::{dec, session};

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..=96).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

fn positive_hours() -> impl Strategy<Value = Decimal> {
    (1i64..=96).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// The two pools add back to the total exactly
    #[test]
    fn pbt_pool_split(total in amount(), pct in 0u8..=100) {
        let (bartender_pool, support_pool) = split_pools(total, pct);
        prop_assert_eq!(bartender_pool + support_pool, total);
        prop_assert!(support_pool >= Decimal::ZERO);
        prop_assert!(bartender_pool >= Decimal::ZERO);

        let result = compute_distribution(&session(total, pct, &[], &[]));
        prop_assert!(pools_sum_exact(&result));
    }

    /// Each payout is the worker's share of hours applied to the pool
    #[test]
    fn pbt_proportionality(
        total in amount(),
        pct in 0u8..=100,
        bar in prop::collection::vec(positive_hours(), 1..8),
        sup in prop::collection::vec(positive_hours(), 1..8),
    ) {
        let tolerance = dec("0.000000001");
        let result = compute_distribution(&session(total, pct, &bar, &sup));
        prop_assert!(shares_proportional(&result.bartender_results, result.bartender_pool, tolerance));
        prop_assert!(shares_proportional(&result.support_results, result.support_pool, tolerance));
    }

    /// With hours in every role, payouts reconcile to the pools within a cent
    #[test]
    fn pbt_reconciliation(
        total in amount(),
        pct in 0u8..=100,
        bar in prop::collection::vec(positive_hours(), 1..8),
        sup in prop::collection::vec(positive_hours(), 1..8),
    ) {
        let result = compute_distribution(&session(total, pct, &bar, &sup));
        prop_assert!(undistributed(&result, Role::Bartender).abs() < BALANCE_TOLERANCE);
        prop_assert!(undistributed(&result, Role::SupportStaff).abs() < BALANCE_TOLERANCE);
        prop_assert!(imbalances(&result, BALANCE_TOLERANCE).is_empty());
        prop_assert!(is_balanced(&result, BALANCE_TOLERANCE));
    }

    /// A role with no hours pays nobody
    #[test]
    fn pbt_zero_hours_degeneracy(total in amount(), pct in 0u8..=100, n in 0usize..6) {
        let zeros = vec![Decimal::ZERO; n];
        let result = compute_distribution(&session(total, pct, &zeros, &zeros));
        for share in result.bartender_results.iter().chain(result.support_results.iter()) {
            prop_assert_eq!(share.tip_amount, Decimal::ZERO);
            prop_assert_eq!(share.percentage, Decimal::ZERO);
        }
        prop_assert_eq!(result.bartender_results.len(), n);
    }

    /// Same snapshot, same result; inputs are not modified
    #[test]
    fn pbt_idempotence(
        total in amount(),
        pct in 0u8..=100,
        bar in prop::collection::vec(hours(), 0..8),
        sup in prop::collection::vec(hours(), 0..8),
    ) {
        let s = session(total, pct, &bar, &sup);
        let snapshot = s.clone();
        let first = compute_distribution(&s);
        let second = compute_distribution(&s);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&s, &snapshot);
    }

    /// Share text has the fixed header plus one line per worker
    #[test]
    fn pbt_share_summary_lines(
        total in amount(),
        pct in 0u8..=100,
        bar in prop::collection::vec(hours(), 0..6),
        sup in prop::collection::vec(hours(), 0..6),
    ) {
        let result = compute_distribution(&session(total, pct, &bar, &sup));
        let text = format_share_summary(&result);
        let support_lines = if sup.is_empty() { 0 } else { 2 + sup.len() };
        prop_assert_eq!(text.lines().count(), 7 + bar.len() + support_lines);
    }
}
