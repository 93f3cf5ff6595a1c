//! Worked examples for the allocation engine

use rust_decimal::Decimal;
use tip_model::*;
use tipout_integration_tests::{dec, hours, session};

/// Scenario A: 1000 total, 20% support, bartenders at 8h and 2h
#[test]
fn test_scenario_a_proportional_split() {
    let result = compute_distribution(&session(dec("1000"), 20, &hours(&["8", "2"]), &[]));

    assert_eq!(result.bartender_pool, dec("800"));
    assert_eq!(result.support_pool, dec("200"));

    let b = &result.bartender_results;
    assert_eq!(b[0].tip_amount, dec("640"));
    assert_eq!(b[1].tip_amount, dec("160"));
    assert_eq!(b[0].percentage, dec("80"));
    assert_eq!(b[1].percentage, dec("20"));

    // No support staff: the support pool is left over, and reported as such
    let gaps = imbalances(&result, BALANCE_TOLERANCE);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].role, Role::SupportStaff);
}

/// Scenario B: 0% support, no support staff
#[test]
fn test_scenario_b_no_support_pool() {
    let result = compute_distribution(&session(dec("500"), 0, &hours(&["4"]), &[]));

    assert_eq!(result.support_pool, Decimal::ZERO);
    assert_eq!(result.bartender_pool, dec("500"));
    assert!(result.support_results.is_empty());
    assert!(is_balanced(&result, BALANCE_TOLERANCE));
}

/// Scenario C: bartenders with zero hours leave their pool undistributed
#[test]
fn test_scenario_c_zero_hours_is_not_an_error() {
    let result = compute_distribution(&session(dec("300"), 20, &hours(&["0", "0"]), &[]));

    assert_eq!(result.bartender_pool, dec("240"));
    assert!(result
        .bartender_results
        .iter()
        .all(|s| s.tip_amount.is_zero() && s.percentage.is_zero()));
    assert_eq!(undistributed(&result, Role::Bartender), dec("240"));
    assert_eq!(total_distributed(&result), Decimal::ZERO);
}

#[test]
fn test_empty_session_yields_empty_results() {
    let result = compute_distribution(&TipSession::new(dec("125"), 20));

    assert!(result.bartender_results.is_empty());
    assert!(result.support_results.is_empty());
    assert_eq!(result.support_pool, dec("25"));
    assert_eq!(result.bartender_pool, dec("100"));
}

#[test]
fn test_default_session_is_all_zero() {
    let result = compute_distribution(&TipSession::default());

    assert_eq!(result.total_tips, Decimal::ZERO);
    assert_eq!(result.bartender_pool, Decimal::ZERO);
    assert_eq!(result.support_pool, Decimal::ZERO);
    assert!(is_balanced(&result, BALANCE_TOLERANCE));
}

#[test]
fn test_cent_at_ten_percent_splits_exactly() {
    let result = compute_distribution(&session(dec("0.01"), 10, &[], &[]));

    assert_eq!(result.support_pool, dec("0.001"));
    assert_eq!(result.bartender_pool, dec("0.009"));
    assert_eq!(result.bartender_pool + result.support_pool, result.total_tips);
    assert!(pools_sum_exact(&result));
}

#[test]
fn test_full_night_reconciles_and_shares() {
    let result = compute_distribution(&session(
        dec("1873.45"),
        25,
        &hours(&["7.5", "6", "8.25"]),
        &hours(&["5", "4.5", "6", "3.25"]),
    ));

    let tolerance = dec("0.000000001");
    assert!(pools_sum_exact(&result));
    assert!(is_balanced(&result, BALANCE_TOLERANCE));
    assert!(shares_proportional(&result.bartender_results, result.bartender_pool, tolerance));
    assert!(shares_proportional(&result.support_results, result.support_pool, tolerance));

    let text = format_share_summary(&result);
    assert!(text.contains("Total Tips: $1873.45\n"));
    assert!(text.contains("Bartender Pool (75%): $1405.09\n"));
    assert!(text.contains("Support Staff Pool (25%): $468.36\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("bartender-")).count(), 3);
    assert_eq!(text.lines().filter(|l| l.starts_with("support-")).count(), 4);
}

/// Share text for an even three-way split
#[test]
fn test_three_way_split_share_text() {
    let result = compute_distribution(&session(dec("100"), 0, &hours(&["1", "1", "1"]), &[]));
    let text = format_share_summary(&result);

    assert!(text.contains("bartender-1: $33.33 (33.3%)\n"));
    assert!(text.contains("bartender-2: $33.33 (33.3%)\n"));
    assert!(text.contains("bartender-3: $33.33 (33.3%)\n"));
    assert!(is_balanced(&result, BALANCE_TOLERANCE));
}

/// Half-cent payouts round up in share text
#[test]
fn test_half_cent_rounds_up_in_share_text() {
    let result = compute_distribution(&session(dec("1.25"), 20, &hours(&["1", "7"]), &[]));

    assert_eq!(result.bartender_results[0].tip_amount, dec("0.125"));

    let text = format_share_summary(&result);
    assert!(text.contains("bartender-1: $0.13 (12.5%)\n"));
    assert!(text.contains("bartender-2: $0.88 (87.5%)\n"));
}

/// Recomputing after an edit reflects the edit immediately
#[test]
fn test_recompute_after_edit() {
    let mut s = session(dec("400"), 20, &hours(&["4", "4"]), &hours(&["2"]));
    let before = compute_distribution(&s);

    s.bartenders[1].hours = dec("12");
    let after = compute_distribution(&s);

    assert_ne!(before, after);
    assert_eq!(after.bartender_results[0].tip_amount, dec("80"));
    assert_eq!(after, compute_distribution(&s));
}
