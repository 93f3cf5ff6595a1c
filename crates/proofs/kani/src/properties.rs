//! Property proofs for the allocation engine
//!
//! Each harness maps to one documented guarantee of `compute_distribution`.

use kani::any;
use rust_decimal::Decimal;
use tip_model::{allocation::*, helpers::*, state::*};

use crate::generators::*;
use crate::sanitizer::*;

/// Pool split: the two pools add back up to the total exactly
#[kani::proof]
fn pool_split_remainder_is_exact() {
    let total_raw: u32 = any();
    let pct: u8 = any();
    kani::assume(pct <= 100);

    let total = cents(total_raw % 10_000_000);
    let (bartender_pool, support_pool) = split_pools(total, pct);

    assert_eq!(bartender_pool + support_pool, total);
    assert!(support_pool >= Decimal::ZERO);
    assert!(bartender_pool >= Decimal::ZERO);
}

/// Pool split never exceeds the total, even with an out-of-range percentage
#[kani::proof]
fn pool_split_clamps_percentage() {
    let total_raw: u32 = any();
    let pct: u8 = any();
    kani::assume(pct > 100);

    let total = cents(total_raw % 10_000_000);
    let (bartender_pool, support_pool) = split_pools(total, pct);

    assert_eq!(support_pool, total);
    assert_eq!(bartender_pool, Decimal::ZERO);
}

/// Zero-hours degeneracy: nobody is paid when no hours were worked
#[kani::proof]
#[kani::unwind(4)]
fn zero_hours_pays_nothing() {
    let pool_raw: u32 = any();
    let n: u8 = any();
    kani::assume(n <= 3);

    let workers: Vec<Worker> = (0..n as u64)
        .map(|i| Worker::new(WorkerId(i), "w", Decimal::ZERO))
        .collect();
    let shares = distribute(&workers, cents(pool_raw % 10_000_000));

    assert_eq!(shares.len(), workers.len());
    for s in shares.iter() {
        assert!(s.tip_amount.is_zero());
        assert!(s.percentage.is_zero());
    }
}

/// Shares are never negative and never exceed the pool
#[kani::proof]
#[kani::unwind(4)]
fn shares_bounded_by_pool() {
    let pool_raw: u32 = any();
    let pool = cents(pool_raw % 10_000_000);
    let workers = any_workers(0, 2);

    for s in distribute(&workers, pool).iter() {
        assert!(s.tip_amount >= Decimal::ZERO);
        assert!(s.tip_amount <= pool);
        assert!(s.percentage >= Decimal::ZERO && s.percentage <= Decimal::ONE_HUNDRED);
    }
}

/// Idempotence: same snapshot in, same result out
#[kani::proof]
#[kani::unwind(4)]
fn compute_distribution_is_deterministic() {
    let session = any_session_bounded().sanitize();

    let first = compute_distribution(&session);
    let second = compute_distribution(&session);

    assert!(first == second);
    assert!(pools_sum_exact(&first));
}

/// Empty roles produce empty results with normally computed pools
#[kani::proof]
fn empty_lists_yield_empty_results() {
    let total_raw: u32 = any();
    let pct: u8 = any();
    kani::assume(pct <= 100);

    let session = TipSession::new(cents(total_raw % 10_000_000), pct);
    let result = compute_distribution(&session);

    assert!(result.bartender_results.is_empty());
    assert!(result.support_results.is_empty());
    assert!(pools_sum_exact(&result));
}
