//! Reconciliation checks over a computed distribution
//!
//! None of these fail: an unreconciled pool is a legitimate result (every
//! worker in the role has zero hours) and is reported as data.

use rust_decimal::Decimal;

use crate::math::*;
use crate::state::*;

/// Largest gap, in currency units, still considered balanced (one cent)
pub const BALANCE_TOLERANCE: Amount = Decimal::from_parts(1, 0, 0, false, 2);

/// `bartender_pool + support_pool` is exactly the total
pub fn pools_sum_exact(result: &DistributionResult) -> bool {
    add_dec(result.bartender_pool, result.support_pool) == result.total_tips
}

/// Sum of tip amounts over a set of shares
pub fn distributed(shares: &[WorkerShare]) -> Amount {
    shares
        .iter()
        .fold(Decimal::ZERO, |acc, s| add_dec(acc, s.tip_amount))
}

/// Everything paid out across both roles
pub fn total_distributed(result: &DistributionResult) -> Amount {
    add_dec(
        distributed(&result.bartender_results),
        distributed(&result.support_results),
    )
}

/// Money left in a role's pool after payouts
pub fn undistributed(result: &DistributionResult, role: Role) -> Amount {
    sub_dec(result.pool(role), distributed(result.results(role)))
}

/// A role whose payouts do not add back to its pool
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Imbalance {
    pub role: Role,
    pub pool: Amount,
    pub distributed: Amount,
}

impl Imbalance {
    pub fn gap(&self) -> Amount {
        sub_dec(self.pool, self.distributed)
    }
}

/// Roles whose payouts miss their pool by `tolerance` or more
pub fn imbalances(result: &DistributionResult, tolerance: Amount) -> Vec<Imbalance> {
    Role::ALL
        .iter()
        .filter_map(|&role| {
            let pool = result.pool(role);
            let paid = distributed(result.results(role));
            if approx_eq(paid, pool, tolerance) {
                None
            } else {
                Some(Imbalance {
                    role,
                    pool,
                    distributed: paid,
                })
            }
        })
        .collect()
}

/// Total paid out matches the total tips within `tolerance`
pub fn is_balanced(result: &DistributionResult, tolerance: Amount) -> bool {
    approx_eq(total_distributed(result), result.total_tips, tolerance)
}

/// Each share's fraction of the pool matches its fraction of the hours
pub fn shares_proportional(shares: &[WorkerShare], pool: Amount, tolerance: Decimal) -> bool {
    let total_hours = sum_hours(shares.iter().map(|s| s.worker.hours));
    if total_hours <= Decimal::ZERO {
        return shares
            .iter()
            .all(|s| s.tip_amount.is_zero() && s.percentage.is_zero());
    }
    shares.iter().all(|s| {
        let expected = ratio_or_zero(s.worker.hours, total_hours);
        approx_eq(ratio_or_zero(s.tip_amount, pool), expected, tolerance)
            || (pool.is_zero() && s.tip_amount.is_zero())
    })
}
