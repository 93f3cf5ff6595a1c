//! Pool split and hours-proportional distribution - all total, no panics

use rust_decimal::Decimal;

use crate::math::*;
use crate::state::*;

/// Split the total into (bartender_pool, support_pool)
///
/// The bartender pool is derived by subtraction, and decimal arithmetic keeps
/// `bartender_pool + support_pool == total` exact. Percentages above 100 are
/// treated as 100.
pub fn split_pools(total: Amount, support_pct: u8) -> (Amount, Amount) {
    let support_pool = percent_of(total, clamp_percentage(support_pct));
    let bartender_pool = sub_dec(total, support_pool);
    (bartender_pool, support_pool)
}

/// Divide a pool between workers by hours worked
///
/// If the workers have no hours between them every share is zero and the
/// pool stays undistributed.
pub fn distribute(workers: &[Worker], pool: Amount) -> Vec<WorkerShare> {
    let total_hours = sum_hours(workers.iter().map(|w| w.hours));

    workers
        .iter()
        .map(|worker| WorkerShare {
            worker: worker.clone(),
            percentage: mul_div(worker.hours, Decimal::ONE_HUNDRED, total_hours),
            tip_amount: mul_div(worker.hours, pool, total_hours),
        })
        .collect()
}

/// Compute the full payout breakdown for a session snapshot
pub fn compute_distribution(session: &TipSession) -> DistributionResult {
    let support_staff_percentage = clamp_percentage(session.support_staff_percentage);
    let (bartender_pool, support_pool) =
        split_pools(session.total_tips, support_staff_percentage);

    DistributionResult {
        total_tips: session.total_tips,
        support_staff_percentage,
        bartender_pool,
        support_pool,
        bartender_results: distribute(&session.bartenders, bartender_pool),
        support_results: distribute(&session.support_staff, support_pool),
    }
}
