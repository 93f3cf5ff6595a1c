//! Tip-out integration tests
//!
//! Scenario and property tests that drive `tip_model` through its public
//! API only. Shared fixtures live here.

use rust_decimal::Decimal;
use tip_model::{Amount, Hours, TipSession, Worker, WorkerId};

/// Decimal from a literal, e.g. `dec("1873.45")`
pub fn dec(literal: &str) -> Decimal {
    literal
        .parse()
        .unwrap_or_else(|e| panic!("bad decimal literal {:?}: {}", literal, e))
}

/// Hours from a list of literals
pub fn hours(literals: &[&str]) -> Vec<Hours> {
    literals.iter().map(|l| dec(l)).collect()
}

/// Session with anonymous workers built from hour lists
pub fn session(
    total: Amount,
    support_pct: u8,
    bartender_hours: &[Hours],
    support_hours: &[Hours],
) -> TipSession {
    let mut s = TipSession::new(total, support_pct);
    let mut next_id = 0u64;
    let mut worker = |prefix: &str, hours: Hours| {
        next_id += 1;
        Worker::new(WorkerId(next_id), format!("{}{}", prefix, next_id), hours)
    };
    s.bartenders = bartender_hours.iter().map(|&h| worker("bartender-", h)).collect();
    s.support_staff = support_hours.iter().map(|&h| worker("support-", h)).collect();
    s
}
