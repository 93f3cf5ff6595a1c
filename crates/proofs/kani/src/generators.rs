//! Generators for arbitrary sessions (for Kani)
//!
//! Values are built from small integers (cents, quarter hours) so every
//! generated amount is a whole number of cents.

#[cfg(kani)]
use kani::any;
use rust_decimal::Decimal;
use tip_model::state::*;

/// Quarter-hour resolution
pub const HOURS_STEP: Hours = Decimal::from_parts(25, 0, 0, false, 2);

/// Hours from a count of quarter hours
pub fn quarter_hours(quarters: u8) -> Hours {
    Decimal::new(i64::from(quarters) * 25, 2)
}

/// Amount from a count of cents
pub fn cents(c: u32) -> Amount {
    Decimal::new(i64::from(c), 2)
}

#[cfg(kani)]
pub fn any_worker(id: u64) -> Worker {
    let quarters: u8 = any();
    Worker::new(WorkerId(id), "w", quarter_hours(quarters % 97))
}

#[cfg(kani)]
pub fn any_workers(first_id: u64, max: usize) -> Vec<Worker> {
    let n: u8 = any();
    let n = (n as usize) % (max + 1);
    let mut workers = Vec::with_capacity(n);
    for i in 0..n {
        workers.push(any_worker(first_id + i as u64));
    }
    workers
}

#[cfg(kani)]
pub fn any_session_bounded() -> TipSession {
    let total_raw: u32 = any();
    let pct_raw: u8 = any();

    TipSession {
        total_tips: cents(total_raw % 10_000_000),
        support_staff_percentage: pct_raw % 101,
        bartenders: any_workers(0, 2),
        support_staff: any_workers(100, 2),
    }
}
