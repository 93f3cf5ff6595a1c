//! Session sanitizer - bounds values for Kani exploration

use rust_decimal::Decimal;
use tip_model::math::clamp_percentage;
use tip_model::state::*;

pub const N_WORKERS: usize = 3;

/// Bounds for tractable verification
pub const MAX_TOTAL: Amount = Decimal::from_parts(100_000, 0, 0, false, 0);
pub const MAX_HOURS: Hours = Decimal::from_parts(24, 0, 0, false, 0);

pub trait Sanitize {
    fn sanitize(self) -> Self;
}

fn bound(x: Decimal, max: Decimal) -> Decimal {
    x.clamp(Decimal::ZERO, max)
}

impl Sanitize for Worker {
    fn sanitize(mut self) -> Worker {
        self.hours = bound(self.hours, MAX_HOURS);
        self
    }
}

impl Sanitize for TipSession {
    fn sanitize(mut self) -> TipSession {
        self.total_tips = bound(self.total_tips, MAX_TOTAL);
        self.support_staff_percentage = clamp_percentage(self.support_staff_percentage);

        for role in Role::ALL {
            let workers = self.workers_mut(role);
            workers.truncate(N_WORKERS);
            for w in workers.iter_mut() {
                w.hours = bound(w.hours, MAX_HOURS);
            }
        }

        self
    }
}
