//! Plain-text summary of a distribution for sharing

use core::fmt::Write;

use crate::math::to_fixed;
use crate::state::*;

const SUMMARY_TITLE: &str = "Tip Out Calculator Results";

/// `$1234.50` - two decimal places, no grouping, halves rounded up
pub fn format_currency(amount: Amount) -> String {
    format!("${}", to_fixed(amount, 2))
}

/// Render the total, the pool breakdown and one line per worker
///
/// The bartender section is always present; the support section only when
/// there are support results.
pub fn format_share_summary(result: &DistributionResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", SUMMARY_TITLE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Tips: {}", format_currency(result.total_tips));
    for role in Role::ALL {
        let _ = writeln!(
            out,
            "{} Pool ({}%): {}",
            role.label(),
            result.pool_percentage(role),
            format_currency(result.pool(role))
        );
    }
    let _ = writeln!(out);

    write_section(&mut out, Role::Bartender, &result.bartender_results);

    if !result.support_results.is_empty() {
        let _ = writeln!(out);
        write_section(&mut out, Role::SupportStaff, &result.support_results);
    }

    out
}

fn write_section(out: &mut String, role: Role, shares: &[WorkerShare]) {
    let _ = writeln!(out, "{}:", role.heading());
    for share in shares {
        let _ = writeln!(
            out,
            "{}: {} ({}%)",
            share.worker.name,
            format_currency(share.tip_amount),
            to_fixed(share.percentage, 1)
        );
    }
}
