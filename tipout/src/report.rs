//! Rendering and reconciliation logging for computed results

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tip_model::{
    format_currency, format_share_summary, imbalances, is_balanced, total_distributed, Amount,
    DistributionResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Share text
    Text,
    /// Pretty-printed result structure
    Json,
}

pub fn render(result: &DistributionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_share_summary(result)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize result")
        }
    }
}

/// Log whether payouts add back up to the total
///
/// Returns true when balanced. An unbalanced result is still a valid result.
pub fn log_reconciliation(result: &DistributionResult, tolerance: Amount) -> bool {
    let distributed = total_distributed(result);

    if is_balanced(result, tolerance) {
        log::info!(
            "Distributed {} of {}",
            format_currency(distributed),
            format_currency(result.total_tips)
        );
        return true;
    }

    for gap in imbalances(result, tolerance) {
        log::warn!(
            "{} pool {} not fully distributed: {} paid, {} left (no hours entered?)",
            gap.role,
            format_currency(gap.pool),
            format_currency(gap.distributed),
            format_currency(gap.gap())
        );
    }
    false
}
