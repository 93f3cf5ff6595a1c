//! Session snapshot files (TOML or JSON)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tip_model::{Amount, Hours, Role};

use crate::flow::{parse_amount, EntryError, EntryFlow, Stage};

/// Total as a number, or as text typed on a keypad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(Amount),
    Text(String),
}

impl AmountField {
    pub fn value(&self) -> Amount {
        match self {
            AmountField::Number(v) => *v,
            AmountField::Text(s) => parse_amount(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerEntry {
    pub name: String,
    pub hours: Hours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub total_tips: AmountField,

    /// Falls back to the configured default when absent
    #[serde(default)]
    pub support_staff_percentage: Option<u8>,

    #[serde(default)]
    pub bartenders: Vec<WorkerEntry>,

    #[serde(default)]
    pub support_staff: Vec<WorkerEntry>,
}

/// What happened while replaying a session file
#[derive(Debug, Default)]
pub struct ReplayOutcome {
    /// Entries that failed validation and were left out of the session
    pub rejected: Vec<EntryError>,
}

impl SessionFile {
    /// Load a session file; `.json` is read as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read session file: {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            serde_json::from_str(&contents).context("Failed to parse session JSON")
        } else {
            toml::from_str(&contents).context("Failed to parse session TOML")
        }
    }

    fn entries(&self, role: Role) -> &[WorkerEntry] {
        match role {
            Role::Bartender => &self.bartenders,
            Role::SupportStaff => &self.support_staff,
        }
    }

    /// Drive `flow` through every stage up to the results
    ///
    /// An invalid total stops the replay. Invalid workers are skipped and
    /// reported in the outcome.
    pub fn replay(&self, flow: &mut EntryFlow) -> Result<ReplayOutcome, EntryError> {
        let mut outcome = ReplayOutcome::default();

        flow.reset();
        if let Some(pct) = self.support_staff_percentage {
            flow.set_support_percentage(pct)?;
        }
        flow.set_total(self.total_tips.value())?;

        for role in Role::ALL {
            let stage = flow.advance()?;
            debug_assert_eq!(stage, Stage::collecting(role));

            for entry in self.entries(role) {
                if let Err(e) = flow.add_worker(role, &entry.name, entry.hours) {
                    outcome.rejected.push(e);
                }
            }
        }

        flow.advance()?;
        Ok(outcome)
    }
}
