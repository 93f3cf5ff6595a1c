//! Tip session data model and distribution results

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;

use crate::math::{clamp_percentage, sum_hours, MAX_PERCENTAGE};

/// Currency amount, exact decimal
pub type Amount = Decimal;

/// Hours worked
pub type Hours = Decimal;

/// Support pool share of a fresh session
pub const DEFAULT_SUPPORT_PERCENTAGE: u8 = 20;

/// Opaque worker identifier, stable for the lifetime of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct WorkerId(pub u64);

impl core::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Staff pool a worker is paid from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Role {
    Bartender,
    SupportStaff,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Bartender, Role::SupportStaff];

    /// Singular label, e.g. "Support Staff"
    pub fn label(&self) -> &'static str {
        match self {
            Role::Bartender => "Bartender",
            Role::SupportStaff => "Support Staff",
        }
    }

    /// Section heading used in share text
    pub fn heading(&self) -> &'static str {
        match self {
            Role::Bartender => "BARTENDERS",
            Role::SupportStaff => "SUPPORT STAFF",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,   // May be empty while being entered
    pub hours: Hours,   // 0 means not yet entered
}

impl Worker {
    pub fn new(id: WorkerId, name: impl Into<String>, hours: Hours) -> Self {
        Self {
            id,
            name: name.into(),
            hours,
        }
    }

    /// Named and has positive hours
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.hours > Decimal::ZERO
    }
}

/// Working state of one calculation
///
/// Owned by whatever drives the entry flow; the engine only ever sees a
/// borrowed snapshot of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TipSession {
    pub total_tips: Amount,
    pub support_staff_percentage: u8, // [0, 100]; bartenders get the complement
    pub bartenders: Vec<Worker>,
    pub support_staff: Vec<Worker>,
}

impl TipSession {
    pub fn new(total_tips: Amount, support_staff_percentage: u8) -> Self {
        Self {
            total_tips,
            support_staff_percentage: clamp_percentage(support_staff_percentage),
            ..Self::default()
        }
    }

    /// Bartender pool percentage (complement of the support percentage)
    pub fn bartender_percentage(&self) -> u8 {
        MAX_PERCENTAGE.saturating_sub(self.support_staff_percentage)
    }

    pub fn workers(&self, role: Role) -> &[Worker] {
        match role {
            Role::Bartender => &self.bartenders,
            Role::SupportStaff => &self.support_staff,
        }
    }

    pub fn workers_mut(&mut self, role: Role) -> &mut Vec<Worker> {
        match role {
            Role::Bartender => &mut self.bartenders,
            Role::SupportStaff => &mut self.support_staff,
        }
    }

    /// Number of fully entered workers in a role
    pub fn completed_count(&self, role: Role) -> usize {
        self.workers(role).iter().filter(|w| w.is_complete()).count()
    }

    pub fn total_hours(&self, role: Role) -> Hours {
        sum_hours(self.workers(role).iter().map(|w| w.hours))
    }

    /// Back to an empty session with the default split
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for TipSession {
    fn default() -> Self {
        Self {
            total_tips: Decimal::ZERO,
            support_staff_percentage: DEFAULT_SUPPORT_PERCENTAGE,
            bartenders: Vec::new(),
            support_staff: Vec::new(),
        }
    }
}

/// One worker's payout
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerShare {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub worker: Worker,
    pub percentage: Decimal, // Of the role's pool, 0..=100
    pub tip_amount: Amount,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionResult {
    pub total_tips: Amount,
    pub support_staff_percentage: u8,
    pub bartender_pool: Amount,
    pub support_pool: Amount,
    pub bartender_results: Vec<WorkerShare>,
    pub support_results: Vec<WorkerShare>,
}

impl DistributionResult {
    pub fn bartender_percentage(&self) -> u8 {
        MAX_PERCENTAGE.saturating_sub(self.support_staff_percentage)
    }

    pub fn pool(&self, role: Role) -> Amount {
        match role {
            Role::Bartender => self.bartender_pool,
            Role::SupportStaff => self.support_pool,
        }
    }

    pub fn pool_percentage(&self, role: Role) -> u8 {
        match role {
            Role::Bartender => self.bartender_percentage(),
            Role::SupportStaff => self.support_staff_percentage,
        }
    }

    pub fn results(&self, role: Role) -> &[WorkerShare] {
        match role {
            Role::Bartender => &self.bartender_results,
            Role::SupportStaff => &self.support_results,
        }
    }
}
