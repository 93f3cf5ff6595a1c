//! Entry flow: total -> bartenders -> support staff -> results
//!
//! Owns the working `TipSession` and validates every entry before it is
//! applied, so the engine only ever sees records that passed these checks.

use thiserror::Error;
use tip_model::{
    compute_distribution, math::clamp_percentage, Amount, Decimal, DistributionResult, Hours,
    Role, TipSession, Worker, WorkerId,
};

/// Number of stages in the flow
pub const STAGE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingTotal,
    CollectingBartenders,
    CollectingSupportStaff,
    ShowingResults,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::CollectingTotal => Some(Stage::CollectingBartenders),
            Stage::CollectingBartenders => Some(Stage::CollectingSupportStaff),
            Stage::CollectingSupportStaff => Some(Stage::ShowingResults),
            Stage::ShowingResults => None,
        }
    }

    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::CollectingTotal => None,
            Stage::CollectingBartenders => Some(Stage::CollectingTotal),
            Stage::CollectingSupportStaff => Some(Stage::CollectingBartenders),
            Stage::ShowingResults => Some(Stage::CollectingSupportStaff),
        }
    }

    /// 1-based position, for "step N of 4"
    pub fn step(self) -> usize {
        match self {
            Stage::CollectingTotal => 1,
            Stage::CollectingBartenders => 2,
            Stage::CollectingSupportStaff => 3,
            Stage::ShowingResults => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::CollectingTotal => "Enter Total Tips",
            Stage::CollectingBartenders => "Add Bartenders",
            Stage::CollectingSupportStaff => "Add Support Staff",
            Stage::ShowingResults => "Results",
        }
    }

    /// Stage that collects workers of `role`
    pub fn collecting(role: Role) -> Stage {
        match role {
            Role::Bartender => Stage::CollectingBartenders,
            Role::SupportStaff => Stage::CollectingSupportStaff,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} of {})", self.title(), self.step(), STAGE_COUNT)
    }
}

/// Rejected entry or transition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("Please enter a name for the {role}")]
    EmptyName { role: Role },

    #[error("Please enter valid hours worked for the {role} (got {hours})")]
    InvalidHours { role: Role, hours: Hours },

    #[error("Total tips must be greater than zero (got {0})")]
    InvalidTotal(Amount),

    #[error("Not allowed while in {actual}; expected {expected}")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("No {role} with id {id}")]
    UnknownWorker { role: Role, id: WorkerId },

    #[error("Already at the first stage")]
    NoPreviousStage,

    #[error("Already at the last stage")]
    NoNextStage,
}

/// Keypad-style amount parse: anything unparseable counts as zero
pub fn parse_amount(input: &str) -> Amount {
    input.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

fn validate_worker(role: Role, name: &str, hours: Hours) -> Result<String, EntryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EntryError::EmptyName { role });
    }
    if hours <= Decimal::ZERO {
        return Err(EntryError::InvalidHours { role, hours });
    }
    Ok(name.to_string())
}

#[derive(Debug, Clone)]
pub struct EntryFlow {
    stage: Stage,
    session: TipSession,
    default_support_percentage: u8,
    next_id: u64,
}

impl EntryFlow {
    pub fn new(default_support_percentage: u8) -> Self {
        let default_support_percentage = clamp_percentage(default_support_percentage);
        Self {
            stage: Stage::CollectingTotal,
            session: TipSession::new(Decimal::ZERO, default_support_percentage),
            default_support_percentage,
            next_id: 1,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn session(&self) -> &TipSession {
        &self.session
    }

    fn require(&self, expected: Stage) -> Result<(), EntryError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(EntryError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }

    pub fn set_total(&mut self, amount: Amount) -> Result<(), EntryError> {
        self.require(Stage::CollectingTotal)?;
        if amount <= Decimal::ZERO {
            return Err(EntryError::InvalidTotal(amount));
        }
        self.session.total_tips = amount;
        Ok(())
    }

    /// Set the support pool percentage, clamped to [0, 100]
    pub fn set_support_percentage(&mut self, pct: u8) -> Result<u8, EntryError> {
        if self.stage == Stage::ShowingResults {
            return Err(EntryError::WrongStage {
                expected: Stage::CollectingSupportStaff,
                actual: self.stage,
            });
        }
        self.session.support_staff_percentage = clamp_percentage(pct);
        Ok(self.session.support_staff_percentage)
    }

    pub fn add_worker(&mut self, role: Role, name: &str, hours: Hours) -> Result<WorkerId, EntryError> {
        self.require(Stage::collecting(role))?;
        let name = validate_worker(role, name, hours)?;

        let id = WorkerId(self.next_id);
        self.next_id += 1;
        self.session.workers_mut(role).push(Worker::new(id, name, hours));
        Ok(id)
    }

    pub fn update_worker(
        &mut self,
        role: Role,
        id: WorkerId,
        name: &str,
        hours: Hours,
    ) -> Result<(), EntryError> {
        self.require(Stage::collecting(role))?;
        let name = validate_worker(role, name, hours)?;

        let worker = self
            .session
            .workers_mut(role)
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(EntryError::UnknownWorker { role, id })?;
        worker.name = name;
        worker.hours = hours;
        Ok(())
    }

    pub fn remove_worker(&mut self, role: Role, id: WorkerId) -> Result<Worker, EntryError> {
        self.require(Stage::collecting(role))?;
        let workers = self.session.workers_mut(role);
        let idx = workers
            .iter()
            .position(|w| w.id == id)
            .ok_or(EntryError::UnknownWorker { role, id })?;
        Ok(workers.remove(idx))
    }

    /// Move forward one stage
    pub fn advance(&mut self) -> Result<Stage, EntryError> {
        if self.stage == Stage::CollectingTotal && self.session.total_tips <= Decimal::ZERO {
            return Err(EntryError::InvalidTotal(self.session.total_tips));
        }
        self.stage = self.stage.next().ok_or(EntryError::NoNextStage)?;
        Ok(self.stage)
    }

    /// Move back one stage; entered data is kept
    pub fn back(&mut self) -> Result<Stage, EntryError> {
        self.stage = self.stage.previous().ok_or(EntryError::NoPreviousStage)?;
        Ok(self.stage)
    }

    /// Start a new calculation
    pub fn reset(&mut self) {
        self.session = TipSession::new(Decimal::ZERO, self.default_support_percentage);
        self.stage = Stage::CollectingTotal;
    }

    /// Live numbers for whatever has been entered so far
    pub fn preview(&self) -> DistributionResult {
        compute_distribution(&self.session)
    }

    /// Final numbers, once the flow has reached the results stage
    pub fn results(&self) -> Result<DistributionResult, EntryError> {
        self.require(Stage::ShowingResults)?;
        Ok(compute_distribution(&self.session))
    }
}
