//! Machine types and per-machine step counts.

use std::fmt;

use indexmap::IndexMap;

/// Machine type under which work steps are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MachineType {
    Machining,
    Turning,
    Yokonaka,
    Radial,
    Other,
}

impl MachineType {
    /// All machine types, in reporting order.
    pub const ALL: [MachineType; 5] = [
        MachineType::Machining,
        MachineType::Turning,
        MachineType::Yokonaka,
        MachineType::Radial,
        MachineType::Other,
    ];

    /// Key used in `workStepsByMachine`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineType::Machining => "machining",
            MachineType::Turning => "turning",
            MachineType::Yokonaka => "yokonaka",
            MachineType::Radial => "radial",
            MachineType::Other => "other",
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a group of work steps came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepSource {
    /// Steps listed under a machine type in `workStepsByMachine`.
    Machine(MachineType),
    /// Steps from the old flat `workSteps` array.
    Legacy,
}

impl StepSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepSource::Machine(machine) => machine.as_str(),
            StepSource::Legacy => "legacy",
        }
    }
}

impl fmt::Display for StepSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-zero step counts keyed by source, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineSteps(IndexMap<StepSource, usize>);

impl MachineSteps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step count. Zero counts are ignored.
    pub fn insert(&mut self, source: StepSource, count: usize) {
        if count > 0 {
            self.0.insert(source, count);
        }
    }

    pub fn get(&self, source: StepSource) -> Option<usize> {
        self.0.get(&source).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StepSource, usize)> + '_ {
        self.0.iter().map(|(source, count)| (*source, *count))
    }

    /// Counts for machine types only, skipping the legacy array.
    pub fn machines(&self) -> impl Iterator<Item = (MachineType, usize)> + '_ {
        self.0.iter().filter_map(|(source, count)| match source {
            StepSource::Machine(machine) => Some((*machine, *count)),
            StepSource::Legacy => None,
        })
    }
}

impl fmt::Display for MachineSteps {
    /// Renders as `machining: 3, legacy: 2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (source, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", source, count)?;
        }
        Ok(())
    }
}
