//! Observable roster events
//!
//! Events are explicit and typed. Each maps to one stable upper-case name
//! and a default severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in rosterdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded or defaulted
    ConfigLoaded,

    // Persistence
    /// Roster decoded from the data file
    StoreLoaded,
    /// Data file absent, starting empty
    StoreLoadMissing,
    /// Roster written to the data file
    StoreSaved,
    /// Data file rejected during decode
    CorruptionDetected,
    /// Persisted average disagreed with the scores and was recomputed
    StaleAverage,

    // Roster mutations
    RecordCreated,
    RecordUpdated,
    RecordDeleted,
    RosterSorted,

    // Reads
    StatisticsComputed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreLoadMissing => "STORE_LOAD_MISSING",
            Event::StoreSaved => "STORE_SAVED",
            Event::CorruptionDetected => "STORE_CORRUPTION_DETECTED",
            Event::StaleAverage => "STORE_STALE_AVERAGE",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RosterSorted => "ROSTER_SORTED",
            Event::StatisticsComputed => "STATISTICS_COMPUTED",
        }
    }

    /// Severity this event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::CorruptionDetected => Severity::Error,
            Event::StaleAverage | Event::StoreLoadMissing => Severity::Warn,
            Event::StatisticsComputed => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
