use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lead
// ---------------------------------------------------------------------------

/// A single customer-lead record as it appears on the wire.
///
/// `id` and `email` are each intended to be unique across the kept set;
/// `entry_date` is compared lexically only (never parsed as a calendar
/// type); the remaining fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub address: String,
    #[serde(rename = "entryDate")]
    pub entry_date: String,
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

// ---------------------------------------------------------------------------
// Change log
// ---------------------------------------------------------------------------

/// One committed replacement: `from` was evicted from the kept set at the
/// moment `to` took its position. Events are recorded in input-processing
/// order, not final kept-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub from: Lead,
    pub to: Lead,
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- START CHANGE LOG ---")?;
        writeln!(f, "from {}", self.from)?;
        writeln!(f, "to   {}", self.to)?;
        if self.from.id != self.to.id {
            writeln!(f, "id:    {} -> {}", self.from.id, self.to.id)?;
        }
        if self.from.email != self.to.email {
            writeln!(f, "email: {} -> {}", self.from.email, self.to.email)?;
        }
        write!(f, "---  END CHANGE LOG  ---")
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

/// Run statistics. Every input record is exactly one of: appended,
/// replacing, or dropped — so the four counts always reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DedupeSummary {
    pub input: usize,
    pub kept: usize,
    pub replaced: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DedupeMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

/// Everything a full run produces for the sink.
#[derive(Debug, Clone, Serialize)]
pub struct DedupeResult {
    pub meta: DedupeMeta,
    pub summary: DedupeSummary,
    pub leads: Vec<Lead>,
    pub changes: Vec<ChangeEvent>,
}
