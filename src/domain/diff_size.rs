use serde::Serialize;

const WARN_THRESHOLD: u64 = 100;
const CRITICAL_THRESHOLD: u64 = 200;

const WARN_MESSAGE: &str = "👧🏻💬 Your diff is getting large (100+ lines). Consider committing smaller incremental changes with passing tests to maintain code quality.";
const CRITICAL_MESSAGE: &str = "👧🏻💬 STOP! Your diff is over 200 lines. This is too much change at once. Revert to last commit and break this into smaller steps with passing tests between each step.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warn,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Critical => "critical",
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Severity::Ok => None,
            Severity::Warn => Some(WARN_MESSAGE),
            Severity::Critical => Some(CRITICAL_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSizeResult {
    pub lines: u64,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl DiffSizeResult {
    pub fn empty() -> Self {
        Self::classify(0)
    }

    pub fn classify(total: u64) -> Self {
        let severity = if total > CRITICAL_THRESHOLD {
            Severity::Critical
        } else if total > WARN_THRESHOLD {
            Severity::Warn
        } else {
            Severity::Ok
        };

        Self {
            lines: total,
            severity,
            message: severity.message(),
        }
    }
}
