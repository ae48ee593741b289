use crate::ErrorPath;
use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for propguard reports.
pub const SCHEMA_REPORT_V1: &str = "propguard.report.v1";

/// Classification of a proposal change. Maps one-to-one onto pull request labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    New,
    Status,
    Update,
}

impl ChangeType {
    pub fn label(self) -> &'static str {
        match self {
            ChangeType::New => ids::LABEL_NEW,
            ChangeType::Status => ids::LABEL_STATUS,
            ChangeType::Update => ids::LABEL_UPDATE,
        }
    }
}

/// Final result for one proposal.
///
/// `errors` empty means pass. The classification never participates in that decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub filename: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Pass,
    Fail,
}

impl VerdictStatus {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        if verdicts.iter().all(Verdict::passed) {
            VerdictStatus::Pass
        } else {
            VerdictStatus::Fail
        }
    }
}

/// An error that an exemption neutralized, and where.
///
/// `matched` is the closest ancestor (or the path itself) at which the exemption applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppliedExemption {
    pub filename: String,
    #[schemars(with = "String")]
    pub path: ErrorPath,
    pub exemption: String,
    #[schemars(with = "String")]
    pub matched: ErrorPath,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ReportData {
    pub profile: String,
    pub proposals_evaluated: usize,
    pub proposals_failing: usize,
    pub errors_total: usize,
    pub errors_neutralized: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_error: Option<String>,
}

/// Report envelope written by the CLI and read back by the renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: VerdictStatus,
    pub verdicts: Vec<Verdict>,
    /// Full label set the pull request should carry.
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exemptions: Vec<AppliedExemption>,
    pub data: ReportData,
}
