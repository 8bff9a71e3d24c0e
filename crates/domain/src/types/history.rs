//! Production-execution history types
//!
//! Mirrors the `/production-history` list and detail payloads. Timestamps are
//! kept as the backend's strings; nothing in the client does date math.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_OFFSET};
use crate::impl_domain_status_conversions;

/// Execution status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    InProgress,
    Ok,
    Nok,
    Cancelled,
}

impl_domain_status_conversions!(ExecutionStatus {
    InProgress => "IN_PROGRESS",
    Ok => "OK",
    Nok => "NOK",
    Cancelled => "CANCELLED",
});

impl ExecutionStatus {
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// History list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryQuery {
    pub machine: Option<String>,
    /// Manufacturing order
    pub mo: Option<String>,
    /// Product reference
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub status: Option<ExecutionStatus>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl HistoryQuery {
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    pub fn effective_offset(&self) -> u32 {
        self.offset.unwrap_or(DEFAULT_HISTORY_OFFSET)
    }
}

/// Paged history list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryResponse {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub results: Vec<HistoryItem>,
}

impl HistoryResponse {
    /// Whether another page exists after this one.
    pub fn has_more(&self) -> bool {
        u64::from(self.offset) + (self.results.len() as u64) < self.total
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Machine {
    pub id: i64,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub id: i64,
    pub status: ExecutionStatus,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub scada_run_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevisionSummary {
    pub id: i64,
    pub revision: i64,
    pub reference: String,
    pub description: String,
    /// Decimal quantity serialized as text by the backend
    pub quantity: String,
    pub fingerprint: String,
    pub created_at: String,
}

/// Manufacturing order the execution belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManufacturingOrder {
    pub series: String,
    pub number: String,
    pub line: i64,
    pub created_at: String,
}

impl ManufacturingOrder {
    /// `series/number-line`, the way operators write order numbers.
    pub fn label(&self) -> String {
        format!("{}/{}-{}", self.series, self.number, self.line)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineExecutionSummary {
    pub id: i64,
    pub machine: String,
    pub order: Option<i64>,
    pub raw_material_code: String,
    pub raw_material_description: String,
    pub raw_material_quantity: f64,
    pub line_type: String,
    pub ok: Option<bool>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    /// Free-form measured values
    #[serde(default)]
    pub actual: serde_json::Map<String, serde_json::Value>,
}

/// One row of the history list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub execution: ExecutionSummary,
    pub revision: RevisionSummary,
    pub mo: ManufacturingOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<LineExecutionSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machines: Option<Vec<Machine>>,
}

/// Execution detail (`/production-history/{id}/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryDetailResponse {
    pub execution: ExecutionSummary,
    pub revision: RevisionSummary,
    pub mo: ManufacturingOrder,
    #[serde(default)]
    pub machines: Vec<Machine>,
    #[serde(default)]
    pub lines: Vec<LineExecutionSummary>,
}

impl HistoryDetailResponse {
    /// Lines whose outcome was recorded as not OK.
    pub fn failed_lines(&self) -> impl Iterator<Item = &LineExecutionSummary> {
        self.lines.iter().filter(|line| line.ok == Some(false))
    }
}
