//! Port interface for production history

use async_trait::async_trait;
use plantview_domain::{ApiResult, HistoryDetailResponse, HistoryQuery, HistoryResponse};

/// Read access to recorded production executions
#[async_trait]
pub trait HistoryGateway: Send + Sync {
    /// One page of executions matching `query`
    async fn list_executions(&self, query: &HistoryQuery) -> ApiResult<HistoryResponse>;

    /// Full record of a single execution, including per-line results
    async fn get_execution(&self, id: i64) -> ApiResult<HistoryDetailResponse>;
}
