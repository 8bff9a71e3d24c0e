//! Production history commands

use plantview_domain::{ApiError, ApiResult, HistoryDetailResponse, HistoryQuery, HistoryResponse};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// List production executions matching `query`.
pub async fn list_executions(ctx: &AppContext, query: &HistoryQuery) -> ApiResult<HistoryResponse> {
    execute_logged("history::list_executions", ctx.history.list_executions(query)).await
}

/// Fetch one execution with its timeline and output.
///
/// # Errors
/// Rejects a non-positive id before any request is sent.
pub async fn get_execution(ctx: &AppContext, id: i64) -> ApiResult<HistoryDetailResponse> {
    execute_logged("history::get_execution", async {
        if id <= 0 {
            return Err(ApiError::from_status(400, "Execution id must be a positive number"));
        }
        ctx.history.get_execution(id).await
    })
    .await
}
