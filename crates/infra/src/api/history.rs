//! Production history endpoints

use std::sync::Arc;

use async_trait::async_trait;
use plantview_core::history::{execution_path, history_path};
use plantview_core::HistoryGateway;
use plantview_domain::{ApiResult, HistoryDetailResponse, HistoryQuery, HistoryResponse};
use tracing::{debug, instrument};

use super::client::ApiClient;

/// [`HistoryGateway`] over `/production-history`
pub struct HistoryApi {
    client: Arc<ApiClient>,
}

impl HistoryApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HistoryGateway for HistoryApi {
    #[instrument(skip(self, query))]
    async fn list_executions(&self, query: &HistoryQuery) -> ApiResult<HistoryResponse> {
        let page: HistoryResponse = self.client.get(&history_path(query)).await?;
        debug!(total = page.total, returned = page.results.len(), "history page loaded");
        Ok(page)
    }

    #[instrument(skip(self), fields(execution_id = %id))]
    async fn get_execution(&self, id: i64) -> ApiResult<HistoryDetailResponse> {
        self.client.get(&execution_path(id)).await
    }
}
