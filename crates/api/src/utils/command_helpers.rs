//! Command execution helpers
//!
//! Provides timing and structured logging around command handlers.

use std::future::Future;
use std::time::Instant;

use plantview_domain::ApiResult;

use crate::utils::logging::log_command_execution;

/// Execute a command, logging its duration and outcome.
pub async fn execute_logged<Fut, T>(command_name: &str, command: Fut) -> ApiResult<T>
where
    Fut: Future<Output = ApiResult<T>>,
{
    let start = Instant::now();
    let result = command.await;
    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}
