//! Production history

pub mod ports;

use plantview_domain::constants::PRODUCTION_HISTORY_PATH;
use plantview_domain::HistoryQuery;

use crate::utils::query::QueryParams;

/// Request path for a history page; `limit` and `offset` are always sent.
pub fn history_path(query: &HistoryQuery) -> String {
    QueryParams::new()
        .set("machine", query.machine.as_deref())
        .set("mo", query.mo.as_deref())
        .set("ref", query.reference.as_deref())
        .set("status", query.status)
        .set("from", query.from.as_deref())
        .set("to", query.to.as_deref())
        .set("limit", Some(query.effective_limit()))
        .set("offset", Some(query.effective_offset()))
        .append_to(PRODUCTION_HISTORY_PATH)
}

/// Request path for one execution
pub fn execution_path(id: i64) -> String {
    format!("{PRODUCTION_HISTORY_PATH}/{id}/")
}
