use crate::domain::query::QueryPayload;

/// Filter kinds the PxWeb API accepts for a pre-aggregated selection start
/// with this marker; the API rejects them unless rewritten to plain items.
pub const AGG_FILTER_PREFIX: &str = "agg:";
pub const ITEM_FILTER: &str = "item";

/// Returns a copy of the payload with every `agg:`-prefixed selection filter
/// rewritten to `item`. Selectors without a selection, and filters of any
/// other kind, pass through untouched. The input is never mutated.
pub fn normalize_agg_filters(payload: &QueryPayload) -> QueryPayload {
    let mut normalized = payload.clone();
    for selector in &mut normalized.query {
        if let Some(selection) = selector.selection.as_mut() {
            if selection.filter.starts_with(AGG_FILTER_PREFIX) {
                selection.filter = ITEM_FILTER.to_string();
            }
        }
    }
    normalized
}
