//! HTTP request handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Map, Value};

use super::error::Result;
use super::AppState;
use crate::domain::{GroupStat, Outcome};

/// Liveness check.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "opiguard prediction API is running." }))
}

/// Grouped addicted / not-addicted counts for every categorical column.
pub async fn group_counts(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let counts = state.statistics.group_counts()?;

    let mut body = Map::new();
    for (column, stats) in counts {
        let rows = stats
            .iter()
            .map(|stat| group_entry(&column, stat))
            .collect();
        body.insert(column, Value::Array(rows));
    }
    Ok(Json(Value::Object(body)))
}

/// One `/data` row: the column name itself keys the categorical value.
fn group_entry(column: &str, stat: &GroupStat) -> Value {
    let mut entry = Map::new();
    entry.insert(column.to_string(), Value::from(stat.value.clone()));
    entry.insert(Outcome::Addicted.key().to_string(), Value::from(stat.addicted));
    entry.insert(
        Outcome::NotAddicted.key().to_string(),
        Value::from(stat.not_addicted),
    );
    Value::Object(entry)
}

/// Five-number summaries per numeric column, split by outcome.
pub async fn boxplot_data(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let summaries = state.statistics.boxplot_summaries()?;
    Ok(Json(serde_json::to_value(summaries)?))
}

/// Run one prediction over a JSON body with the 12 required feature keys.
///
/// The body is parsed from raw bytes so malformed JSON flows through the
/// service's own error envelope instead of a framework rejection.
pub async fn predict(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Value>> {
    let input: Map<String, Value> = serde_json::from_slice(&body)?;
    let prediction = state.predictions.predict(&input)?;
    Ok(Json(serde_json::to_value(prediction)?))
}
