//! Bot decision endpoints
//!
//! Each request carries the whole turn snapshot and gets back an action
//! record with exactly one field filled in (or both `null` to skip).

use axum::{extract::State, Json};
use neighbors_core::{ActionRecord, Snapshot};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::ServerState;

/// Choose an attack for the acting player
pub async fn ai_attack(
    State(state): State<Arc<ServerState>>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<ActionRecord>, ApiError> {
    let record = state.evaluator.compute_attack(&snapshot)?;
    tracing::debug!("Attack for player {}: {:?}", snapshot.turn, record.attack);
    Ok(Json(record))
}

/// Choose an upgrade for the acting player
pub async fn ai_upgrade(
    State(state): State<Arc<ServerState>>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<ActionRecord>, ApiError> {
    let record = state.evaluator.compute_upgrade(&snapshot)?;
    tracing::debug!("Upgrade for player {}: {:?}", snapshot.turn, record.upgrade);
    Ok(Json(record))
}
