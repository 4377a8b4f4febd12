//! Circle endpoints.

use std::sync::Arc;

use application::{
    CircleData, DeleteCircleCommand, GetCircleCommand, JoinCircleCommand, RegisterCircleCommand,
    UpdateCircleCommand,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{CircleRepository, UserRepository};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct RegisterCircleRequest {
    pub owner_id: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateCircleRequest {
    pub name: Option<String>,
    pub owner_id: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct JoinCircleRequest {
    pub user_id: String,
}

// -- Handlers --

/// POST /circles: register a circle for an existing owner.
#[tracing::instrument(skip(state, payload))]
pub async fn register<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    payload: Result<Json<RegisterCircleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CircleData>), ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let Json(req) = payload?;
    let circle = state
        .register_circle
        .handle(RegisterCircleCommand::new(req.owner_id, req.name))
        .await?;
    Ok((StatusCode::CREATED, Json(circle)))
}

/// GET /circles/{id}: load a circle by id.
#[tracing::instrument(skip(state))]
pub async fn get<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
) -> Result<Json<CircleData>, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let circle = state.get_circle.handle(GetCircleCommand::new(id)).await?;
    Ok(Json(circle))
}

/// PUT /circles/{id}: rename, change owner and/or add members.
#[tracing::instrument(skip(state, payload))]
pub async fn update<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCircleRequest>, JsonRejection>,
) -> Result<Json<CircleData>, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let Json(req) = payload?;
    let command = UpdateCircleCommand {
        id,
        name: req.name,
        owner_id: req.owner_id,
        member_ids: req.member_ids,
    };
    let circle = state.update_circle.handle(command).await?;
    Ok(Json(circle))
}

/// DELETE /circles/{id}: remove a circle; succeeds when already absent.
#[tracing::instrument(skip(state))]
pub async fn delete<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    state
        .delete_circle
        .handle(DeleteCircleCommand::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /circles/{id}/members: add a user to the circle.
#[tracing::instrument(skip(state, payload))]
pub async fn join<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
    payload: Result<Json<JoinCircleRequest>, JsonRejection>,
) -> Result<Json<CircleData>, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let Json(req) = payload?;
    let circle = state
        .join_circle
        .handle(JoinCircleCommand::new(id, req.user_id))
        .await?;
    Ok(Json(circle))
}
