//! User endpoints.

use std::sync::Arc;

use application::{
    DeleteUserCommand, GetUserCommand, RegisterUserCommand, UpdateUserCommand, UserData,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use domain::{CircleRepository, UserRepository};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub mail_address: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub mail_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub name: Option<String>,
    pub mail_address: Option<String>,
}

// -- Handlers --

/// POST /users: register a new user.
#[tracing::instrument(skip(state, payload))]
pub async fn register<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserData>), ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let Json(req) = payload?;
    let user = state
        .register_user
        .handle(RegisterUserCommand::new(req.name, req.mail_address))
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}: load a user by id.
#[tracing::instrument(skip(state))]
pub async fn get<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
) -> Result<Json<UserData>, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let user = state.get_user.handle(GetUserCommand::by_id(id)).await?;
    Ok(Json(user))
}

/// GET /users?name=... or ?mail_address=...: load a user by a unique key.
#[tracing::instrument(skip(state))]
pub async fn find<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserData>, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let command = GetUserCommand {
        id: None,
        name: query.name,
        mail_address: query.mail_address,
    };
    let user = state.get_user.handle(command).await?;
    Ok(Json(user))
}

/// PUT /users/{id}: change name and/or mail address.
#[tracing::instrument(skip(state, payload))]
pub async fn update<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserData>, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let Json(req) = payload?;
    let command = UpdateUserCommand {
        id,
        name: req.name,
        mail_address: req.mail_address,
    };
    let user = state.update_user.handle(command).await?;
    Ok(Json(user))
}

/// DELETE /users/{id}: remove a user; succeeds when already absent.
#[tracing::instrument(skip(state))]
pub async fn delete<U, C>(
    State(state): State<Arc<AppState<U, C>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    state.delete_user.handle(DeleteUserCommand::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
