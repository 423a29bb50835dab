//! Snippet handlers - list, read, create, update and delete.
//!
//! Mutating handlers settle authentication before reading the body, so an
//! anonymous request gets 401 whatever it sends.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::auth::Caller;
use crate::dto::{
    CREATED_MESSAGE, DELETED_MESSAGE, DataMessageResponse, DataResponse, ListResponse,
    MessageResponse, UPDATED_MESSAGE,
};
use crate::error::{HttpError, INVALID_BODY};
use crate::state::AppState;
use snipbox_core::{
    CreateSnippetRequest, ListParams, SnippetFilter, UpdateSnippetRequest, require_caller,
};

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        HttpError::BadRequest(INVALID_BODY.to_string())
    })
}

/// List snippets matching the query parameters.
///
/// Repeated keys keep their first value; an undecodable query string
/// lists with no filters.
pub async fn list(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListResponse>, HttpError> {
    let params = match pairs {
        Ok(Query(pairs)) => ListParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring undecodable query string");
            ListParams::default()
        }
    };

    let filter = SnippetFilter::from_params(&params);
    let records = state.snippets.list(&filter).await?;
    Ok(Json(records.into()))
}

/// Get a single snippet visible to the caller.
pub async fn get(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<DataResponse>, HttpError> {
    let data = state
        .snippets
        .get(caller.user(), &id)
        .await
        .map_err(HttpError::from_read)?;
    Ok(Json(DataResponse { data }))
}

/// Create a snippet owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    caller: Caller,
    body: Result<Json<CreateSnippetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataMessageResponse>), HttpError> {
    let owner = require_caller(caller.user())?;
    let request = parse_body(body)?;

    let data = state.snippets.create(owner, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataMessageResponse {
            data,
            message: CREATED_MESSAGE,
        }),
    ))
}

/// Update a snippet owned by the caller.
pub async fn update(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    body: Result<Json<UpdateSnippetRequest>, JsonRejection>,
) -> Result<Json<DataMessageResponse>, HttpError> {
    let user = require_caller(caller.user())?;
    let update = parse_body(body)?;

    let data = state.snippets.update(user, &id, &update).await?;
    Ok(Json(DataMessageResponse {
        data,
        message: UPDATED_MESSAGE,
    }))
}

/// Delete a snippet owned by the caller.
pub async fn delete(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    let user = require_caller(caller.user())?;

    state.snippets.delete(user, &id).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE,
    }))
}
