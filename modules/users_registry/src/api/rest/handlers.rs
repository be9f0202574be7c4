use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::api::rest::dto::{MessageDto, SearchQuery, UserDto, UserReq};
use crate::api::rest::error::{bad_request, map_domain_error, MessageResponse};
use crate::api::rest::openapi::UsersApiDoc;
use crate::domain::service::Service;

type ApiResult<T> = Result<T, MessageResponse>;

fn user_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|e| {
        warn!("Rejected user id: {}", e.body_text());
        bad_request(e.body_text())
    })
}

fn body(req: Result<Json<UserReq>, JsonRejection>) -> ApiResult<UserReq> {
    req.map(|Json(b)| b).map_err(|e| {
        warn!("Rejected request body: {}", e.body_text());
        bad_request(e.body_text())
    })
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "All users ordered by id", body = [UserDto]))
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<Vec<UserDto>>> {
    info!("Listing users");

    match svc.list_users().await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            warn!("Failed to list users: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Get a specific user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "No user with this id", body = MessageDto)
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path)?;
    info!("Getting user with id: {}", id);

    match svc.get_user(id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            warn!("Failed to get user {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserReq,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Validation failed or user is not adult", body = MessageDto)
    )
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    req: Result<Json<UserReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let req_body = body(req)?;
    info!("Creating user: {:?}", req_body);

    match svc.create_user(req_body.into()).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            warn!("Failed to create user: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Replace every field of a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Validation failed or user is not adult", body = MessageDto),
        (status = 404, description = "No user with this id", body = MessageDto)
    )
)]
pub async fn replace_user(
    Extension(svc): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
    req: Result<Json<UserReq>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path)?;
    let req_body = body(req)?;
    info!("Replacing user {} with: {:?}", id, req_body);

    match svc.replace_user(id, req_body.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            warn!("Failed to replace user {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Update only the fields present in the body
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Validation failed or user is not adult", body = MessageDto),
        (status = 404, description = "No user with this id", body = MessageDto)
    )
)]
pub async fn patch_user(
    Extension(svc): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
    req: Result<Json<UserReq>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let id = user_id(path)?;
    let req_body = body(req)?;
    info!("Patching user {} with: {:?}", id, req_body);

    match svc.patch_user(id, req_body.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            warn!("Failed to patch user {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageDto),
        (status = 404, description = "No user with this id", body = MessageDto)
    )
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageDto>> {
    let id = user_id(path)?;
    info!("Deleting user: {}", id);

    match svc.delete_user(id).await {
        Ok(()) => Ok(Json(MessageDto::new(format!(
            "User with id {} successfully deleted",
            id
        )))),
        Err(e) => {
            warn!("Failed to delete user {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Users born within an inclusive date range
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Users ordered by birth date", body = [UserDto]),
        (status = 400, description = "Missing, malformed or inverted range", body = MessageDto)
    )
)]
pub async fn search_users(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let Query(range) = query.map_err(|e| {
        warn!("Rejected search query: {}", e.body_text());
        bad_request(e.body_text())
    })?;
    info!("Searching users born from {} to {}", range.from, range.to);

    match svc.search_by_birth_date(range.from, range.to).await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            warn!("Failed to search users: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// OpenAPI document for this module
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(UsersApiDoc::openapi())
}
