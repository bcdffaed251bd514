//! Employee API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use shared::models::{DataResponse, Employee, EmployeePayload, PaginatedResponse};

use crate::core::{AppResult, ServerError, ServerState};
use crate::db::repository::employee;
use crate::utils::validation::{self, ListParams};

/// Path ids that are not integers cannot name a row
fn parse_id(path: Result<Path<String>, PathRejection>) -> AppResult<i64> {
    let Path(id) = path?;
    id.parse().map_err(|_| ServerError::NotFound)
}

/// `GET /api/employees?name=&page=&limit=`
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<PaginatedResponse<Employee>>> {
    let Query(params) = query?;
    let request = validation::validate_list(&params).map_err(ServerError::Validation)?;
    let page = employee::find_page(
        state.pool(),
        request.name.as_deref(),
        request.page,
        request.limit,
    )
    .await?;
    Ok(Json(page))
}

/// `GET /api/employees/{id}`
pub async fn get_by_id(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<DataResponse<Employee>>> {
    let id = parse_id(path)?;
    let employee = employee::find_by_id(state.pool(), id)
        .await?
        .ok_or(ServerError::NotFound)?;
    Ok(Json(DataResponse::new(employee)))
}

/// `POST /api/employees`
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Employee>>)> {
    let Json(payload) = payload?;
    let data = validation::validate_create(&payload).map_err(ServerError::Validation)?;

    let employee = employee::create(state.pool(), data).await?;
    tracing::info!(id = employee.id, "Employee created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(employee))))
}

/// `PUT /api/employees/{id}`
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> AppResult<Json<DataResponse<Employee>>> {
    let Json(payload) = payload?;
    let data = validation::validate_update(&payload).map_err(ServerError::Validation)?;
    let id = parse_id(path)?;

    let employee = employee::update(state.pool(), id, data).await?;
    tracing::info!(id, "Employee updated");

    Ok(Json(DataResponse::new(employee)))
}

/// `DELETE /api/employees/{id}`
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = parse_id(path)?;
    if !employee::delete(state.pool(), id).await? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
