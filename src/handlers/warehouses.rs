use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    db::WarehouseFilter,
    dto::WarehousePayload,
    errors::ServiceError,
    handlers::common::{
        created_response, json_body, message_response, parse_id, query_params, success_response,
        PaginatedResponse, PaginationParams,
    },
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

async fn list_warehouses(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse<crate::models::Warehouse>>, ServiceError> {
    let params = query_params(params)?;
    let page = params.to_request(&state.config);
    let result = state.warehouses.list(page).await?;
    Ok(Json(result.into()))
}

async fn search_warehouses(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse<crate::models::Warehouse>>, ServiceError> {
    let params = query_params(params)?;
    let filter = WarehouseFilter::new(
        params.q.as_deref(),
        params.state.as_deref(),
        params.city.as_deref(),
    );
    let page = params.pagination.to_request(&state.config);
    let result = state.warehouses.search(filter, page).await?;
    Ok(Json(result.into()))
}

async fn get_warehouse(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ServiceError> {
    let warehouse = state.warehouses.get(parse_id(&id)?).await?;
    Ok(success_response(warehouse))
}

async fn create_warehouse(
    State(state): State<AppState>,
    body: Result<Json<WarehousePayload>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let payload = json_body(body)?;
    let warehouse = state.warehouses.create(payload).await?;
    Ok(created_response(warehouse))
}

async fn update_warehouse(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<WarehousePayload>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let id = parse_id(&id)?;
    let payload = json_body(body)?;
    let warehouse = state.warehouses.update(id, payload).await?;
    Ok(success_response(warehouse))
}

async fn delete_warehouse(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ServiceError> {
    state.warehouses.soft_delete(parse_id(&id)?).await?;
    Ok(message_response("Warehouse inactivated successfully"))
}

async fn update_warehouse_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StatusRequest>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let id = parse_id(&id)?;
    let request = json_body(body)?;
    let status = request.status.unwrap_or_default();
    let warehouse = state.warehouses.change_status(id, &status).await?;
    Ok(success_response(warehouse))
}

/// Routes mounted under `/api/warehouses`
pub fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/search", get(search_warehouses))
        .route(
            "/:id",
            get(get_warehouse)
                .put(update_warehouse)
                .delete(delete_warehouse),
        )
        .route("/:id/status", patch(update_warehouse_status))
}
