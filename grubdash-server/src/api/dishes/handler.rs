//! Dish API Handlers

use axum::extract::{Path, State};
use http::StatusCode;
use serde_json::Map;

use super::validate::{self, DishRequest};
use crate::api::RequestData;
use crate::core::ServerState;
use crate::db::repository::dish;
use crate::utils::AppResult;
use crate::utils::validation::into_payload;
use shared::DataEnvelope;
use shared::models::{Dish, DishPayload};

/// GET /dishes - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> DataEnvelope<Vec<Dish>> {
    DataEnvelope::new(dish::find_all(&state.db))
}

/// GET /dishes/{dish_id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(dish_id): Path<String>,
) -> AppResult<DataEnvelope<Dish>> {
    let existing = dish::find_by_id(&state.db, &dish_id);
    let data = Map::new();
    let found = validate::validate_read(&DishRequest {
        route_id: Some(&dish_id),
        data: &data,
        existing: existing.as_ref(),
    })?;
    Ok(DataEnvelope::new(found.clone()))
}

/// POST /dishes - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    RequestData(data): RequestData,
) -> AppResult<(StatusCode, DataEnvelope<Dish>)> {
    validate::validate_create(&DishRequest {
        route_id: None,
        data: &data,
        existing: None,
    })?;
    let payload: DishPayload = into_payload(&data)?;

    let created = dish::create(&state.db, payload);
    tracing::info!(dish_id = %created.id, name = %created.name, "Dish created");

    Ok((StatusCode::CREATED, DataEnvelope::new(created)))
}

/// PUT /dishes/{dish_id} - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(dish_id): Path<String>,
    RequestData(data): RequestData,
) -> AppResult<DataEnvelope<Dish>> {
    let existing = dish::find_by_id(&state.db, &dish_id);
    validate::validate_update(&DishRequest {
        route_id: Some(&dish_id),
        data: &data,
        existing: existing.as_ref(),
    })?;
    let payload: DishPayload = into_payload(&data)?;

    let updated = dish::update(&state.db, &dish_id, payload)?;
    tracing::info!(dish_id = %updated.id, "Dish updated");

    Ok(DataEnvelope::new(updated))
}
