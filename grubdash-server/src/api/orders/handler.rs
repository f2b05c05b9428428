//! Order API Handlers

use axum::extract::{Path, State};
use http::StatusCode;
use serde_json::Map;

use super::validate::{self, OrderRequest};
use crate::api::RequestData;
use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::AppResult;
use crate::utils::validation::into_payload;
use shared::DataEnvelope;
use shared::models::{Order, OrderPayload};

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> DataEnvelope<Vec<Order>> {
    DataEnvelope::new(order::find_all(&state.db))
}

/// GET /orders/{order_id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<DataEnvelope<Order>> {
    let existing = order::find_by_id(&state.db, &order_id);
    let data = Map::new();
    let found = validate::validate_read(&OrderRequest {
        route_id: Some(&order_id),
        data: &data,
        existing: existing.as_ref(),
    })?;
    Ok(DataEnvelope::new(found.clone()))
}

/// POST /orders - 创建订单 (默认状态 pending)
pub async fn create(
    State(state): State<ServerState>,
    RequestData(data): RequestData,
) -> AppResult<(StatusCode, DataEnvelope<Order>)> {
    validate::validate_create(&OrderRequest {
        route_id: None,
        data: &data,
        existing: None,
    })?;
    let payload: OrderPayload = into_payload(&data)?;

    let created = order::create(&state.db, payload);
    tracing::info!(
        order_id = %created.id,
        dishes = created.dishes.len(),
        status = %created.status,
        "Order created"
    );

    Ok((StatusCode::CREATED, DataEnvelope::new(created)))
}

/// PUT /orders/{order_id} - 更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    RequestData(data): RequestData,
) -> AppResult<DataEnvelope<Order>> {
    let existing = order::find_by_id(&state.db, &order_id);
    validate::validate_update(&OrderRequest {
        route_id: Some(&order_id),
        data: &data,
        existing: existing.as_ref(),
    })?;
    let payload: OrderPayload = into_payload(&data)?;

    let updated = order::update(&state.db, &order_id, payload)?;
    tracing::info!(order_id = %updated.id, status = %updated.status, "Order updated");

    Ok(DataEnvelope::new(updated))
}

/// DELETE /orders/{order_id} - 删除订单 (仅 pending)
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<StatusCode> {
    let existing = order::find_by_id(&state.db, &order_id);
    let data = Map::new();
    validate::validate_delete(&OrderRequest {
        route_id: Some(&order_id),
        data: &data,
        existing: existing.as_ref(),
    })?;

    let removed = order::delete(&state.db, &order_id)?;
    tracing::info!(order_id = %removed.id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}
