//! Order validators
//!
//! Each `validate_*` function is the ordered chain for one operation. The
//! checks that need the stored order (`order_exists`, `is_not_delivered`,
//! `is_pending`) read it from [`OrderRequest::existing`].

use serde_json::{Map, Value};
use shared::models::{Order, OrderStatus};

use crate::utils::validation::{conflicting_id, require_text, required_message, run_chain};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Everything an order validator may look at
#[derive(Debug, Clone, Copy)]
pub struct OrderRequest<'a> {
    /// `{order_id}` from the route, `None` on create
    pub route_id: Option<&'a str>,
    /// The body's `data` object
    pub data: &'a Map<String, Value>,
    /// Stored order for `route_id`, if any
    pub existing: Option<&'a Order>,
}

/// GET /orders/{order_id}
pub fn validate_read<'a>(req: &OrderRequest<'a>) -> AppResult<&'a Order> {
    run_chain(req, &[&order_exists])?;
    found(req)
}

/// POST /orders
pub fn validate_create(req: &OrderRequest<'_>) -> AppResult<()> {
    run_chain(
        req,
        &[
            &has_deliver_to,
            &has_mobile_number,
            &has_dishes,
            &has_valid_quantities,
            &has_valid_status_for_create,
        ],
    )
}

/// PUT /orders/{order_id}
pub fn validate_update(req: &OrderRequest<'_>) -> AppResult<()> {
    run_chain(
        req,
        &[
            &order_exists,
            &order_id_matches,
            &is_not_delivered,
            &has_valid_status_for_update,
            &has_deliver_to,
            &has_mobile_number,
            &has_dishes,
            &has_valid_quantities,
        ],
    )
}

/// DELETE /orders/{order_id}
pub fn validate_delete(req: &OrderRequest<'_>) -> AppResult<()> {
    run_chain(req, &[&order_exists, &is_pending])
}

fn found<'a>(req: &OrderRequest<'a>) -> AppResult<&'a Order> {
    req.existing.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::OrderNotFound,
            format!("Order id not found: {}", req.route_id.unwrap_or_default()),
        )
    })
}

pub fn order_exists(req: &OrderRequest<'_>) -> AppResult<()> {
    found(req).map(|_| ())
}

pub fn order_id_matches(req: &OrderRequest<'_>) -> AppResult<()> {
    let Some(route_id) = req.route_id else {
        return Ok(());
    };
    match conflicting_id(req.data, route_id) {
        None => Ok(()),
        Some(id) => Err(AppError::with_message(
            ErrorCode::OrderIdMismatch,
            format!("Order id does not match route id. Order: {id}, Route: {route_id}."),
        )),
    }
}

/// 已送达的订单不可再修改
pub fn is_not_delivered(req: &OrderRequest<'_>) -> AppResult<()> {
    match found(req)?.status {
        OrderStatus::Delivered => Err(AppError::with_message(
            ErrorCode::OrderAlreadyDelivered,
            "A delivered order cannot be changed.",
        )),
        _ => Ok(()),
    }
}

/// 只有待处理订单可以删除
pub fn is_pending(req: &OrderRequest<'_>) -> AppResult<()> {
    if found(req)?.status.is_pending() {
        Ok(())
    } else {
        Err(AppError::with_message(
            ErrorCode::OrderNotPending,
            "Order must have status 'pending' to delete.",
        ))
    }
}

pub fn has_deliver_to(req: &OrderRequest<'_>) -> AppResult<()> {
    require_text(req.data, "deliverTo").map(|_| ())
}

pub fn has_mobile_number(req: &OrderRequest<'_>) -> AppResult<()> {
    require_text(req.data, "mobileNumber").map(|_| ())
}

/// `dishes` must be a non-empty array
pub fn has_dishes(req: &OrderRequest<'_>) -> AppResult<()> {
    match req.data.get("dishes") {
        Some(Value::Array(dishes)) if !dishes.is_empty() => Ok(()),
        Some(Value::Array(_)) => Err(AppError::with_message(
            ErrorCode::OrderEmpty,
            required_message("dishes"),
        )
        .with_detail("field", "dishes")),
        _ => Err(AppError::required_field("dishes", required_message("dishes"))),
    }
}

/// Every line needs an integer `quantity` >= 1; reports the first bad index
pub fn has_valid_quantities(req: &OrderRequest<'_>) -> AppResult<()> {
    let Some(dishes) = req.data.get("dishes").and_then(Value::as_array) else {
        return Ok(());
    };
    let bad = dishes.iter().position(|dish| {
        !dish
            .get("quantity")
            .and_then(Value::as_u64)
            .is_some_and(|q| q >= 1 && u32::try_from(q).is_ok())
    });
    match bad {
        None => Ok(()),
        Some(index) => Err(AppError::with_message(
            ErrorCode::OrderInvalidQuantity,
            format!("Dish {index} must have a quantity that is an integer greater than 0"),
        )
        .with_detail("index", index)),
    }
}

/// Optional on create; when present it must name a known status
pub fn has_valid_status_for_create(req: &OrderRequest<'_>) -> AppResult<()> {
    match req.data.get("status") {
        None | Some(Value::Null) => Ok(()),
        Some(status) if parse_status(status).is_some() => Ok(()),
        Some(_) => Err(invalid_status()),
    }
}

/// Required on update, and can not be `delivered`
pub fn has_valid_status_for_update(req: &OrderRequest<'_>) -> AppResult<()> {
    let valid = req
        .data
        .get("status")
        .and_then(parse_status)
        .is_some_and(|status| status.is_updatable_to());
    if valid {
        Ok(())
    } else {
        Err(invalid_status())
    }
}

fn invalid_status() -> AppError {
    AppError::with_message(ErrorCode::OrderInvalidStatus, "Order must have a valid status.")
}

fn parse_status(value: &Value) -> Option<OrderStatus> {
    value.as_str()?.parse().ok()
}
