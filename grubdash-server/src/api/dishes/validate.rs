//! Dish validators
//!
//! Each `validate_*` function is the ordered chain for one operation.

use serde_json::{Map, Value};
use shared::models::Dish;

use crate::utils::validation::{conflicting_id, require_text, required_message, run_chain};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Everything a dish validator may look at
#[derive(Debug, Clone, Copy)]
pub struct DishRequest<'a> {
    /// `{dish_id}` from the route, `None` on create
    pub route_id: Option<&'a str>,
    /// The body's `data` object
    pub data: &'a Map<String, Value>,
    /// Stored dish for `route_id`, if any
    pub existing: Option<&'a Dish>,
}

/// GET /dishes/{dish_id}
pub fn validate_read<'a>(req: &DishRequest<'a>) -> AppResult<&'a Dish> {
    run_chain(req, &[&dish_exists])?;
    found(req)
}

/// POST /dishes
pub fn validate_create(req: &DishRequest<'_>) -> AppResult<()> {
    run_chain(req, &[&has_name, &has_description, &has_price, &has_image_url])
}

/// PUT /dishes/{dish_id}
pub fn validate_update(req: &DishRequest<'_>) -> AppResult<()> {
    run_chain(
        req,
        &[
            &dish_exists,
            &dish_id_matches,
            &has_name,
            &has_description,
            &has_price,
            &has_image_url,
        ],
    )
}

fn found<'a>(req: &DishRequest<'a>) -> AppResult<&'a Dish> {
    req.existing.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::DishNotFound,
            format!("Dish id not found: {}", req.route_id.unwrap_or_default()),
        )
    })
}

pub fn dish_exists(req: &DishRequest<'_>) -> AppResult<()> {
    found(req).map(|_| ())
}

pub fn dish_id_matches(req: &DishRequest<'_>) -> AppResult<()> {
    let Some(route_id) = req.route_id else {
        return Ok(());
    };
    match conflicting_id(req.data, route_id) {
        None => Ok(()),
        Some(id) => Err(AppError::with_message(
            ErrorCode::DishIdMismatch,
            format!("Dish id does not match route id. Dish: {id}, Route: {route_id}."),
        )),
    }
}

pub fn has_name(req: &DishRequest<'_>) -> AppResult<()> {
    require_text(req.data, "name").map(|_| ())
}

pub fn has_description(req: &DishRequest<'_>) -> AppResult<()> {
    require_text(req.data, "description").map(|_| ())
}

pub fn has_image_url(req: &DishRequest<'_>) -> AppResult<()> {
    require_text(req.data, "image_url").map(|_| ())
}

/// 价格必须是大于 0 的数字 (`null` 视为缺失)
pub fn has_price(req: &DishRequest<'_>) -> AppResult<()> {
    match req.data.get("price") {
        None | Some(Value::Null) => Err(AppError::required_field(
            "price",
            required_message("price"),
        )),
        Some(price) => match price.as_f64() {
            Some(p) if p > 0.0 => Ok(()),
            _ => Err(AppError::with_message(
                ErrorCode::DishInvalidPrice,
                "The 'price' property must be a number greater than 0.",
            )
            .with_detail("field", "price")),
        },
    }
}
