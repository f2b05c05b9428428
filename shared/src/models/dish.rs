//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish entity (a menu item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Always > 0
    pub price: f64,
    pub image_url: String,
}

/// Create / update dish payload
///
/// Built from a request body only after the dish validators passed. An `id`
/// carried by the body is ignored here; it is only compared to the route id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Dish {
    /// Build a new dish with a freshly generated id
    pub fn from_payload(id: impl Into<String>, payload: DishPayload) -> Self {
        Self {
            id: id.into(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, payload: DishPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.image_url = payload.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(name: &str, price: f64) -> DishPayload {
        DishPayload {
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            image_url: "https://example.com/dish.jpg".to_string(),
        }
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut dish = Dish::from_payload("abc", payload("Soup", 4.5));
        dish.apply(payload("Stew", 9.0));
        assert_eq!(dish.id, "abc");
        assert_eq!(dish.name, "Stew");
        assert_eq!(dish.price, 9.0);
    }

    #[test]
    fn test_payload_ignores_body_id() {
        let p: DishPayload = serde_json::from_value(json!({
            "id": "other",
            "name": "Soup",
            "description": "Hot",
            "price": 3,
            "image_url": "u"
        }))
        .unwrap();
        assert_eq!(p.price, 3.0);
        assert_eq!(p.name, "Soup");
    }

    #[test]
    fn test_dish_field_names() {
        let dish = Dish::from_payload("1", payload("Soup", 2.5));
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["image_url"], "https://example.com/dish.jpg");
        assert_eq!(json["price"], 2.5);
    }
}
