mod common;

use common::*;
use http::StatusCode;
use serde_json::{Value, json};

fn new_order() -> Value {
    json!({
        "data": {
            "deliverTo": "Rick Sanchez (C-132)",
            "mobileNumber": "(202) 456-1111",
            "dishes": [
                {
                    "id": "90c3d873684bf381dfab29034b5bba73",
                    "name": "Broccoli and beetroot stir fry",
                    "price": 15,
                    "quantity": 2
                }
            ]
        }
    })
}

fn update_body(id: &str, status: &str) -> Value {
    let mut body = new_order();
    body["data"]["id"] = json!(id);
    body["data"]["status"] = json!(status);
    body
}

#[tokio::test]
async fn list_returns_seeded_orders() {
    let (app, _) = test_app();
    let res = get(&app, "/orders").await;
    assert_eq!(res.status, StatusCode::OK);
    let orders = res.data();
    assert_eq!(orders.as_array().unwrap().len(), 3);
    assert_eq!(orders[0]["id"], OUT_FOR_DELIVERY_ORDER_ID);
}

#[tokio::test]
async fn read_order() {
    let (app, _) = test_app();
    let res = get(&app, &format!("/orders/{DELIVERED_ORDER_ID}")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["status"], "delivered");
    assert_eq!(res.data()["dishes"][0]["quantity"], 2);
    // 菜品快照原样保留
    assert_eq!(res.data()["dishes"][0]["price"], 19);
}

#[tokio::test]
async fn read_missing_order() {
    let (app, _) = test_app();
    let res = get(&app, "/orders/nope").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error(), "Order id not found: nope");
}

#[tokio::test]
async fn create_order_defaults_to_pending() {
    let (app, state) = test_app();
    let res = post(&app, "/orders", new_order()).await;
    assert_eq!(res.status, StatusCode::CREATED);

    let order = res.data();
    let id = order["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 32);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["deliverTo"], "Rick Sanchez (C-132)");
    assert_eq!(order["dishes"][0]["quantity"], 2);
    assert_eq!(order["dishes"][0]["name"], "Broccoli and beetroot stir fry");
    assert_eq!(state.db.orders.len(), 4);

    let res = get(&app, &format!("/orders/{id}")).await;
    assert_eq!(res.data(), order);
}

#[tokio::test]
async fn create_order_with_status() {
    let (app, _) = test_app();
    let mut body = new_order();
    body["data"]["status"] = json!("preparing");
    let res = post(&app, "/orders", body).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.data()["status"], "preparing");

    let mut body = new_order();
    body["data"]["status"] = json!("lost");
    let res = post(&app, "/orders", body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error(), "Order must have a valid status.");
}

#[tokio::test]
async fn create_rejects_invalid_orders() {
    let (app, state) = test_app();

    let cases: Vec<(&str, Value, &str)> = vec![
        ("deliverTo", Value::Null, "A 'deliverTo' property is required."),
        ("deliverTo", json!(""), "A 'deliverTo' property is required."),
        ("mobileNumber", Value::Null, "A 'mobileNumber' property is required."),
        ("mobileNumber", json!(""), "A 'mobileNumber' property is required."),
        ("dishes", Value::Null, "A 'dishes' property is required."),
        ("dishes", json!([]), "A 'dishes' property is required."),
        ("dishes", json!("not an array"), "A 'dishes' property is required."),
    ];

    for (field, value, message) in cases {
        let mut body = new_order();
        if value.is_null() {
            body["data"].as_object_mut().unwrap().remove(field);
        } else {
            body["data"][field] = value;
        }
        let res = post(&app, "/orders", body).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(res.error(), message);
    }

    assert_eq!(state.db.orders.len(), 3);
}

#[tokio::test]
async fn create_accepts_whitespace_text() {
    let (app, _) = test_app();
    let mut body = new_order();
    body["data"]["deliverTo"] = json!(" ");
    body["data"]["mobileNumber"] = json!("  ");
    let res = post(&app, "/orders", body).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.data()["deliverTo"], " ");
}

#[tokio::test]
async fn create_rejects_bad_quantities() {
    let (app, _) = test_app();

    for (quantity, index) in [
        (Value::Null, 0),
        (json!(0), 0),
        (json!("2"), 0),
        (json!(-4), 0),
    ] {
        let mut body = new_order();
        if quantity.is_null() {
            body["data"]["dishes"][0]
                .as_object_mut()
                .unwrap()
                .remove("quantity");
        } else {
            body["data"]["dishes"][0]["quantity"] = quantity;
        }
        let res = post(&app, "/orders", body).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            res.error(),
            format!("Dish {index} must have a quantity that is an integer greater than 0")
        );
    }

    let mut body = new_order();
    body["data"]["dishes"] = json!([
        { "id": "a", "quantity": 1 },
        { "id": "b", "quantity": 0 }
    ]);
    let res = post(&app, "/orders", body).await;
    assert_eq!(
        res.error(),
        "Dish 1 must have a quantity that is an integer greater than 0"
    );
}

#[tokio::test]
async fn update_order() {
    let (app, _) = test_app();
    let res = put(
        &app,
        &format!("/orders/{PENDING_ORDER_ID}"),
        update_body(PENDING_ORDER_ID, "out-for-delivery"),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["id"], PENDING_ORDER_ID);
    assert_eq!(res.data()["status"], "out-for-delivery");
    assert_eq!(res.data()["deliverTo"], "Rick Sanchez (C-132)");

    let res = get(&app, &format!("/orders/{PENDING_ORDER_ID}")).await;
    assert_eq!(res.data()["status"], "out-for-delivery");
}

#[tokio::test]
async fn update_without_body_id() {
    let (app, _) = test_app();
    let mut body = new_order();
    body["data"]["status"] = json!("preparing");
    let res = put(&app, &format!("/orders/{PENDING_ORDER_ID}"), body).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["id"], PENDING_ORDER_ID);
}

#[tokio::test]
async fn update_id_mismatch() {
    let (app, _) = test_app();
    let res = put(
        &app,
        &format!("/orders/{PENDING_ORDER_ID}"),
        update_body("other", "preparing"),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.error(),
        format!("Order id does not match route id. Order: other, Route: {PENDING_ORDER_ID}.")
    );
}

#[tokio::test]
async fn update_missing_order() {
    let (app, _) = test_app();
    let res = put(&app, "/orders/nope", update_body("nope", "pending")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error(), "Order id not found: nope");
}

#[tokio::test]
async fn update_rejects_invalid_status() {
    let (app, _) = test_app();
    for status in ["", "invalid", "delivered"] {
        let res = put(
            &app,
            &format!("/orders/{PENDING_ORDER_ID}"),
            update_body(PENDING_ORDER_ID, status),
        )
        .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{status}");
        assert_eq!(
            res.error(),
            "Order must have a valid status."
        );
    }
}

#[tokio::test]
async fn update_delivered_order() {
    let (app, _) = test_app();
    let res = put(
        &app,
        &format!("/orders/{DELIVERED_ORDER_ID}"),
        update_body(DELIVERED_ORDER_ID, "pending"),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error(), "A delivered order cannot be changed.");
}

#[tokio::test]
async fn update_rejects_bad_quantity() {
    let (app, _) = test_app();
    let mut body = update_body(PENDING_ORDER_ID, "preparing");
    body["data"]["dishes"][0]["quantity"] = json!(0);
    let res = put(&app, &format!("/orders/{PENDING_ORDER_ID}"), body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res.error(),
        "Dish 0 must have a quantity that is an integer greater than 0"
    );
}

#[tokio::test]
async fn delete_pending_order() {
    let (app, state) = test_app();
    let res = delete(&app, &format!("/orders/{PENDING_ORDER_ID}")).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.text.is_empty());
    assert_eq!(state.db.orders.len(), 2);

    let res = get(&app, &format!("/orders/{PENDING_ORDER_ID}")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = delete(&app, &format!("/orders/{PENDING_ORDER_ID}")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error(), format!("Order id not found: {PENDING_ORDER_ID}"));
}

#[tokio::test]
async fn delete_requires_pending() {
    let (app, state) = test_app();
    for id in [OUT_FOR_DELIVERY_ORDER_ID, DELIVERED_ORDER_ID] {
        let res = delete(&app, &format!("/orders/{id}")).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.error(), "Order must have status 'pending' to delete.");
    }
    assert_eq!(state.db.orders.len(), 3);
}

#[tokio::test]
async fn create_then_delete() {
    let (app, _) = test_app();
    let created = post(&app, "/orders", new_order()).await.data();
    let id = created["id"].as_str().unwrap();

    let res = delete(&app, &format!("/orders/{id}")).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let ids: Vec<Value> = get(&app, "/orders")
        .await
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].clone())
        .collect();
    assert!(!ids.contains(&json!(id)));
}
