use axum::Json;
use serde_json::{Value, json};

const OUTCOME_RESPONSES: [(&str, &str); 5] = [
    ("200", "Success outcome"),
    ("400", "ValidationFailure or Failure outcome"),
    ("404", "NotFound outcome"),
    ("422", "Failure outcome for a malformed body, path or query string"),
    ("500", "Internal error envelope"),
];

fn operation(id: &str, summary: &str, tag: &str) -> Value {
    let responses: serde_json::Map<String, Value> = OUTCOME_RESPONSES
        .iter()
        .map(|(code, description)| (code.to_string(), json!({ "description": description })))
        .collect();
    json!({
        "operationId": id,
        "summary": summary,
        "tags": [tag],
        "responses": responses,
    })
}

pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Pezza API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/api/v1/pizzas": {
                "post": operation("CreatePizza", "Create a pizza", "Pizzas"),
            },
            "/api/v1/pizzas/search": {
                "post": operation("SearchPizzas", "Search pizzas", "Pizzas"),
            },
            "/api/v1/pizzas/{id}": {
                "get": operation("GetPizza", "Get a pizza", "Pizzas"),
                "put": operation("UpdatePizza", "Update a pizza", "Pizzas"),
                "delete": operation("DeletePizza", "Delete a pizza", "Pizzas"),
            },
            "/api/v1/orders": {
                "get": operation("ListOrders", "List orders", "Orders"),
                "post": operation("CreateOrder", "Create an order", "Orders"),
            },
            "/api/v1/orders/{id}/complete": {
                "post": operation("CompleteOrder", "Complete an order", "Orders"),
            },
            "/api/v1/orders/{id}/status": {
                "get": operation("GetOrderStatus", "Get the status of an order", "Orders"),
            },
        },
    })
}

pub async fn handle() -> Json<Value> {
    Json(document())
}
