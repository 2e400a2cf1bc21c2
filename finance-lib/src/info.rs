use actix_web::{get, HttpResponse, Responder};
use serde_json::{json, Value};

fn endpoint(method: &str, url: &str, description: &str, example_input: Value) -> Value {
    json!({
        "method": method,
        "url": url,
        "description": description,
        "exampleInput": example_input,
    })
}

/// The route listing served at `/`.
pub fn info_document() -> Value {
    json!({
        "message": "Info Endpoint",
        "endpoints": [
            endpoint("GET", "/users", "Get all users", Value::Null),
            endpoint(
                "POST",
                "/users",
                "Create a new user",
                json!({
                    "Username": "johndoe",
                    "Email": "johndoe@example.com",
                    "Password": "secretPassword123",
                }),
            ),
            endpoint(
                "PUT",
                "/users/:id",
                "Update a user by ID",
                json!({
                    "Username": "john_doe_updated",
                    "Email": "john_updated@example.com",
                    "Password": "newPassword456",
                }),
            ),
            endpoint("DELETE", "/users/:id", "Delete a user by ID", Value::Null),
            endpoint(
                "POST",
                "/login",
                "Log in with a username and password",
                json!({
                    "Username": "johndoe",
                    "Password": "secretPassword123",
                }),
            ),
            endpoint("GET", "/transactions", "Get all transactions", Value::Null),
            endpoint(
                "POST",
                "/transactions",
                "Create a new transaction",
                json!({
                    "UserID": 1,
                    "Amount": 500000,
                    "Type": "expense",
                    "Category": "Food",
                    "Descriptions": "Lunch at a restaurant (optional)",
                    "Date": "2024-11-20T10:00:00Z",
                }),
            ),
            endpoint(
                "PUT",
                "/transactions/:id",
                "Update a transaction by ID",
                json!({
                    "UserID": 1,
                    "Amount": 450000,
                    "Type": "expense",
                    "Category": "Food",
                    "Descriptions": "Updated lunch expense (optional)",
                    "Date": "2024-11-20T12:00:00Z",
                }),
            ),
            endpoint("DELETE", "/transactions/:id", "Delete a transaction by ID", Value::Null),
            endpoint("GET", "/health", "Check that the data store is reachable", Value::Null),
        ],
    })
}

#[get("/")]
pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(info_document())
}
