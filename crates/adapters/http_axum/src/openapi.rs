//! OpenAPI 3.0 description of the item routes.
//!
//! Only the document is served; rendering it in a browser is left to an
//! external documentation UI pointed at `/openapi.json`.

use axum::Json;
use serde_json::{Value, json};

/// One documented route.
struct RouteDoc {
    method: &'static str,
    path: &'static str,
    summary: &'static str,
    takes_body: bool,
    success: Value,
    failures: &'static [(&'static str, &'static str)],
}

fn item_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Item" })
}

fn string_schema() -> Value {
    json!({ "type": "string" })
}

fn routes() -> [RouteDoc; 4] {
    [
        RouteDoc {
            method: "get",
            path: "/get-item/{itemId}",
            summary: "Get an item by ID",
            takes_body: false,
            success: item_ref(),
            failures: &[("400", "Invalid item ID"), ("404", "Item ID not found")],
        },
        RouteDoc {
            method: "post",
            path: "/create-item/{itemId}",
            summary: "Create a new item",
            takes_body: true,
            success: item_ref(),
            failures: &[("400", "Validation error or Item ID already exists")],
        },
        RouteDoc {
            method: "put",
            path: "/update-item/{itemId}",
            summary: "Update an existing item",
            takes_body: true,
            success: item_ref(),
            failures: &[
                ("400", "Validation error"),
                ("404", "Item ID does not exist"),
            ],
        },
        RouteDoc {
            method: "delete",
            path: "/delete-item/{itemId}",
            summary: "Delete an item",
            takes_body: false,
            success: string_schema(),
            failures: &[("400", "Invalid item ID"), ("404", "Item ID does not exist")],
        },
    ]
}

impl RouteDoc {
    fn operation(&self) -> Value {
        let mut responses = serde_json::Map::new();
        responses.insert("200".to_string(), response("Success", self.success.clone()));
        for (status, description) in self.failures {
            responses.insert((*status).to_string(), response(description, string_schema()));
        }

        let mut operation = json!({
            "summary": self.summary,
            "parameters": [{
                "name": "itemId",
                "in": "path",
                "required": true,
                "description": "Item ID",
                "schema": { "type": "integer", "minimum": 0 }
            }],
            "responses": responses,
        });
        if self.takes_body {
            operation["requestBody"] = json!({
                "required": true,
                "content": { "application/json": { "schema": item_ref() } }
            });
        }
        operation
    }
}

fn response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

/// Build the full OpenAPI document.
#[must_use]
pub fn document() -> Value {
    let mut paths = serde_json::Map::new();
    for route in routes() {
        let mut item = serde_json::Map::new();
        item.insert(route.method.to_string(), route.operation());
        paths.insert(route.path.to_string(), Value::Object(item));
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Inventory API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
        "components": {
            "schemas": {
                "Item": {
                    "type": "object",
                    "required": ["name", "price"],
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "price": { "type": "number", "description": "Non-zero by default" },
                        "description": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// `GET /openapi.json`
pub async fn serve() -> Json<Value> {
    Json(document())
}
