use axum::response::Json;
use serde_json::{Value, json};
use tracing::instrument;
use utoipa::OpenApi;

use crate::schemas::ApiDoc;

/// Route map for the API root, generated from the OpenAPI document so it
/// never drifts from the mounted routes.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Route map of every exposed endpoint")
    )
)]
#[instrument]
pub async fn sitemap() -> Json<Value> {
    let doc = match serde_json::to_value(ApiDoc::openapi()) {
        Ok(doc) => doc,
        Err(_) => return Json(json!({ "endpoints": [] })),
    };

    let mut endpoints = Vec::new();
    if let Some(paths) = doc.get("paths").and_then(Value::as_object) {
        for (path, operations) in paths {
            if let Some(operations) = operations.as_object() {
                for method in operations.keys() {
                    endpoints.push(format!("{} {}", method.to_uppercase(), path));
                }
            }
        }
    }
    endpoints.sort();

    Json(json!({ "endpoints": endpoints }))
}
