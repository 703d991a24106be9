use std::collections::BTreeMap;

use axum::{extract::Path, routing::get, Json, Router};
use serde_json::{json, Value};
use tacocloud_core::{list_ingredients, partition_by_name, partition_by_type, IngredientType};

use crate::error::Result;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ingredients", get(list_by_type))
        .route("/api/ingredients/:kind", get(list_of_type))
}

async fn list_by_type() -> Json<Value> {
    let ingredients = list_ingredients();
    let partitions: BTreeMap<_, _> = IngredientType::ALL
        .into_iter()
        .map(|kind| (kind.key(), partition_by_type(&ingredients, kind)))
        .collect();

    Json(json!({
        "success": true,
        "ingredients": partitions,
    }))
}

async fn list_of_type(Path(kind): Path<String>) -> Result<Json<Value>> {
    let ingredients = partition_by_name(&list_ingredients(), &kind)?;

    Ok(Json(json!({
        "success": true,
        "ingredients": ingredients,
        "count": ingredients.len(),
    })))
}
