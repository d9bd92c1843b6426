use super::{RecipeEnvelope, NOT_FOUND};
use crate::api::{ApiError, JsonObject, MessageResponse, RecipeId};
use crate::validation::{check_fields, RecipeInput};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    request_body = RecipeInput,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeEnvelope),
        (status = 400, description = "Missing or malformed body", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 422, description = "Field type or content invalid", body = MessageResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    RecipeId(id): RecipeId,
    JsonObject(data): JsonObject,
) -> Result<impl IntoResponse, ApiError> {
    if store.get(id)?.is_none() {
        return Err(ApiError::NotFound("Recipe Id doesn't exist, can't update!"));
    }

    let input = check_fields(&data).map_err(ApiError::Validation)?;

    // The row can disappear between the lookup and the write
    let recipe = store
        .update(id, &input.dish, &input.recipe_text)?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    tracing::info!(id, "updated recipe");

    Ok((StatusCode::OK, Json(RecipeEnvelope::from(recipe))))
}
