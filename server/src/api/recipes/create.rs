use super::RecipeEnvelope;
use crate::api::{ApiError, JsonObject, MessageResponse};
use crate::validation::{check_fields, check_required, RecipeInput};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeEnvelope),
        (status = 400, description = "Missing or malformed body", body = MessageResponse),
        (status = 422, description = "Required field missing or blank, or a field failed validation", body = MessageResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    JsonObject(data): JsonObject,
) -> Result<impl IntoResponse, ApiError> {
    check_required(&data).map_err(ApiError::Schema)?;
    let input = check_fields(&data).map_err(ApiError::Validation)?;

    let recipe = store.insert(&input.dish, &input.recipe_text)?;
    tracing::info!(id = recipe.id, "created recipe");

    Ok((StatusCode::CREATED, Json(RecipeEnvelope::from(recipe))))
}
