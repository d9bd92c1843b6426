use super::{RecipeEnvelope, NOT_FOUND};
use crate::api::{ApiError, MessageResponse, RecipeId};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeEnvelope),
        (status = 404, description = "Recipe not found", body = MessageResponse)
    )
)]
pub async fn get_recipe(
    State(store): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = store.get(id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;

    Ok((StatusCode::OK, Json(RecipeEnvelope::from(recipe))))
}
