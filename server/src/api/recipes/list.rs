use super::RecipeResponse;
use crate::api::{ApiError, MessageResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// All recipes payload: `{"Recipes": [...]}`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipesEnvelope {
    #[serde(rename = "Recipes")]
    pub recipes: Vec<RecipeResponse>,
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Every stored recipe, ordered by id", body = RecipesEnvelope),
        (status = 404, description = "No recipes stored", body = MessageResponse)
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let recipes: Vec<RecipeResponse> = store
        .list_all()?
        .into_iter()
        .map(RecipeResponse::from)
        .collect();

    if recipes.is_empty() {
        return Err(ApiError::NotFound("recipes not found !"));
    }

    Ok((StatusCode::OK, Json(RecipesEnvelope { recipes })))
}
