use super::NOT_FOUND;
use crate::api::{ApiError, MessageResponse, RecipeId};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse)
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<impl IntoResponse, ApiError> {
    if !store.delete(id)? {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    tracing::info!(id, "deleted recipe");

    Ok((StatusCode::OK, Json(MessageResponse::new("Recipe Deleted!"))))
}

#[utoipa::path(
    delete,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes deleted, even if there were none", body = MessageResponse)
    )
)]
pub async fn delete_all_recipes(
    State(store): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = store.delete_all()?;
    tracing::info!(removed, "deleted all recipes");

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(" ALL The Recipes Are Deleted!")),
    ))
}
