pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::models::Recipe;
use crate::validation::RecipeInput;
use crate::AppState;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub const NOT_FOUND: &str = "recipe not found";

/// Wire form of a stored recipe. `id` is output only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i64,
    pub dish: String,
    pub recipe_text: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            dish: recipe.dish,
            recipe_text: recipe.recipe_text,
        }
    }
}

/// Single recipe payload: `{"Recipe": {...}}`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeEnvelope {
    #[serde(rename = "Recipe")]
    pub recipe: RecipeResponse,
}

impl From<Recipe> for RecipeEnvelope {
    fn from(recipe: Recipe) -> Self {
        Self {
            recipe: recipe.into(),
        }
    }
}

/// Returns the router for the /recipes endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(list::list_recipes)
                .post(create::create_recipe)
                .delete(delete::delete_all_recipes),
        )
        .route(
            "/recipes/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
        delete::delete_all_recipes,
    ),
    components(schemas(
        RecipeResponse,
        RecipeEnvelope,
        RecipeInput,
        list::RecipesEnvelope,
    ))
)]
pub struct ApiDoc;
