use diesel::prelude::*;

/// Column bound for `recipes.dish`.
pub const DISH_MAX_LEN: usize = 20;
/// Column bound for `recipes.recipe_text`.
pub const RECIPE_TEXT_MAX_LEN: usize = 500;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i64,
    pub recipe_text: String,
    pub dish: String,
}

/// Row values for insert and update. Both fields are stored trimmed.
#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeFields<'a> {
    pub dish: &'a str,
    pub recipe_text: &'a str,
}

impl<'a> RecipeFields<'a> {
    pub fn new(dish: &'a str, recipe_text: &'a str) -> Self {
        Self {
            dish: dish.trim(),
            recipe_text: recipe_text.trim(),
        }
    }
}
