//! Persistence for recipe rows.
//!
//! `RecipeStore` is the only handle to the database. Each call checks out a
//! pooled connection for its own duration and every write is a single
//! statement, so it commits before the call returns.

use crate::db::{DbConn, DbPool};
use crate::models::{Recipe, RecipeFields};
use crate::schema::recipes;
use diesel::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(#[from] diesel::r2d2::PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

pub struct RecipeStore {
    pool: DbPool,
}

impl RecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn, StoreError> {
        Ok(self.pool.get()?)
    }

    pub fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;
        let rows = recipes::table
            .select(Recipe::as_select())
            .order(recipes::id.asc())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn get(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        let mut conn = self.conn()?;
        let row = recipes::table
            .find(id)
            .select(Recipe::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row)
    }

    /// Inserts a new row and returns it with its assigned id.
    pub fn insert(&self, dish: &str, recipe_text: &str) -> Result<Recipe, StoreError> {
        let fields = RecipeFields::new(dish, recipe_text);
        let mut conn = self.conn()?;
        let recipe = diesel::insert_into(recipes::table)
            .values(&fields)
            .returning(Recipe::as_returning())
            .get_result(&mut conn)?;
        tracing::debug!(id = recipe.id, "inserted recipe");
        Ok(recipe)
    }

    /// Overwrites both fields of an existing row. `None` if the id is unknown.
    pub fn update(
        &self,
        id: i64,
        dish: &str,
        recipe_text: &str,
    ) -> Result<Option<Recipe>, StoreError> {
        let fields = RecipeFields::new(dish, recipe_text);
        let mut conn = self.conn()?;
        let recipe = diesel::update(recipes::table.find(id))
            .set(&fields)
            .returning(Recipe::as_returning())
            .get_result(&mut conn)
            .optional()?;
        tracing::debug!(id, found = recipe.is_some(), "updated recipe");
        Ok(recipe)
    }

    /// Returns whether a row was removed.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.conn()?;
        let removed = diesel::delete(recipes::table.find(id)).execute(&mut conn)?;
        tracing::debug!(id, removed, "deleted recipe");
        Ok(removed > 0)
    }

    /// Removes every row and returns how many were removed.
    pub fn delete_all(&self) -> Result<usize, StoreError> {
        let mut conn = self.conn()?;
        let removed = diesel::delete(recipes::table).execute(&mut conn)?;
        tracing::debug!(removed, "deleted all recipes");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, IN_MEMORY};

    fn store() -> RecipeStore {
        RecipeStore::new(create_pool(IN_MEMORY).unwrap())
    }

    #[test]
    fn test_insert_assigns_id_and_trims() {
        let store = store();
        let recipe = store.insert("  Pho ", "\tSimmer the broth.\n").unwrap();

        assert!(recipe.id > 0);
        assert_eq!(recipe.dish, "Pho");
        assert_eq!(recipe.recipe_text, "Simmer the broth.");
        assert_eq!(store.get(recipe.id).unwrap(), Some(recipe));
    }

    #[test]
    fn test_get_unknown_id() {
        let store = store();
        assert_eq!(store.get(42).unwrap(), None);
    }

    #[test]
    fn test_list_all_returns_every_row() {
        let store = store();
        assert!(store.list_all().unwrap().is_empty());

        let first = store.insert("Soup", "Boil water.").unwrap();
        let second = store.insert("Toast", "Toast bread.").unwrap();

        assert_eq!(store.list_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_update_overwrites_fields_in_place() {
        let store = store();
        let original = store.insert("Soup", "Boil water.").unwrap();

        let updated = store
            .update(original.id, " Stew ", " Simmer slowly. ")
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.dish, "Stew");
        assert_eq!(updated.recipe_text, "Simmer slowly.");
        assert_eq!(store.get(original.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_unknown_id() {
        let store = store();
        assert_eq!(store.update(7, "Stew", "Simmer.").unwrap(), None);
    }

    #[test]
    fn test_delete_reports_removal() {
        let store = store();
        let recipe = store.insert("Soup", "Boil water.").unwrap();

        assert!(store.delete(recipe.id).unwrap());
        assert!(!store.delete(recipe.id).unwrap());
        assert_eq!(store.get(recipe.id).unwrap(), None);
    }

    #[test]
    fn test_delete_all_counts_rows() {
        let store = store();
        store.insert("Soup", "Boil water.").unwrap();
        store.insert("Toast", "Toast bread.").unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert_eq!(store.delete_all().unwrap(), 0);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = store();
        let first = store.insert("Soup", "Boil water.").unwrap();
        store.delete_all().unwrap();

        let second = store.insert("Toast", "Toast bread.").unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_column_bounds_are_enforced() {
        let store = store();
        let long_dish = "x".repeat(21);

        let err = store.insert(&long_dish, "Boil water.").unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
    }
}
