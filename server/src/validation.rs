//! Input checks applied to a decoded JSON body before it reaches the store.
//!
//! There are two passes. The schema pass only runs on create and reports
//! per-field messages for missing or blank required fields. The field pass
//! runs on create and update and produces a single joined message covering
//! every problem it finds.

use crate::models::{DISH_MAX_LEN, RECIPE_TEXT_MAX_LEN};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const BLANK_FIELD: &str = "Can't be Empty!";

/// Per-field schema messages, keyed by wire field name.
pub type SchemaErrors = BTreeMap<&'static str, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dish,
    RecipeText,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Dish, Field::RecipeText];

    pub fn name(self) -> &'static str {
        match self {
            Field::Dish => "dish",
            Field::RecipeText => "recipe_text",
        }
    }

    pub fn max_len(self) -> usize {
        match self {
            Field::Dish => DISH_MAX_LEN,
            Field::RecipeText => RECIPE_TEXT_MAX_LEN,
        }
    }

    fn empty_message(self) -> String {
        format!("{} cannot be empty", self.name())
    }

    fn type_message(self) -> String {
        format!("Invalid data type: {} needs to be String", self.name())
    }

    fn length_message(self) -> String {
        format!(
            "{} cannot be longer than {} characters",
            self.name(),
            self.max_len()
        )
    }

    /// JSON `null` is treated the same as an absent key.
    fn lookup(self, data: &Map<String, Value>) -> Option<&Value> {
        data.get(self.name()).filter(|v| !v.is_null())
    }
}

/// Request body accepted by create and update.
///
/// Bodies are decoded by hand through [`check_required`] and [`check_fields`]
/// so type errors get field-level messages; a value of this type is only
/// produced once both fields passed and were trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct RecipeInput {
    /// Dish name, at most 20 characters after trimming
    pub dish: String,
    /// Recipe body, at most 500 characters after trimming
    pub recipe_text: String,
}

/// Required/non-blank check run while decoding a create request.
///
/// Values that are present but neither null nor strings pass here and are
/// reported by [`check_fields`].
pub fn check_required(data: &Map<String, Value>) -> Result<(), SchemaErrors> {
    let mut errors = SchemaErrors::new();

    for field in Field::ALL {
        let message = match data.get(field.name()) {
            None => MISSING_FIELD,
            Some(Value::Null) => NULL_FIELD,
            Some(Value::String(s)) if s.trim().is_empty() => BLANK_FIELD,
            Some(_) => continue,
        };
        errors.insert(field.name(), vec![message.to_string()]);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Default)]
struct Problems {
    empty: Vec<String>,
    wrong_type: Vec<String>,
    too_long: Vec<String>,
}

impl Problems {
    /// Returns the trimmed value when the field is usable, otherwise records why not.
    fn check(&mut self, field: Field, data: &Map<String, Value>) -> Option<String> {
        match field.lookup(data) {
            None => self.empty.push(field.empty_message()),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    self.empty.push(field.empty_message());
                } else if trimmed.chars().count() > field.max_len() {
                    self.too_long.push(field.length_message());
                } else {
                    return Some(trimmed.to_string());
                }
            }
            Some(_) => self.wrong_type.push(field.type_message()),
        }
        None
    }

    fn into_message(self) -> String {
        self.empty
            .into_iter()
            .chain(self.wrong_type)
            .chain(self.too_long)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Presence, type, blank and length check for both fields.
///
/// Never stops at the first problem. Messages are grouped as emptiness,
/// then type, then length, and joined with `", "`.
pub fn check_fields(data: &Map<String, Value>) -> Result<RecipeInput, String> {
    let mut problems = Problems::default();
    let dish = problems.check(Field::Dish, data);
    let recipe_text = problems.check(Field::RecipeText, data);

    match (dish, recipe_text) {
        (Some(dish), Some(recipe_text)) => Ok(RecipeInput { dish, recipe_text }),
        _ => Err(problems.into_message()),
    }
}
