//! Projection of a parser's loose field mapping onto [`ParsedRecipe`].
//!
//! Each field is read on its own. A missing key, an explicit `null`, or a
//! value of the wrong shape leaves that one field `None`; nothing about one
//! field implies anything about another.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{IngredientGroup, ParsedRecipe, RawRecipeFields};

/// Map raw parser output onto the fixed recipe schema.
pub fn normalize(mut fields: RawRecipeFields) -> ParsedRecipe {
    let recipe = ParsedRecipe {
        title: take(&mut fields, "title"),
        author: take(&mut fields, "author"),
        description: take(&mut fields, "description"),
        image: take(&mut fields, "image"),
        site_name: take(&mut fields, "site_name"),
        host: take(&mut fields, "host"),
        canonical_url: take(&mut fields, "canonical_url"),
        language: take(&mut fields, "language"),
        ingredients: take(&mut fields, "ingredients"),
        ingredient_groups: take_ingredient_groups(&mut fields),
        instructions: take(&mut fields, "instructions"),
        instruction_list: take(&mut fields, "instruction_list"),
        prep_time: take_minutes(&mut fields, "prep_time"),
        cook_time: take_minutes(&mut fields, "cook_time"),
        total_time: take_minutes(&mut fields, "total_time"),
        yields: take(&mut fields, "yields"),
        ratings: take(&mut fields, "ratings"),
        ratings_count: take(&mut fields, "ratings_count"),
        category: take(&mut fields, "category"),
        cuisine: take(&mut fields, "cuisine"),
        cooking_method: take(&mut fields, "cooking_method"),
        dietary_restrictions: take(&mut fields, "dietary_restrictions"),
        nutrients: take(&mut fields, "nutrients"),
        equipment: take(&mut fields, "equipment"),
        keywords: take(&mut fields, "keywords"),
        links: take(&mut fields, "links"),
    };

    if !fields.is_empty() {
        tracing::trace!(
            ignored = ?fields.keys().collect::<Vec<_>>(),
            "ignoring unknown recipe fields"
        );
    }

    recipe
}

fn take<T: DeserializeOwned>(fields: &mut RawRecipeFields, key: &str) -> Option<T> {
    let value = fields.remove(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(field = key, error = %e, "discarding recipe field with unexpected shape");
            None
        }
    }
}

/// Minute counts arrive as integers, whole floats, or numeric strings.
fn take_minutes(fields: &mut RawRecipeFields, key: &str) -> Option<i64> {
    let value = fields.remove(key)?;
    let minutes = match &value {
        Value::Null => return None,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if minutes.is_none() {
        tracing::warn!(field = key, value = %value, "discarding non-integral minute value");
    }
    minutes
}

/// Groups are validated one by one: a missing label becomes `None`, a missing
/// ingredient list becomes empty, and entries that are not objects are dropped.
fn take_ingredient_groups(fields: &mut RawRecipeFields) -> Option<Vec<IngredientGroup>> {
    let value = fields.remove("ingredient_groups")?;
    let entries = match value {
        Value::Null => return None,
        Value::Array(entries) => entries,
        other => {
            tracing::warn!(value = %other, "discarding ingredient_groups that is not a list");
            return None;
        }
    };

    let groups = entries
        .into_iter()
        .filter_map(|entry| {
            let obj = match entry {
                Value::Object(obj) => obj,
                other => {
                    tracing::warn!(entry = %other, "dropping ingredient group that is not an object");
                    return None;
                }
            };
            let purpose = obj
                .get("purpose")
                .and_then(Value::as_str)
                .map(str::to_string);
            let ingredients = obj
                .get("ingredients")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            Some(IngredientGroup {
                purpose,
                ingredients,
            })
        })
        .collect();

    Some(groups)
}
