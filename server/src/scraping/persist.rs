//! Mapping a scraped recipe onto a stored one.

use crate::models::{
    ingredient_groups_json, nutrients_json, string_list_json, NewRecipe, Recipe,
};
use crate::schema::recipes;
use diesel::prelude::*;
use pantry_core::ParsedRecipe;
use uuid::Uuid;

/// Title used when the page did not supply one.
pub const UNTITLED: &str = "Untitled";

impl NewRecipe {
    /// Flatten a scrape result into an insertable row owned by `owner_id`.
    pub fn from_parsed(parsed: &ParsedRecipe, source_url: &str, owner_id: Uuid) -> Self {
        Self {
            owner_id,
            title: parsed
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED.to_string()),
            url: Some(source_url.to_string()),
            image: parsed.image.clone(),
            site_name: parsed.site_name.clone(),
            ingredients: parsed.ingredients.as_deref().map(string_list_json),
            ingredient_groups: parsed
                .ingredient_groups
                .as_deref()
                .and_then(ingredient_groups_json),
            instructions: Some(string_list_json(
                parsed.instruction_list.as_deref().unwrap_or_default(),
            )),
            nutrients: parsed.nutrients.as_ref().map(nutrients_json),
        }
    }
}

/// Insert one row for `parsed`. Saving the same URL twice stores two rows.
pub fn save_parsed_recipe(
    conn: &mut PgConnection,
    parsed: &ParsedRecipe,
    source_url: &str,
    owner_id: Uuid,
) -> QueryResult<Recipe> {
    let new_recipe = NewRecipe::from_parsed(parsed, source_url, owner_id);
    let recipe = diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(conn)?;

    tracing::info!(recipe_id = %recipe.id, owner_id = %owner_id, url = source_url, "saved scraped recipe");
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::IngredientGroup;
    use serde_json::json;
    use std::collections::BTreeMap;

    const URL: &str = "https://example.com/recipe/test-recipe";

    #[test]
    fn test_defaults_for_missing_fields() {
        let owner = Uuid::new_v4();
        let record = NewRecipe::from_parsed(&ParsedRecipe::default(), URL, owner);

        assert_eq!(record.owner_id, owner);
        assert_eq!(record.title, UNTITLED);
        assert_eq!(record.url.as_deref(), Some(URL));
        assert_eq!(record.instructions, Some(json!([])));
        assert_eq!(record.ingredients, None);
        assert_eq!(record.ingredient_groups, None);
        assert_eq!(record.nutrients, None);
    }

    #[test]
    fn test_scraped_fields_are_carried_over() {
        let parsed = ParsedRecipe {
            title: Some("Test Recipe".to_string()),
            image: Some("https://example.com/a.jpg".to_string()),
            site_name: Some("Example".to_string()),
            ingredients: Some(vec!["flour".to_string(), "eggs".to_string()]),
            ingredient_groups: Some(vec![IngredientGroup {
                purpose: None,
                ingredients: vec!["flour".to_string(), "eggs".to_string()],
            }]),
            instruction_list: Some(vec!["Mix".to_string(), "Bake".to_string()]),
            nutrients: Some(BTreeMap::from([(
                "calories".to_string(),
                "100 kcal".to_string(),
            )])),
            ..Default::default()
        };

        let record = NewRecipe::from_parsed(&parsed, URL, Uuid::new_v4());

        assert_eq!(record.title, "Test Recipe");
        assert_eq!(record.image.as_deref(), Some("https://example.com/a.jpg"));
        assert_eq!(record.site_name.as_deref(), Some("Example"));
        assert_eq!(record.ingredients, Some(json!(["flour", "eggs"])));
        assert_eq!(
            record.ingredient_groups,
            Some(json!([{"purpose": null, "ingredients": ["flour", "eggs"]}]))
        );
        assert_eq!(record.instructions, Some(json!(["Mix", "Bake"])));
        assert_eq!(record.nutrients, Some(json!({"calories": "100 kcal"})));
    }

    #[test]
    fn test_empty_group_list_is_stored_as_null() {
        let parsed = ParsedRecipe {
            ingredient_groups: Some(vec![]),
            ..Default::default()
        };
        let record = NewRecipe::from_parsed(&parsed, URL, Uuid::new_v4());
        assert_eq!(record.ingredient_groups, None);
    }
}
