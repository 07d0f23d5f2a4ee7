use crate::models::Recipe;
use chrono::{DateTime, Utc};
use pantry_core::IngredientGroup;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_URL_LEN: usize = 2048;
pub const MAX_SITE_NAME_LEN: usize = 255;

/// Recipe content accepted on create.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RecipeInput {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub ingredient_groups: Option<Vec<IngredientGroup>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub nutrients: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub ingredient_groups: Option<Vec<IngredientGroup>>,
    pub instructions: Option<Vec<String>>,
    pub nutrients: Option<BTreeMap<String, String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stored JSON that no longer matches its shape is reported as absent.
fn from_json<T: serde::de::DeserializeOwned>(value: Option<Value>) -> Option<T> {
    value.and_then(|v| serde_json::from_value(v).ok())
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            owner_id: recipe.owner_id,
            title: recipe.title,
            url: recipe.url,
            image: recipe.image,
            site_name: recipe.site_name,
            ingredients: from_json(recipe.ingredients),
            ingredient_groups: from_json(recipe.ingredient_groups),
            instructions: from_json(recipe.instructions),
            nutrients: from_json(recipe.nutrients),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

/// Length limits shared by create and update. `None` means "not supplied".
pub fn validate_lengths(
    title: Option<&str>,
    url: Option<&str>,
    image: Option<&str>,
    site_name: Option<&str>,
) -> Result<(), String> {
    if let Some(title) = title {
        let len = title.chars().count();
        if len == 0 || len > MAX_TITLE_LEN {
            return Err(format!(
                "title must be between 1 and {} characters",
                MAX_TITLE_LEN
            ));
        }
    }
    for (name, value, max) in [
        ("url", url, MAX_URL_LEN),
        ("image", image, MAX_URL_LEN),
        ("site_name", site_name, MAX_SITE_NAME_LEN),
    ] {
        if value.is_some_and(|v| v.chars().count() > max) {
            return Err(format!("{} must be at most {} characters", name, max));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(validate_lengths(Some("Soup"), None, None, None).is_ok());
        assert!(validate_lengths(Some(""), None, None, None).is_err());
        assert!(validate_lengths(Some(&"a".repeat(255)), None, None, None).is_ok());
        assert!(validate_lengths(Some(&"a".repeat(256)), None, None, None).is_err());
        assert!(validate_lengths(None, None, None, None).is_ok());
    }

    #[test]
    fn test_url_limit() {
        let long = format!("https://example.com/{}", "a".repeat(2048));
        let err = validate_lengths(Some("Soup"), Some(&long), None, None).unwrap_err();
        assert!(err.starts_with("url"));
    }

    #[test]
    fn test_malformed_stored_json_reads_as_none() {
        let groups: Option<Vec<IngredientGroup>> =
            from_json(Some(serde_json::json!("not a list")));
        assert_eq!(groups, None);

        let groups: Option<Vec<IngredientGroup>> = from_json(Some(
            serde_json::json!([{"purpose": null, "ingredients": ["salt"]}]),
        ));
        assert_eq!(groups.unwrap()[0].ingredients, vec!["salt".to_string()]);
    }
}
