use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub full_name: Option<&'a str>,
    pub password_hash: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

/// A stored recipe. List-shaped columns hold plain JSON so rows written by
/// hand and rows written by the scraper share one layout.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    pub ingredients: Option<serde_json::Value>,
    pub ingredient_groups: Option<serde_json::Value>,
    pub instructions: Option<serde_json::Value>,
    pub nutrients: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe {
    pub owner_id: Uuid,
    pub title: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    pub ingredients: Option<serde_json::Value>,
    pub ingredient_groups: Option<serde_json::Value>,
    pub instructions: Option<serde_json::Value>,
    pub nutrients: Option<serde_json::Value>,
}

/// Partial update: `None` leaves the column as it is. `ingredient_groups`
/// uses `Some(None)` to clear the column.
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset {
    pub title: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    pub ingredients: Option<serde_json::Value>,
    pub ingredient_groups: Option<Option<serde_json::Value>>,
    pub instructions: Option<serde_json::Value>,
    pub nutrients: Option<serde_json::Value>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Plain JSON array of strings for a list column.
pub fn string_list_json(items: &[String]) -> serde_json::Value {
    serde_json::Value::from(items.to_vec())
}

/// Ingredient groups as plain `{"purpose", "ingredients"}` objects. An empty
/// list is stored as NULL.
pub fn ingredient_groups_json(groups: &[pantry_core::IngredientGroup]) -> Option<serde_json::Value> {
    if groups.is_empty() {
        return None;
    }
    Some(serde_json::Value::Array(
        groups
            .iter()
            .map(|g| {
                serde_json::json!({
                    "purpose": g.purpose,
                    "ingredients": g.ingredients,
                })
            })
            .collect(),
    ))
}

pub fn nutrients_json(
    nutrients: &std::collections::BTreeMap<String, String>,
) -> serde_json::Value {
    serde_json::Value::Object(
        nutrients
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(v.as_str())))
            .collect(),
    )
}
