use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Loosely typed output of a [`crate::extract::RecipeParser`]: recipe field
/// name to whatever JSON value the parser found for it.
pub type RawRecipeFields = serde_json::Map<String, serde_json::Value>;

/// A labeled subset of a recipe's ingredients (e.g. "For the sauce").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientGroup {
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Recipe data extracted from a page, projected onto a fixed schema.
///
/// Every field is optional and independent: `None` means the page did not
/// supply it. All keys are always serialized, absent ones as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedRecipe {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
    pub host: Option<String>,
    pub canonical_url: Option<String>,
    pub language: Option<String>,

    pub ingredients: Option<Vec<String>>,
    pub ingredient_groups: Option<Vec<IngredientGroup>>,

    /// Instruction steps joined into one block of text.
    pub instructions: Option<String>,
    pub instruction_list: Option<Vec<String>>,

    /// Minutes.
    pub prep_time: Option<i64>,
    /// Minutes.
    pub cook_time: Option<i64>,
    /// Minutes.
    pub total_time: Option<i64>,

    pub yields: Option<String>,

    pub ratings: Option<f64>,
    pub ratings_count: Option<f64>,

    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub cooking_method: Option<String>,

    pub dietary_restrictions: Option<Vec<String>>,
    pub nutrients: Option<BTreeMap<String, String>>,

    pub equipment: Option<Vec<String>>,

    pub keywords: Option<Vec<String>>,
    pub links: Option<Vec<BTreeMap<String, String>>>,
}
