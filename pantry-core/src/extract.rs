//! Recipe markup parsing.
//!
//! A [`RecipeParser`] turns a page's HTML into a loose field mapping. The
//! pipeline treats it as a black box; [`SchemaOrgParser`] is the built-in
//! implementation for schema.org `Recipe` data.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::types::RawRecipeFields;

/// Converts raw HTML plus its source URL into recipe fields.
///
/// Parsing never fails: keys the parser cannot fill are simply left out of
/// the mapping.
pub trait RecipeParser: Send + Sync {
    fn parse(&self, html: &str, url: &str) -> RawRecipeFields;
}

/// Parser for schema.org `Recipe` markup: JSON-LD first, microdata second,
/// plus page-level metadata (Open Graph, canonical link, language, anchors).
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaOrgParser;

impl RecipeParser for SchemaOrgParser {
    fn parse(&self, html: &str, url: &str) -> RawRecipeFields {
        let document = Html::parse_document(html);
        let mut fields = RawRecipeFields::new();

        if let Some(recipe) = find_jsonld_recipe(&document) {
            tracing::debug!(url, "recipe found in JSON-LD");
            project_jsonld(&recipe, &mut fields);
        } else if let Some(element) = find_microdata_recipe(&document) {
            tracing::debug!(url, "recipe found in microdata");
            project_microdata(element, &mut fields);
        } else {
            tracing::debug!(url, "no recipe markup found");
        }

        add_page_fields(&document, url, &mut fields);
        fields
    }
}

// ---------------------------------------------------------------------------
// JSON-LD
// ---------------------------------------------------------------------------

fn find_jsonld_recipe(document: &Html) -> Option<Value> {
    let selector = Selector::parse("script[type='application/ld+json']").expect("Invalid selector");

    for element in document.select(&selector) {
        let json_text = element.inner_html();

        // Sanitize JSON to handle malformed content (e.g., unescaped newlines)
        let sanitized = sanitize_json(&json_text);

        let json: Value = match serde_json::from_str(&sanitized) {
            Ok(v) => v,
            Err(_) => continue, // Try next script tag
        };

        if let Some(recipe) = find_recipe_in_json(&json) {
            return Some(recipe.clone());
        }
    }

    None
}

/// Some sites include literal newlines/tabs inside JSON strings instead of
/// escaped versions.
fn sanitize_json(json: &str) -> String {
    let mut result = String::with_capacity(json.len());
    let mut in_string = false;
    let mut prev_char = '\0';

    for c in json.chars() {
        if c == '"' && prev_char != '\\' {
            in_string = !in_string;
            result.push(c);
        } else if in_string {
            match c {
                '\n' => result.push_str("\\n"),
                '\r' => result.push_str("\\r"),
                '\t' => result.push_str("\\t"),
                c if c.is_control() => {}
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
        prev_char = c;
    }

    result
}

/// Recursively search for a Recipe object in JSON-LD.
/// Handles @graph arrays and nested structures.
fn find_recipe_in_json(json: &Value) -> Option<&Value> {
    match json {
        Value::Object(obj) => {
            if let Some(type_val) = obj.get("@type") {
                let is_recipe = match type_val {
                    Value::String(s) => s == "Recipe",
                    Value::Array(arr) => arr.iter().any(|v| v == "Recipe"),
                    _ => false,
                };
                if is_recipe {
                    return Some(json);
                }
            }

            if let Some(graph) = obj.get("@graph") {
                if let Some(recipe) = find_recipe_in_json(graph) {
                    return Some(recipe);
                }
            }

            obj.values().find_map(find_recipe_in_json)
        }
        Value::Array(arr) => arr.iter().find_map(find_recipe_in_json),
        _ => None,
    }
}

fn project_jsonld(recipe: &Value, fields: &mut RawRecipeFields) {
    put_opt(fields, "title", recipe.get("name").and_then(text));
    put_opt(fields, "description", recipe.get("description").and_then(text));
    put_opt(fields, "author", recipe.get("author").and_then(joined));
    put_opt(fields, "image", recipe.get("image").and_then(first_image));
    put_opt(fields, "language", recipe.get("inLanguage").and_then(text));

    let ingredients = recipe
        .get("recipeIngredient")
        .or_else(|| recipe.get("ingredients"))
        .map(text_list)
        .unwrap_or_default();
    put_ingredients(fields, ingredients);

    let steps = recipe
        .get("recipeInstructions")
        .map(instruction_steps)
        .unwrap_or_default();
    put_instructions(fields, steps);

    put_times(
        fields,
        recipe.get("prepTime").and_then(text).as_deref(),
        recipe.get("cookTime").and_then(text).as_deref(),
        recipe.get("totalTime").and_then(text).as_deref(),
    );

    put_opt(fields, "yields", recipe.get("recipeYield").and_then(yields));

    if let Some(rating) = recipe.get("aggregateRating") {
        put_opt(
            fields,
            "ratings",
            rating
                .get("ratingValue")
                .and_then(number)
                .map(|v| (v * 100.0).round() / 100.0),
        );
        put_opt(
            fields,
            "ratings_count",
            rating
                .get("ratingCount")
                .or_else(|| rating.get("reviewCount"))
                .and_then(number),
        );
    }

    put_opt(fields, "category", recipe.get("recipeCategory").and_then(joined));
    put_opt(fields, "cuisine", recipe.get("recipeCuisine").and_then(joined));
    put_opt(fields, "cooking_method", recipe.get("cookingMethod").and_then(joined));

    let diets: Vec<String> = recipe
        .get("suitableForDiet")
        .map(text_list)
        .unwrap_or_default()
        .iter()
        .filter_map(|d| diet_name(d))
        .collect();
    put_list(fields, "dietary_restrictions", diets);

    if let Some(Value::Object(nutrition)) = recipe.get("nutrition") {
        let nutrients: BTreeMap<String, String> = nutrition
            .iter()
            .filter(|(k, _)| !k.starts_with('@'))
            .filter_map(|(k, v)| text(v).map(|t| (k.clone(), t)))
            .collect();
        if !nutrients.is_empty() {
            fields.insert("nutrients".to_string(), string_map(nutrients));
        }
    }

    let equipment = dedup(recipe.get("tool").map(text_list).unwrap_or_default());
    put_list(fields, "equipment", equipment);

    let keywords = match recipe.get("keywords") {
        Some(Value::String(s)) => s.split(',').filter_map(clean_text).collect(),
        Some(other) => text_list(other),
        None => Vec::new(),
    };
    put_list(fields, "keywords", dedup(keywords));
}

/// Flatten recipeInstructions: a plain string, a list of strings, HowToStep
/// objects, or HowToSection objects holding further steps.
fn instruction_steps(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => s.lines().filter_map(clean_text).collect(),
        Value::Array(arr) => arr.iter().flat_map(instruction_steps).collect(),
        Value::Object(obj) => {
            if let Some(items) = obj.get("itemListElement") {
                return instruction_steps(items);
            }
            obj.get("text")
                .or_else(|| obj.get("name"))
                .and_then(text)
                .into_iter()
                .collect()
        }
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Microdata
// ---------------------------------------------------------------------------

fn find_microdata_recipe(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse(
        r#"[itemtype="http://schema.org/Recipe"], [itemtype="https://schema.org/Recipe"]"#,
    )
    .expect("Invalid selector");
    document.select(&selector).next()
}

fn project_microdata(recipe: ElementRef<'_>, fields: &mut RawRecipeFields) {
    put_opt(fields, "title", microdata_text(&recipe, "name"));
    put_opt(fields, "description", microdata_text(&recipe, "description"));
    put_opt(fields, "author", microdata_text(&recipe, "author"));
    put_opt(fields, "image", microdata_image(&recipe));

    let ingredient_selector =
        Selector::parse(r#"[itemprop="recipeIngredient"], [itemprop="ingredients"]"#)
            .expect("Invalid selector");
    let ingredients: Vec<String> = recipe
        .select(&ingredient_selector)
        .filter_map(|el| clean_text(&el.text().collect::<String>()))
        .collect();
    put_ingredients(fields, ingredients);

    put_instructions(fields, microdata_steps(&recipe));

    put_times(
        fields,
        microdata_text(&recipe, "prepTime").as_deref(),
        microdata_text(&recipe, "cookTime").as_deref(),
        microdata_text(&recipe, "totalTime").as_deref(),
    );

    put_opt(
        fields,
        "yields",
        microdata_text(&recipe, "recipeYield").and_then(|y| yields(&Value::String(y))),
    );
    put_opt(fields, "category", microdata_text(&recipe, "recipeCategory"));
    put_opt(fields, "cuisine", microdata_text(&recipe, "recipeCuisine"));
}

/// Text of the first element with the given itemprop. `content` and
/// `datetime` attributes win over element text (meta and time tags).
fn microdata_text(element: &ElementRef<'_>, prop: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"[itemprop="{}"]"#, prop)).ok()?;
    let el = element.select(&selector).next()?;
    let raw = el
        .value()
        .attr("content")
        .or_else(|| el.value().attr("datetime"))
        .map(str::to_string)
        .unwrap_or_else(|| el.text().collect::<String>());
    clean_text(&raw)
}

fn microdata_steps(recipe: &ElementRef<'_>) -> Vec<String> {
    let step_selector = Selector::parse(
        r#"[itemprop="recipeInstructions"], [itemprop="instructions"], [itemtype*="HowToStep"]"#,
    )
    .expect("Invalid selector");
    let text_selector = Selector::parse(r#"[itemprop="text"]"#).expect("Invalid selector");

    recipe
        .select(&step_selector)
        .filter_map(|el| {
            let raw = match el.select(&text_selector).next() {
                Some(text_el) => text_el.text().collect::<String>(),
                None => el.text().collect::<String>(),
            };
            clean_text(&raw)
        })
        .collect()
}

fn microdata_image(recipe: &ElementRef<'_>) -> Option<String> {
    let selector = Selector::parse(r#"[itemprop="image"]"#).expect("Invalid selector");
    recipe.select(&selector).find_map(|el| {
        let attrs = el.value();
        attrs
            .attr("src")
            .or_else(|| attrs.attr("href"))
            .or_else(|| attrs.attr("content"))
            .map(str::to_string)
    })
}

// ---------------------------------------------------------------------------
// Page-level metadata
// ---------------------------------------------------------------------------

/// Fill keys that come from the page rather than the recipe object. Values
/// already taken from recipe markup are kept.
fn add_page_fields(document: &Html, url: &str, fields: &mut RawRecipeFields) {
    put_missing(fields, "site_name", meta_property(document, "og:site_name"));
    put_missing(fields, "image", meta_property(document, "og:image"));

    let canonical = Selector::parse(r#"link[rel="canonical"]"#)
        .ok()
        .and_then(|s| {
            document
                .select(&s)
                .next()
                .and_then(|el| el.value().attr("href"))
                .and_then(clean_text)
        })
        .or_else(|| Some(url.to_string()));
    put_missing(fields, "canonical_url", canonical);

    let language = Selector::parse("html[lang]").ok().and_then(|s| {
        document
            .select(&s)
            .next()
            .and_then(|el| el.value().attr("lang"))
            .and_then(clean_text)
    });
    put_missing(fields, "language", language);

    let host = url::Url::parse(url).ok().and_then(|parsed| {
        parsed
            .host_str()
            .map(|h| h.strip_prefix("www.").unwrap_or(h).to_string())
    });
    put_missing(fields, "host", host);

    if !fields.contains_key("links") {
        let links = page_links(document);
        if !links.is_empty() {
            fields.insert(
                "links".to_string(),
                Value::Array(links.into_iter().map(string_map).collect()),
            );
        }
    }
}

fn meta_property(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{}"]"#, property)).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .and_then(clean_text)
}

/// Every anchor with an href, as its attribute mapping.
fn page_links(document: &Html) -> Vec<BTreeMap<String, String>> {
    let selector = Selector::parse("a[href]").expect("Invalid selector");
    document
        .select(&selector)
        .map(|el| {
            el.value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^P(?:(\d+(?:\.\d+)?)D)?(?:T(?:(\d+(?:\.\d+)?)H)?(?:(\d+(?:\.\d+)?)M)?(?:(\d+(?:\.\d+)?)S)?)?$",
    )
    .expect("Invalid duration regex")
});

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid camel case regex"));

/// Decode the handful of entities that show up in structured data, collapse
/// whitespace, and drop empty results.
fn clean_text(raw: &str) -> Option<String> {
    let decoded = raw
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&#8217;", "\u{2019}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    let collapsed = WHITESPACE_REGEX.replace_all(decoded.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.into_owned())
    }
}

/// First usable text in a JSON-LD value.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => clean_text(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(arr) => arr.iter().find_map(text),
        Value::Object(obj) => obj.get("name").or_else(|| obj.get("@value")).and_then(text),
        _ => None,
    }
}

/// Every usable text in a JSON-LD value.
fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(arr) => arr.iter().filter_map(text).collect(),
        other => text(other).into_iter().collect(),
    }
}

fn joined(value: &Value) -> Option<String> {
    let items = dedup(text_list(value));
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn first_image(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => clean_text(s),
        Value::Array(arr) => arr.iter().find_map(first_image),
        Value::Object(obj) => obj
            .get("url")
            .or_else(|| obj.get("contentUrl"))
            .and_then(first_image),
        _ => None,
    }
}

/// Bare serving counts read better with a unit.
fn yields(value: &Value) -> Option<String> {
    let raw = match value {
        Value::Array(arr) => return arr.iter().find_map(yields),
        other => text(other)?,
    };
    if raw.chars().all(|c| c.is_ascii_digit()) {
        match raw.parse::<u64>() {
            Ok(n) => {
                let unit = if n == 1 { "serving" } else { "servings" };
                Some(format!("{} {}", n, unit))
            }
            Err(_) => Some(raw),
        }
    } else {
        Some(raw)
    }
}

/// Whole minutes from an ISO-8601 duration ("PT1H30M") or a bare number.
pub(crate) fn parse_duration_minutes(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(minutes) = raw.parse::<i64>() {
        return Some(minutes);
    }

    let caps = DURATION_REGEX.captures(raw)?;
    let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());
    if (1..=4).all(|i| caps.get(i).is_none()) {
        return None;
    }

    let minutes = part(1).unwrap_or(0.0) * 1440.0
        + part(2).unwrap_or(0.0) * 60.0
        + part(3).unwrap_or(0.0)
        + part(4).unwrap_or(0.0) / 60.0;
    Some(minutes.round() as i64)
}

/// "https://schema.org/GlutenFreeDiet" -> "Gluten Free"
fn diet_name(raw: &str) -> Option<String> {
    let last = raw.rsplit('/').next().unwrap_or(raw);
    let stem = last.strip_suffix("Diet").unwrap_or(last);
    let spaced = CAMEL_CASE_REGEX.replace_all(stem, "$1 $2");
    clean_text(&spaced)
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

fn string_map(map: BTreeMap<String, String>) -> Value {
    Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
}

fn put_opt(fields: &mut RawRecipeFields, key: &str, value: Option<impl Into<Value>>) {
    if let Some(v) = value {
        fields.insert(key.to_string(), v.into());
    }
}

fn put_missing(fields: &mut RawRecipeFields, key: &str, value: Option<String>) {
    if !fields.contains_key(key) {
        put_opt(fields, key, value);
    }
}

fn put_list(fields: &mut RawRecipeFields, key: &str, items: Vec<String>) {
    if !items.is_empty() {
        fields.insert(key.to_string(), Value::from(items));
    }
}

/// Ungrouped pages still get a single unlabeled group.
fn put_ingredients(fields: &mut RawRecipeFields, ingredients: Vec<String>) {
    if ingredients.is_empty() {
        return;
    }
    fields.insert(
        "ingredient_groups".to_string(),
        serde_json::json!([{ "purpose": null, "ingredients": ingredients }]),
    );
    fields.insert("ingredients".to_string(), Value::from(ingredients));
}

fn put_instructions(fields: &mut RawRecipeFields, steps: Vec<String>) {
    if steps.is_empty() {
        return;
    }
    fields.insert("instructions".to_string(), Value::from(steps.join("\n")));
    fields.insert("instruction_list".to_string(), Value::from(steps));
}

fn put_times(
    fields: &mut RawRecipeFields,
    prep: Option<&str>,
    cook: Option<&str>,
    total: Option<&str>,
) {
    let prep = prep.and_then(parse_duration_minutes);
    let cook = cook.and_then(parse_duration_minutes);
    // Summing untrusted page values can overflow; leave the total unset then.
    let total = total.and_then(parse_duration_minutes).or(match (prep, cook) {
        (Some(p), Some(c)) => p.checked_add(c),
        _ => None,
    });
    put_opt(fields, "prep_time", prep);
    put_opt(fields, "cook_time", cook);
    put_opt(fields, "total_time", total);
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.example.com/recipe/test-recipe";

    fn parse(html: &str) -> RawRecipeFields {
        SchemaOrgParser.parse(html, URL)
    }

    #[test]
    fn test_jsonld_recipe_fields() {
        let html = r#"
            <!DOCTYPE html>
            <html lang="en">
            <head>
                <meta property="og:site_name" content="Example Kitchen">
                <link rel="canonical" href="https://example.com/recipe/test-recipe">
                <script type="application/ld+json">
                {
                    "@context": "https://schema.org",
                    "@type": "Recipe",
                    "name": "Test Recipe",
                    "author": {"@type": "Person", "name": "Jane Doe"},
                    "description": "A simple cake &amp; more",
                    "image": ["https://example.com/cake.jpg"],
                    "recipeIngredient": ["1 cup flour", "  2 eggs ", ""],
                    "recipeInstructions": [
                        {"@type": "HowToStep", "text": "Mix."},
                        {"@type": "HowToStep", "text": "Bake."}
                    ],
                    "prepTime": "PT15M",
                    "cookTime": "PT1H",
                    "recipeYield": "8",
                    "aggregateRating": {"ratingValue": "4.666", "ratingCount": 12},
                    "recipeCategory": "Dessert",
                    "recipeCuisine": ["American", "French"],
                    "suitableForDiet": "https://schema.org/VegetarianDiet",
                    "nutrition": {"@type": "NutritionInformation", "calories": "250 kcal"},
                    "tool": [{"@type": "HowToTool", "name": "Oven"}],
                    "keywords": "cake, easy, Cake"
                }
                </script>
            </head>
            <body><a href="/about" class="nav">About</a></body>
            </html>
        "#;

        let fields = parse(html);

        assert_eq!(fields["title"], "Test Recipe");
        assert_eq!(fields["author"], "Jane Doe");
        assert_eq!(fields["description"], "A simple cake & more");
        assert_eq!(fields["image"], "https://example.com/cake.jpg");
        assert_eq!(fields["ingredients"], serde_json::json!(["1 cup flour", "2 eggs"]));
        assert_eq!(
            fields["ingredient_groups"],
            serde_json::json!([{"purpose": null, "ingredients": ["1 cup flour", "2 eggs"]}])
        );
        assert_eq!(fields["instruction_list"], serde_json::json!(["Mix.", "Bake."]));
        assert_eq!(fields["instructions"], "Mix.\nBake.");
        assert_eq!(fields["prep_time"], 15);
        assert_eq!(fields["cook_time"], 60);
        assert_eq!(fields["total_time"], 75);
        assert_eq!(fields["yields"], "8 servings");
        assert_eq!(fields["ratings"], 4.67);
        assert_eq!(fields["ratings_count"], 12.0);
        assert_eq!(fields["category"], "Dessert");
        assert_eq!(fields["cuisine"], "American, French");
        assert_eq!(fields["dietary_restrictions"], serde_json::json!(["Vegetarian"]));
        assert_eq!(fields["nutrients"], serde_json::json!({"calories": "250 kcal"}));
        assert_eq!(fields["equipment"], serde_json::json!(["Oven"]));
        assert_eq!(fields["keywords"], serde_json::json!(["cake", "easy"]));
        assert_eq!(fields["site_name"], "Example Kitchen");
        assert_eq!(fields["canonical_url"], "https://example.com/recipe/test-recipe");
        assert_eq!(fields["language"], "en");
        assert_eq!(fields["host"], "example.com");
        assert_eq!(
            fields["links"],
            serde_json::json!([{"href": "/about", "class": "nav"}])
        );
    }

    #[test]
    fn test_recipe_inside_graph() {
        let html = r#"
            <script type="application/ld+json">
            {"@graph": [
                {"@type": "WebSite", "name": "Example"},
                {"@type": ["Recipe", "Thing"], "name": "Graph Soup",
                 "recipeInstructions": "Chop.\nSimmer.\n"}
            ]}
            </script>
        "#;

        let fields = parse(html);
        assert_eq!(fields["title"], "Graph Soup");
        assert_eq!(fields["instruction_list"], serde_json::json!(["Chop.", "Simmer."]));
        assert!(!fields.contains_key("ingredients"));
    }

    #[test]
    fn test_howto_sections_are_flattened() {
        let html = r#"
            <script type="application/ld+json">
            {"@type": "Recipe", "name": "Layered",
             "recipeInstructions": [
                {"@type": "HowToSection", "name": "Dough",
                 "itemListElement": [{"@type": "HowToStep", "text": "Knead."}]},
                {"@type": "HowToSection", "name": "Filling",
                 "itemListElement": [{"@type": "HowToStep", "text": "Stir."}]}
             ]}
            </script>
        "#;

        let fields = parse(html);
        assert_eq!(fields["instruction_list"], serde_json::json!(["Knead.", "Stir."]));
    }

    #[test]
    fn test_unescaped_newlines_in_jsonld_are_tolerated() {
        let html = "<script type=\"application/ld+json\">{\"@type\": \"Recipe\", \"name\": \"Line\nBreak\"}</script>";
        let fields = parse(html);
        assert_eq!(fields["title"], "Line Break");
    }

    #[test]
    fn test_microdata_fallback() {
        let html = r#"
            <html>
            <head><meta property="og:image" content="https://example.com/og.jpg"></head>
            <body>
                <div itemscope itemtype="https://schema.org/Recipe">
                    <h1 itemprop="name">Microdata Pie</h1>
                    <meta itemprop="prepTime" content="PT20M">
                    <ul>
                        <li itemprop="recipeIngredient">1 crust</li>
                        <li itemprop="recipeIngredient">3 apples</li>
                    </ul>
                    <div itemprop="recipeInstructions">Fill the crust.
                        Bake until golden.</div>
                    <span itemprop="recipeYield">6</span>
                </div>
            </body>
            </html>
        "#;

        let fields = parse(html);
        assert_eq!(fields["title"], "Microdata Pie");
        assert_eq!(fields["ingredients"], serde_json::json!(["1 crust", "3 apples"]));
        assert_eq!(fields["prep_time"], 20);
        assert_eq!(fields["yields"], "6 servings");
        assert_eq!(fields["image"], "https://example.com/og.jpg");
        assert_eq!(
            fields["instruction_list"],
            serde_json::json!(["Fill the crust. Bake until golden."])
        );
    }

    #[test]
    fn test_page_without_recipe_only_has_page_fields() {
        let fields = parse("<html><head><title>Nope</title></head><body></body></html>");

        assert!(!fields.contains_key("title"));
        assert!(!fields.contains_key("links"));
        assert_eq!(fields["canonical_url"], URL);
        assert_eq!(fields["host"], "example.com");
    }

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration_minutes("PT1H30M"), Some(90));
        assert_eq!(parse_duration_minutes("PT45M"), Some(45));
        assert_eq!(parse_duration_minutes("P1DT2H"), Some(1560));
        assert_eq!(parse_duration_minutes("PT90S"), Some(2));
        assert_eq!(parse_duration_minutes("pt0.5h"), Some(30));
        assert_eq!(parse_duration_minutes("25"), Some(25));
        assert_eq!(parse_duration_minutes("PT"), None);
        assert_eq!(parse_duration_minutes("about an hour"), None);
    }

    #[test]
    fn test_yields() {
        assert_eq!(yields(&serde_json::json!(4)), Some("4 servings".to_string()));
        assert_eq!(yields(&serde_json::json!("1")), Some("1 serving".to_string()));
        assert_eq!(
            yields(&serde_json::json!(["12 cookies", "12"])),
            Some("12 cookies".to_string())
        );
        assert_eq!(
            yields(&serde_json::json!("123456789012345678901234")),
            Some("123456789012345678901234".to_string())
        );
    }

    #[test]
    fn test_total_time_falls_back_to_prep_plus_cook() {
        let html = r#"
            <script type="application/ld+json">
            {"@type": "Recipe", "prepTime": "PT15M", "cookTime": "PT1H"}
            </script>
        "#;
        assert_eq!(parse(html)["total_time"], 75);
    }

    #[test]
    fn test_overflowing_total_time_is_left_unset() {
        let html = r#"
            <script type="application/ld+json">
            {"@type": "Recipe", "prepTime": "9223372036854775807", "cookTime": "PT1M"}
            </script>
        "#;

        let fields = parse(html);
        assert_eq!(fields["prep_time"], i64::MAX);
        assert_eq!(fields["cook_time"], 1);
        assert!(!fields.contains_key("total_time"));
    }

    #[test]
    fn test_diet_name() {
        assert_eq!(
            diet_name("https://schema.org/GlutenFreeDiet"),
            Some("Gluten Free".to_string())
        );
        assert_eq!(diet_name("LowCalorieDiet"), Some("Low Calorie".to_string()));
        assert_eq!(diet_name("Vegan"), Some("Vegan".to_string()));
    }
}
