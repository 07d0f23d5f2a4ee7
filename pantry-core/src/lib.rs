pub mod error;
pub mod extract;
pub mod http;
pub mod normalize;
pub mod scrape;
pub mod types;

pub use error::FetchError;
pub use extract::{RecipeParser, SchemaOrgParser};
pub use http::{
    HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder, USER_AGENT,
};
pub use normalize::normalize;
pub use scrape::Scraper;
pub use types::{IngredientGroup, ParsedRecipe, RawRecipeFields};
