//! Built-in tools shipped with the framework.

pub mod recipe_search;

pub use recipe_search::{ExaSearchClient, RecipeSearchTool};
