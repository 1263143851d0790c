//! Drink Source
//!
//! Abstract access to the recipe catalogue. The browser build talks to
//! TheCocktailDB over `fetch`; tests use an in-memory catalogue.

mod cocktail_db;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::Drink;

pub use cocktail_db::CocktailDb;

/// Read-only recipe catalogue
///
/// Futures are not `Send`: they run on the browser event loop.
#[async_trait(?Send)]
pub trait DrinkSource: Send + Sync {
    /// Drinks whose name matches `term`; empty when nothing matches
    async fn search(&self, term: &str) -> ApiResult<Vec<Drink>>;

    /// Full record for one identifier, `None` when unknown
    async fn lookup(&self, id: &str) -> ApiResult<Option<Drink>>;
}
