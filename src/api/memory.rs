//! In-memory catalogue for tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::DrinkSource;
use crate::error::{ApiError, ApiResult};
use crate::models::Drink;

#[derive(Default)]
pub struct MemorySource {
    drinks: Vec<Drink>,
    failure: Option<ApiError>,
    calls: AtomicUsize,
}

impl MemorySource {
    pub fn new(drinks: Vec<Drink>) -> Self {
        Self {
            drinks,
            ..Default::default()
        }
    }

    /// Source whose every request fails with `error`
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    /// Number of requests served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl DrinkSource for MemorySource {
    async fn search(&self, term: &str) -> ApiResult<Vec<Drink>> {
        self.check()?;
        let term = term.to_lowercase();
        Ok(self
            .drinks
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn lookup(&self, id: &str) -> ApiResult<Option<Drink>> {
        self.check()?;
        Ok(self.drinks.iter().find(|d| d.id == id).cloned())
    }
}

/// Minimal drink for fixtures
pub fn drink(id: &str, name: &str) -> Drink {
    Drink {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://example.test/{}.jpg", id)),
        category: Some("Cocktail".to_string()),
        instructions: Some(format!("Mix the {} and serve.", name)),
        alcoholic: Some("Alcoholic".to_string()),
        glass: Some("Highball glass".to_string()),
        ingredients: vec![],
    }
}
