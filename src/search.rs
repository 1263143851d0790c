//! Drink Search
//!
//! Maps one search request onto the results area state, and decides which
//! responses are still worth showing.

use crate::api::DrinkSource;
use crate::group::Group;
use crate::models::{Drink, DrinkCard};

/// What the results area currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchView {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The request or its body failed
    Failed,
    /// The API answered with no drinks
    NotFound,
    Results(Vec<Drink>),
}

impl SearchView {
    pub fn drinks(&self) -> &[Drink] {
        match self {
            SearchView::Results(drinks) => drinks,
            _ => &[],
        }
    }
}

/// Ticket handed out per search request
pub type Ticket = u64;

/// Latest-request-wins guard for overlapping searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: Ticket,
}

impl RequestTracker {
    /// Start a new request, superseding all earlier ones
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket == self.latest
    }
}

/// Trim user input; blank input means "do not search"
pub fn normalize_term(input: &str) -> Option<String> {
    let term = input.trim();
    (!term.is_empty()).then(|| term.to_string())
}

/// Term used to re-run the search after the group changes
pub fn refresh_term<'a>(last_term: Option<&'a str>, default_term: &'a str) -> &'a str {
    last_term.filter(|t| !t.is_empty()).unwrap_or(default_term)
}

/// Run one search against `source`. Never fails: errors become `Failed`.
pub async fn run(source: &dyn DrinkSource, term: &str) -> SearchView {
    match source.search(term).await {
        Ok(drinks) if drinks.is_empty() => {
            log::info!("no drinks found for {:?}", term);
            SearchView::NotFound
        }
        Ok(drinks) => {
            log::debug!("{} drinks found for {:?}", drinks.len(), term);
            SearchView::Results(drinks)
        }
        Err(err) => {
            log::error!("Error fetching drinks for {:?}: {}", term, err);
            SearchView::Failed
        }
    }
}

/// Cards for the current results, flagged against the group as it is now
pub fn cards(drinks: &[Drink], group: &Group, excerpt_chars: usize) -> Vec<DrinkCard> {
    drinks
        .iter()
        .map(|drink| DrinkCard::new(drink, excerpt_chars, group.contains(&drink.name)))
        .collect()
}
