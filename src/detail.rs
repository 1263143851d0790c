//! Drink Details
//!
//! Lazy lookup of one drink for the detail overlay.

use crate::api::DrinkSource;
use crate::models::Drink;

/// Fetch the full record for `id`.
///
/// Unknown ids and failed requests both yield `None`; they are logged and
/// otherwise ignored so the overlay simply stays closed.
pub async fn load(source: &dyn DrinkSource, id: &str) -> Option<Drink> {
    match source.lookup(id).await {
        Ok(Some(drink)) => Some(drink),
        Ok(None) => {
            log::info!("lookup for drink {} returned nothing", id);
            None
        }
        Err(err) => {
            log::warn!("Error fetching drink details for {}: {}", id, err);
            None
        }
    }
}

/// Label/value pairs shown in the overlay's description list
pub fn rows(drink: &Drink) -> Vec<(&'static str, String)> {
    let or_blank = |v: &Option<String>| v.clone().unwrap_or_default();
    vec![
        ("Category", or_blank(&drink.category)),
        ("Type", or_blank(&drink.alcoholic)),
        ("Glass", or_blank(&drink.glass)),
        (
            "Main Ingredient",
            drink.main_ingredient().unwrap_or("Not specified").to_string(),
        ),
        ("Instructions", or_blank(&drink.instructions)),
    ]
}

/// One ingredient line, e.g. `1 1/2 oz Tequila`
pub fn ingredient_line(name: &str, measure: Option<&str>) -> String {
    match measure {
        Some(m) => format!("{} {}", m, name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::{drink, MemorySource};
    use crate::error::ApiError;
    use crate::models::Ingredient;

    #[tokio::test]
    async fn test_unknown_id_is_noop() {
        let source = MemorySource::new(vec![drink("11007", "Margarita")]);
        assert_eq!(load(&source, "99999").await, None);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_swallowed() {
        let source = MemorySource::failing(ApiError::Network("offline".into()));
        assert_eq!(load(&source, "11007").await, None);
    }

    #[tokio::test]
    async fn test_known_id_loads() {
        let source = MemorySource::new(vec![drink("11007", "Margarita"), drink("11000", "Mojito")]);
        let found = load(&source, "11000").await.unwrap();
        assert_eq!(found.name, "Mojito");
    }

    #[test]
    fn test_rows_fallbacks() {
        let mut margarita = drink("11007", "Margarita");
        assert_eq!(rows(&margarita)[3], ("Main Ingredient", "Not specified".to_string()));

        margarita.ingredients = vec![Ingredient { name: "Tequila".into(), measure: Some("1 1/2 oz".into()) }];
        let rows = rows(&margarita);
        assert_eq!(rows[1], ("Type", "Alcoholic".to_string()));
        assert_eq!(rows[3], ("Main Ingredient", "Tequila".to_string()));
    }

    #[test]
    fn test_ingredient_line() {
        assert_eq!(ingredient_line("Tequila", Some("1 1/2 oz")), "1 1/2 oz Tequila");
        assert_eq!(ingredient_line("Salt", None), "Salt");
    }
}
