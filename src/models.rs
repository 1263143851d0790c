//! Frontend Models
//!
//! Drink records as returned by TheCocktailDB, and the card view derived
//! from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The API numbers ingredient/measure slots 1 through 15
const INGREDIENT_SLOTS: usize = 15;

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

/// A drink/recipe record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub instructions: Option<String>,
    pub alcoholic: Option<String>,
    pub glass: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Drink {
    /// First listed ingredient, if any
    pub fn main_ingredient(&self) -> Option<&str> {
        self.ingredients.first().map(|i| i.name.as_str())
    }
}

/// Render-time view of a drink in the results grid
#[derive(Debug, Clone, PartialEq)]
pub struct DrinkCard {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub excerpt: String,
    /// Whether the name is already in the group
    pub in_group: bool,
}

impl DrinkCard {
    pub fn new(drink: &Drink, excerpt_chars: usize, in_group: bool) -> Self {
        Self {
            id: drink.id.clone(),
            name: drink.name.clone(),
            thumbnail: drink.thumbnail.clone().unwrap_or_default(),
            category: drink
                .category
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string()),
            excerpt: excerpt(drink.instructions.as_deref(), excerpt_chars),
            in_group,
        }
    }
}

/// First `chars` characters of the instructions followed by an ellipsis
pub fn excerpt(instructions: Option<&str>, chars: usize) -> String {
    let text = instructions
        .filter(|s| !s.is_empty())
        .unwrap_or("No instructions available");
    let head: String = text.chars().take(chars).collect();
    format!("{}...", head)
}

// ========================
// Wire Format
// ========================

/// Body of both `search.php` and `lookup.php`
#[derive(Debug, Deserialize)]
pub struct DrinksEnvelope {
    #[serde(default)]
    pub drinks: Option<Vec<RawDrink>>,
}

impl DrinksEnvelope {
    pub fn into_drinks(self) -> Vec<Drink> {
        self.drinks
            .unwrap_or_default()
            .into_iter()
            .map(Drink::from)
            .collect()
    }
}

/// Drink as the API spells it
#[derive(Debug, Deserialize)]
pub struct RawDrink {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    /// Numbered ingredient/measure slots and everything else
    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_json::Value>,
}

impl RawDrink {
    fn slot(&self, prefix: &str, n: usize) -> Option<String> {
        self.rest
            .get(&format!("{}{}", prefix, n))
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|n| {
                self.slot("strIngredient", n).map(|name| Ingredient {
                    name,
                    measure: self.slot("strMeasure", n),
                })
            })
            .collect()
    }
}

impl From<RawDrink> for Drink {
    fn from(raw: RawDrink) -> Self {
        let ingredients = raw.ingredients();
        Self {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail,
            category: raw.category,
            instructions: raw.instructions,
            alcoholic: raw.alcoholic,
            glass: raw.glass,
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_with_null_drinks() {
        let envelope: DrinksEnvelope = serde_json::from_value(json!({ "drinks": null })).unwrap();
        assert!(envelope.into_drinks().is_empty());

        let envelope: DrinksEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.into_drinks().is_empty());
    }

    #[test]
    fn test_envelope_rejects_unexpected_shape() {
        let parsed = serde_json::from_value::<DrinksEnvelope>(json!({ "drinks": "no data found" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_raw_drink_ingredients() {
        let envelope: DrinksEnvelope = serde_json::from_value(json!({
            "drinks": [{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strDrinkThumb": "https://example.test/margarita.jpg",
                "strCategory": "Ordinary Drink",
                "strAlcoholic": "Alcoholic",
                "strGlass": "Cocktail glass",
                "strInstructions": "Rub the rim of the glass with the lime slice.",
                "strIngredient1": "Tequila",
                "strMeasure1": "1 1/2 oz ",
                "strIngredient2": "Triple sec",
                "strMeasure2": null,
                "strIngredient3": "",
                "strIngredient4": null,
                "strIngredient5": "Salt",
                "dateModified": "2015-08-18 14:42:59"
            }]
        }))
        .unwrap();

        let drinks = envelope.into_drinks();
        assert_eq!(drinks.len(), 1);
        let drink = &drinks[0];
        assert_eq!(drink.name, "Margarita");
        assert_eq!(drink.main_ingredient(), Some("Tequila"));
        assert_eq!(
            drink.ingredients,
            vec![
                Ingredient { name: "Tequila".into(), measure: Some("1 1/2 oz".into()) },
                Ingredient { name: "Triple sec".into(), measure: None },
                Ingredient { name: "Salt".into(), measure: None },
            ]
        );
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt(Some("Shake with ice and strain."), 15), "Shake with ice ...");
        assert_eq!(excerpt(None, 15), "No instructions...");
        assert_eq!(excerpt(Some(""), 15), "No instructions...");
        assert_eq!(excerpt(Some("Stir"), 15), "Stir...");
        // multi-byte characters are not split
        assert_eq!(excerpt(Some("Café crème à la"), 4), "Café...");
    }

    #[test]
    fn test_card_defaults() {
        let drink = Drink {
            id: "1".into(),
            name: "Mystery".into(),
            thumbnail: None,
            category: None,
            instructions: None,
            alcoholic: None,
            glass: None,
            ingredients: vec![],
        };
        let card = DrinkCard::new(&drink, 15, true);
        assert_eq!(card.category, "Uncategorized");
        assert_eq!(card.thumbnail, "");
        assert!(card.in_group);
        assert_eq!(drink.main_ingredient(), None);
    }
}
