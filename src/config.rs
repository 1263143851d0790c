//! Application Configuration
//!
//! Compile-time settings gathered in one place and provided via context.
//! The page has no environment or file configuration.

/// TheCocktailDB public v1 endpoint (test key `1`)
pub const API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Maximum number of drinks in the group
pub const MAX_GROUP_SIZE: usize = 7;

/// Term searched on load and when refreshing before any search was submitted
pub const DEFAULT_TERM: &str = "cocktail";

/// Number of instruction characters shown on a card
pub const EXCERPT_CHARS: usize = 15;

/// How long a notice stays visible
pub const NOTICE_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub max_group_size: usize,
    pub default_term: String,
    pub excerpt_chars: usize,
    pub notice_ms: u32,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            max_group_size: MAX_GROUP_SIZE,
            default_term: DEFAULT_TERM.to_string(),
            excerpt_chars: EXCERPT_CHARS,
            notice_ms: NOTICE_MS,
            log_level: log::LevelFilter::Info,
        }
    }
}
