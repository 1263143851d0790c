//! TheCocktailDB Client
//!
//! `search.php` and `lookup.php` over the browser `fetch` API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::DrinkSource;
use crate::error::{ApiError, ApiResult};
use crate::models::{Drink, DrinksEnvelope};

/// Characters left unescaped in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone)]
pub struct CocktailDb {
    base: String,
}

impl CocktailDb {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn search_url(&self, term: &str) -> String {
        self.endpoint("search.php", "s", term)
    }

    pub fn lookup_url(&self, id: &str) -> String {
        self.endpoint("lookup.php", "i", id)
    }

    fn endpoint(&self, path: &str, key: &str, value: &str) -> String {
        format!(
            "{}/{}?{}={}",
            self.base.trim_end_matches('/'),
            path,
            key,
            utf8_percent_encode(value, QUERY_VALUE)
        )
    }
}

#[async_trait(?Send)]
impl DrinkSource for CocktailDb {
    async fn search(&self, term: &str) -> ApiResult<Vec<Drink>> {
        let envelope = fetch_envelope(&self.search_url(term)).await?;
        Ok(envelope.into_drinks())
    }

    async fn lookup(&self, id: &str) -> ApiResult<Option<Drink>> {
        let envelope = fetch_envelope(&self.lookup_url(id)).await?;
        Ok(envelope.into_drinks().into_iter().next())
    }
}

/// GET `url` and decode the `{"drinks": ...}` body
async fn fetch_envelope(url: &str) -> ApiResult<DrinksEnvelope> {
    log::debug!("GET {}", url);
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ApiError::network(&e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Malformed("fetch did not resolve to a Response".to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body = response
        .json()
        .map_err(|e| ApiError::Malformed(format!("{:?}", e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ApiError::Malformed(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
}
