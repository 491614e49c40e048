//! Locale catalog fetching.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! static catalog documents. Server-side (SSR): stubs returning `None`;
//! lookups fall back to keys until the browser takes over.

#![allow(clippy::unused_async)]

use appearance::lang::{Catalog, Language};

/// Fetch one language's catalog from `/assets/locales/{code}.json`.
/// Returns `None` on the server or when the fetch or parse fails.
pub async fn fetch_catalog(language: Language) -> Option<Catalog> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/assets/locales/{}.json", language.code());
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            log::warn!("catalog request for {} returned {}", language.code(), resp.status());
            return None;
        }
        let text = resp.text().await.ok()?;
        match Catalog::from_json(&text) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                log::warn!("catalog for {} is malformed: {err}", language.code());
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
        None
    }
}

/// Preload every language's catalog concurrently. Languages that fail to
/// load are simply absent and fall back to English at lookup time.
pub async fn preload_all() -> Vec<(Language, Catalog)> {
    #[cfg(feature = "hydrate")]
    {
        let fetches = Language::ALL.map(|language| async move {
            fetch_catalog(language).await.map(|catalog| (language, catalog))
        });
        futures::future::join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
