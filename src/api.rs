//! FruityVice API client with in-memory caching.
//!
//! This module provides a [`FruitApi`] client for querying the public
//! FruityVice fruit API. It composes the lookup cache, the reserved keyword
//! guard, the transport and the payload decoder behind three calls.
//!
//! # Features
//!
//! - **Fast repeat lookups**: Resolved fruits are cached for the lifetime of the client
//! - **Single flight**: Concurrent lookups of the same uncached name share one request
//! - **No wasted requests**: Names that collide with API routes (`all`, `sugar`, ...) fail fast
//! - **Error handling**: Distinguishes missing fruits from an unavailable server
//! - **Timeout protection**: 10-second default timeout per request
//!
//! # Failure model
//!
//! [`FruitApi::fetch_fruit`] reports every failure as a [`LookupError`] so callers
//! can print "not in database" and move on. The list calls
//! ([`FruitApi::fetch_all`], [`FruitApi::fetch_family`]) degrade to an empty list
//! instead: an unknown family or a flaky server simply means no results.
//!
//! # Examples
//!
//! ```no_run
//! use fruity_lookup::FruitApi;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = FruitApi::new()?;
//!
//!     match api.fetch_fruit("apple").await {
//!         Ok(apple) => println!("{apple}"),
//!         Err(e) if e.is_not_found() => println!("apple not in FruityVice database"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//!
//!     let roses = api.fetch_family("Rosaceae").await;
//!     println!("Found {} fruits in Rosaceae", roses.len());
//!
//!     Ok(())
//! }
//! ```

use crate::cache::LookupCache;
use crate::config::Config;
use crate::decode;
use crate::error::{LookupError, Result};
use crate::fruit::Fruit;
use crate::keywords::is_reserved_keyword;
use crate::transport::{HttpTransport, Transport, TransportError};

/// FruityVice API client with in-memory caching
#[derive(Clone)]
pub struct FruitApi<T = HttpTransport> {
    transport: T,
    cache: LookupCache,
}

impl FruitApi<HttpTransport> {
    /// Create a client from `FRUITY_API_URL` / `FRUITY_TIMEOUT_SECS`, falling
    /// back to the public API and a 10 second timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fruity_lookup::FruitApi;
    ///
    /// let api = FruitApi::new().expect("valid configuration");
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::from_env()?)
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> FruitApi<T> {
    /// Create a client over any [`Transport`], with an empty cache.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            cache: LookupCache::new(),
        }
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    /// Fetch a single fruit by name (with in-memory caching).
    ///
    /// The name is used verbatim as both cache key and path segment.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] if FruityVice answers 404, returns an empty
    ///   body, or `name` is blank or a reserved route such as `all` or `sugar`
    ///   (no request is made for those)
    /// - [`LookupError::ServerUnavailable`] on a 5xx, a timeout or any other
    ///   transport failure
    /// - [`LookupError::MalformedPayload`] if a successful response cannot be
    ///   decoded into a fruit
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fruity_lookup::FruitApi;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let api = FruitApi::new()?;
    ///     let banana = api.fetch_fruit("banana").await?;
    ///
    ///     println!("Family: {}", banana.family);
    ///     println!("Sugar: {}g", banana.nutrition.sugar);
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_fruit(&self, name: &str) -> std::result::Result<Fruit, LookupError> {
        // Check cache first
        if let Some(cached) = self.cache.get(name).await {
            tracing::debug!(name, "cache hit");
            return Ok(cached);
        }

        if name.trim().is_empty() || is_reserved_keyword(name) {
            tracing::debug!(name, "refusing to look up reserved or blank name");
            return Err(LookupError::NotFound(name.to_string()));
        }

        tracing::debug!(name, "cache miss");
        self.cache
            .get_or_try_insert_with(name, self.request_fruit(name))
            .await
    }

    /// Look up several fruits concurrently. Results keep the input order.
    pub async fn lookup_many<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Vec<(String, std::result::Result<Fruit, LookupError>)> {
        let lookups = names.iter().map(|name| async move {
            let name = name.as_ref();
            (name.to_string(), self.fetch_fruit(name).await)
        });
        futures::future::join_all(lookups).await
    }

    /// Fetch every fruit in the FruityVice catalog.
    ///
    /// Not cached. Any failure is logged and yields an empty list.
    pub async fn fetch_all(&self) -> Vec<Fruit> {
        self.request_fruits(&["all"]).await
    }

    /// Fetch every fruit belonging to `family`.
    ///
    /// An unknown family, a server fault or an undecodable body all yield an
    /// empty list.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fruity_lookup::FruitApi;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let api = FruitApi::new()?;
    ///     for fruit in api.fetch_family("Rutaceae").await {
    ///         println!("{} ({})", fruit.name, fruit.genus);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_family(&self, family: &str) -> Vec<Fruit> {
        if family.trim().is_empty() {
            return Vec::new();
        }
        self.request_fruits(&["family", family]).await
    }

    async fn request_fruit(&self, name: &str) -> std::result::Result<Fruit, LookupError> {
        let body = self
            .transport
            .get(&[name])
            .await
            .map_err(|e| classify(name, e))?;

        match decode::fruit(&body) {
            Ok(Some(fruit)) => Ok(fruit),
            Ok(None) => Err(LookupError::NotFound(name.to_string())),
            Err(e) => {
                tracing::debug!(name, error = %e, "undecodable fruit payload");
                Err(LookupError::MalformedPayload(e.to_string()))
            }
        }
    }

    async fn request_fruits(&self, segments: &[&str]) -> Vec<Fruit> {
        let body = match self.transport.get(segments).await {
            Ok(body) => body,
            Err(e) if e.status == Some(404) => {
                tracing::debug!(path = %segments.join("/"), "no fruits found");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %segments.join("/"), error = %e, "FruityVice request failed");
                return Vec::new();
            }
        };

        decode::fruits(&body).unwrap_or_else(|e| {
            tracing::warn!(path = %segments.join("/"), error = %e, "undecodable fruit list");
            Vec::new()
        })
    }
}

/// Map a transport failure on a single-fruit request to a lookup outcome.
fn classify(name: &str, err: TransportError) -> LookupError {
    match err.status {
        // FruityVice answers 404 for fruits it does not know
        Some(404) => LookupError::NotFound(name.to_string()),
        Some(status) if (500..600).contains(&status) => {
            LookupError::ServerUnavailable { status: Some(status) }
        }
        status => {
            tracing::debug!(name, error = %err, "unclassified transport failure");
            LookupError::ServerUnavailable { status }
        }
    }
}
