//! Session layer for Event Registry: rate limiting, retries, login,
//! settings, and the convenience calls built on the query API.
//!
//! Wraps the `eventregistry_api` crate, whose queries and result requests
//! are re-exported here.

pub mod client;
pub mod error;
pub mod rate_limiter;
pub mod recent;
pub mod retry;
pub mod settings;
pub mod suggest;
pub mod text;

pub use eventregistry_api;
pub use eventregistry_api::request;
pub use eventregistry_api::types;
pub use eventregistry_api::{
    ArticleFlags, ArticleQuery, ArticlesQuery, ConceptFlags, ContractViolation, Credentials,
    DateBound, EventFlags, EventQuery, EventsQuery, ParameterMap, Query, SearchQuery, SourceFlags,
    StoryFlags,
};

pub use client::EventRegistry;
pub use error::EventRegistryError;
pub use rate_limiter::RateLimiter;
pub use recent::{RecentArticles, RecentEvents};
pub use retry::{Attempts, RetryPolicy};
pub use settings::Settings;
pub use suggest::{
    CategorySuggest, ConceptClassSuggest, ConceptSuggest, LocationSuggest, SourceSuggest,
};
pub use text::remove_invalid_chars;
