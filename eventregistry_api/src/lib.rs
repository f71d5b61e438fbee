mod client;
mod errors;
mod flags;
mod params;
mod query;
pub mod request;
pub mod types;
pub use self::client::{Client, DEFAULT_HOST};
pub use self::errors::{ContractViolation, Error};
pub use self::flags::{ArticleFlags, ConceptFlags, EventFlags, SourceFlags, StoryFlags};
pub use self::params::{ContributesParameters, ParamValue, ParameterMap};
pub use self::query::{
    encode_query, flatten, ArticleQuery, ArticleSelector, ArticlesQuery, Credentials, DateBound,
    EventQuery, EventsQuery, Query, RequestDescriptor, SearchFilter, SearchQuery,
};
pub use self::request::*;
