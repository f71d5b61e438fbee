mod common;
pub use self::common::{DateBound, Query, SearchFilter, SearchQuery};

mod encode;
pub use self::encode::{encode_query, flatten, Credentials, RequestDescriptor};

mod events;
pub use self::events::EventsQuery;

mod event;
pub use self::event::EventQuery;

mod articles;
pub use self::articles::ArticlesQuery;

mod article;
pub use self::article::{ArticleQuery, ArticleSelector};
