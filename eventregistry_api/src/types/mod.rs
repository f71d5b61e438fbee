mod meta;
pub use self::meta::{LoginResponse, ResultPage};

mod event;
pub use self::event::{Event, EventsResponse, LocationInfo};

mod article;
pub use self::article::{Article, ArticlesResponse, SourceInfo};

mod suggest;
pub use self::suggest::Suggestion;
