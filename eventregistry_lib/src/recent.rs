//! Parameters for the `/json/overview` recent-activity calls.
//!
//! Both calls are cursor-paged: pass the `lastActivityId` from the previous
//! response back as `last_activity_id` to receive only newer items.

use eventregistry_api::request::check_bound;
use eventregistry_api::{
    ArticleFlags, ConceptFlags, ContractViolation, ContributesParameters, EventFlags,
    ParameterMap, SourceFlags, StoryFlags,
};

pub const OVERVIEW_PATH: &str = "/json/overview";

/// Recently added or updated events.
#[derive(Clone, Debug, PartialEq)]
pub struct RecentEvents {
    max_event_count: u32,
    pub max_mins_back: u32,
    /// Only events with at least one story in this language.
    pub mandatory_lang: Option<String>,
    /// Only events with a known location.
    pub mandatory_location: bool,
    pub last_activity_id: i64,
    pub event_flags: EventFlags,
    pub story_flags: StoryFlags,
    pub concept_flags: ConceptFlags,
}

impl Default for RecentEvents {
    fn default() -> Self {
        Self {
            max_event_count: 60,
            max_mins_back: 10 * 60,
            mandatory_lang: None,
            mandatory_location: true,
            last_activity_id: 0,
            event_flags: EventFlags::default(),
            story_flags: StoryFlags::default(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RecentEvents {
    pub const MAX_EVENT_COUNT: u32 = 1000;

    pub fn max_event_count(&self) -> u32 {
        self.max_event_count
    }

    pub fn with_max_event_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.max_event_count = check_bound(
            "recentActivityEventsMaxEventCount",
            count,
            Self::MAX_EVENT_COUNT,
        )?;
        Ok(self)
    }
}

impl ContributesParameters for RecentEvents {
    fn to_parameter_map(&self) -> ParameterMap {
        let prefix = "recentActivityEvents";
        let mut params = ParameterMap::new();
        params.insert("action", "getRecentActivity");
        params.insert("addEvents", true);
        params.insert("addArticles", false);
        params.insert("recentActivityEventsMaxEventCount", self.max_event_count);
        params.insert("recentActivityEventsMaxMinsBack", self.max_mins_back);
        params.insert("recentActivityEventsMandatoryLocation", self.mandatory_location);
        params.insert("recentActivityEventsLastActivityId", self.last_activity_id);
        if let Some(lang) = &self.mandatory_lang {
            params.insert("recentActivityEventsMandatoryLang", lang.as_str());
        }
        self.event_flags.write_to(prefix, &mut params);
        self.story_flags.write_to(prefix, &mut params);
        self.concept_flags.write_to(prefix, &mut params);
        params
    }
}

/// Recently added articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RecentArticles {
    max_article_count: u32,
    pub max_mins_back: u32,
    /// Only articles from sources with a known location.
    pub mandatory_source_location: bool,
    pub last_activity_id: i64,
    pub article_flags: ArticleFlags,
    pub source_flags: SourceFlags,
}

impl Default for RecentArticles {
    fn default() -> Self {
        Self {
            max_article_count: 60,
            max_mins_back: 10 * 60,
            mandatory_source_location: true,
            last_activity_id: 0,
            article_flags: ArticleFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RecentArticles {
    pub const MAX_ARTICLE_COUNT: u32 = 1000;

    pub fn max_article_count(&self) -> u32 {
        self.max_article_count
    }

    pub fn with_max_article_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.max_article_count = check_bound(
            "recentActivityArticlesMaxArticleCount",
            count,
            Self::MAX_ARTICLE_COUNT,
        )?;
        Ok(self)
    }
}

impl ContributesParameters for RecentArticles {
    fn to_parameter_map(&self) -> ParameterMap {
        let prefix = "recentActivityArticles";
        let mut params = ParameterMap::new();
        params.insert("action", "getRecentActivity");
        params.insert("addEvents", false);
        params.insert("addArticles", true);
        params.insert("recentActivityArticlesMaxMinsBack", self.max_mins_back);
        params.insert("recentActivityArticlesMaxArticleCount", self.max_article_count);
        params.insert(
            "recentActivityArticlesMandatorySourceLocation",
            self.mandatory_source_location,
        );
        params.insert("recentActivityArticlesLastActivityId", self.last_activity_id);
        self.article_flags.write_to(prefix, &mut params);
        self.source_flags.write_to(prefix, &mut params);
        params
    }
}
