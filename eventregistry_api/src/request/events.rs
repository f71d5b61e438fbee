//! Result requests over the events matching a search, attached to
//! [`crate::EventsQuery`].

use crate::errors::ContractViolation;
use crate::flags::{impl_flag_builders, ConceptFlags, EventFlags, StoryFlags};
use crate::params::{ContributesParameters, ParameterMap};

use super::check_bound;
use super::options::{
    concept_type_names, default_concept_types, english, ConceptMatrixMeasure, ConceptType,
    EventsSortBy,
};

/// A page of matching events with their details.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsInfo {
    page: u32,
    count: u32,
    sort_by: EventsSortBy,
    sort_by_asc: bool,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    event_flags: EventFlags,
    story_flags: StoryFlags,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventsInfo {
    fn default() -> Self {
        Self {
            page: 0,
            count: 20,
            sort_by: EventsSortBy::Date,
            sort_by_asc: false,
            concept_lang: english(),
            concept_types: default_concept_types(),
            event_flags: EventFlags::default(),
            story_flags: StoryFlags::default(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventsInfo {
    pub const RESULT_TYPE: &'static str = "events";
    pub const MAX_COUNT: u32 = 200;

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    /// Events per page, at most [`Self::MAX_COUNT`].
    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.set_count(count)?;
        Ok(self)
    }

    pub fn with_sort_by(mut self, sort_by: EventsSortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn set_count(&mut self, count: u32) -> Result<(), ContractViolation> {
        self.count = check_bound("eventsCount", count, Self::MAX_COUNT)?;
        Ok(())
    }
}

impl ContributesParameters for RequestEventsInfo {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("eventsPage", self.page);
        params.insert("eventsCount", self.count);
        params.insert("eventsSortBy", self.sort_by.to_string());
        params.insert("eventsSortByAsc", self.sort_by_asc);
        params.insert("eventsConceptLang", self.concept_lang.clone());
        params.insert("eventsConceptType", concept_type_names(&self.concept_types));
        self.event_flags.write_to("events", &mut params);
        self.story_flags.write_to("events", &mut params);
        self.concept_flags.write_to("events", &mut params);
        params
    }
}

/// URIs of all matching events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestEventsUriList;

impl RequestEventsUriList {
    pub const RESULT_TYPE: &'static str = "uriList";
}

impl ContributesParameters for RequestEventsUriList {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Distribution of matching events over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestEventsTimeAggr;

impl RequestEventsTimeAggr {
    pub const RESULT_TYPE: &'static str = "timeAggr";
}

impl ContributesParameters for RequestEventsTimeAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Top keywords of the matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsKeywordAggr {
    lang: String,
}

impl Default for RequestEventsKeywordAggr {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
        }
    }
}

impl RequestEventsKeywordAggr {
    pub const RESULT_TYPE: &'static str = "keywordAggr";

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }
}

impl ContributesParameters for RequestEventsKeywordAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("keywordAggrLang", self.lang.as_str());
        params
    }
}

/// Locations of the matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsLocAggr {
    concept_lang: Vec<String>,
}

impl Default for RequestEventsLocAggr {
    fn default() -> Self {
        Self {
            concept_lang: english(),
        }
    }
}

impl RequestEventsLocAggr {
    pub const RESULT_TYPE: &'static str = "locAggr";

    pub fn with_concept_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concept_lang = super::options::strings(langs);
        self
    }
}

impl ContributesParameters for RequestEventsLocAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("locAggrConceptLang", self.concept_lang.clone());
        params
    }
}

/// Locations of the matching events, bucketed by time.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsLocTimeAggr {
    concept_lang: Vec<String>,
}

impl Default for RequestEventsLocTimeAggr {
    fn default() -> Self {
        Self {
            concept_lang: english(),
        }
    }
}

impl RequestEventsLocTimeAggr {
    pub const RESULT_TYPE: &'static str = "locTimeAggr";

    pub fn with_concept_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concept_lang = super::options::strings(langs);
        self
    }
}

impl ContributesParameters for RequestEventsLocTimeAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("locTimeAggrConceptLang", self.concept_lang.clone());
        params
    }
}

/// Publishers reporting most often about the matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsTopPublisherAggr {
    top_publisher_count: u32,
    include_publisher_details: bool,
}

impl Default for RequestEventsTopPublisherAggr {
    fn default() -> Self {
        Self {
            top_publisher_count: 20,
            include_publisher_details: true,
        }
    }
}

impl RequestEventsTopPublisherAggr {
    pub const RESULT_TYPE: &'static str = "topPublisherAggr";
    pub const MAX_TOP_PUBLISHER_COUNT: u32 = 200;

    pub fn with_top_publisher_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.top_publisher_count = check_bound(
            "topPublisherAggrTopPublisherCount",
            count,
            Self::MAX_TOP_PUBLISHER_COUNT,
        )?;
        Ok(self)
    }

    pub fn with_publisher_details(mut self, include: bool) -> Self {
        self.include_publisher_details = include;
        self
    }
}

impl ContributesParameters for RequestEventsTopPublisherAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("topPublisherAggrTopPublisherCount", self.top_publisher_count);
        params.insert(
            "topPublisherAggrIncludePublisherDetails",
            self.include_publisher_details,
        );
        params
    }
}

/// Concepts appearing most often in the matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsConceptAggr {
    concept_count: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventsConceptAggr {
    fn default() -> Self {
        Self {
            concept_count: 20,
            concept_lang: english(),
            concept_types: default_concept_types(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventsConceptAggr {
    pub const RESULT_TYPE: &'static str = "conceptAggr";
    pub const MAX_CONCEPT_COUNT: u32 = 200;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count = check_bound("conceptAggrConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestEventsConceptAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("conceptAggrConceptType", concept_type_names(&self.concept_types));
        params.insert("conceptAggrConceptCount", self.concept_count);
        params.insert("conceptAggrConceptLang", self.concept_lang.clone());
        self.concept_flags.write_to("conceptAggr", &mut params);
        params
    }
}

/// Graph of concepts linked by co-occurrence in a sample of matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsConceptGraph {
    concept_count: u32,
    link_count: u32,
    sample_size: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventsConceptGraph {
    fn default() -> Self {
        Self {
            concept_count: 25,
            link_count: 50,
            sample_size: 500,
            concept_lang: english(),
            concept_types: default_concept_types(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventsConceptGraph {
    pub const RESULT_TYPE: &'static str = "conceptGraph";
    pub const MAX_CONCEPT_COUNT: u32 = 1000;
    pub const MAX_LINK_COUNT: u32 = 2000;
    pub const MAX_SAMPLE_SIZE: u32 = 20000;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count = check_bound("conceptGraphConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
        Ok(self)
    }

    /// Number of edges in the graph.
    pub fn with_link_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.link_count = check_bound("conceptGraphLinkCount", count, Self::MAX_LINK_COUNT)?;
        Ok(self)
    }

    /// Number of events sampled to build the graph.
    pub fn with_sample_size(mut self, size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("conceptGraphSampleSize", size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestEventsConceptGraph {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("conceptGraphConceptType", concept_type_names(&self.concept_types));
        params.insert("conceptGraphConceptCount", self.concept_count);
        params.insert("conceptGraphConceptLang", self.concept_lang.clone());
        params.insert("conceptGraphLinkCount", self.link_count);
        params.insert("conceptGraphSampleSize", self.sample_size);
        self.concept_flags.write_to("conceptGraph", &mut params);
        params
    }
}

/// Pairwise association matrix of the top concepts in a sample of matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsConceptMatrix {
    concept_count: u32,
    measure: ConceptMatrixMeasure,
    sample_size: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventsConceptMatrix {
    fn default() -> Self {
        Self {
            concept_count: 25,
            measure: ConceptMatrixMeasure::Pmi,
            sample_size: 500,
            concept_lang: english(),
            concept_types: default_concept_types(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventsConceptMatrix {
    pub const RESULT_TYPE: &'static str = "conceptMatrix";
    pub const MAX_CONCEPT_COUNT: u32 = 200;
    pub const MAX_SAMPLE_SIZE: u32 = 10000;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count = check_bound("conceptMatrixConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
        Ok(self)
    }

    pub fn with_sample_size(mut self, size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("conceptMatrixSampleSize", size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }

    pub fn with_measure(mut self, measure: ConceptMatrixMeasure) -> Self {
        self.measure = measure;
        self
    }
}

impl ContributesParameters for RequestEventsConceptMatrix {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("conceptMatrixConceptType", concept_type_names(&self.concept_types));
        params.insert("conceptMatrixConceptCount", self.concept_count);
        params.insert("conceptMatrixConceptLang", self.concept_lang.clone());
        params.insert("conceptMatrixMeasure", self.measure.to_string());
        params.insert("conceptMatrixSampleSize", self.sample_size);
        self.concept_flags.write_to("conceptMatrix", &mut params);
        params
    }
}

/// Top trending concepts and their daily counts.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsConceptTrends {
    concept_count: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventsConceptTrends {
    fn default() -> Self {
        Self {
            concept_count: 10,
            concept_lang: english(),
            concept_types: default_concept_types(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventsConceptTrends {
    pub const RESULT_TYPE: &'static str = "conceptTrends";
    pub const MAX_CONCEPT_COUNT: u32 = 50;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count =
            check_bound("trendingConceptsConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestEventsConceptTrends {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("trendingConceptsConceptType", concept_type_names(&self.concept_types));
        params.insert("trendingConceptsConceptCount", self.concept_count);
        params.insert("trendingConceptsConceptLang", self.concept_lang.clone());
        self.concept_flags.write_to("conceptTrends", &mut params);
        params
    }
}

/// Events paired with the dates they mention.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsDateMentionAggr {
    min_days_apart: u32,
    min_date_mention_count: u32,
}

impl Default for RequestEventsDateMentionAggr {
    fn default() -> Self {
        Self {
            min_days_apart: 0,
            min_date_mention_count: 5,
        }
    }
}

impl RequestEventsDateMentionAggr {
    pub const RESULT_TYPE: &'static str = "dateMentionAggr";

    /// Only report mentioned dates at least this many days from the event date.
    pub fn with_min_days_apart(mut self, days: u32) -> Self {
        self.min_days_apart = days;
        self
    }

    /// Only report dates mentioned at least this many times.
    pub fn with_min_date_mention_count(mut self, count: u32) -> Self {
        self.min_date_mention_count = count;
        self
    }
}

impl ContributesParameters for RequestEventsDateMentionAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("dateMentionAggrMinDateMentionCount", self.min_date_mention_count);
        params.insert("dateMentionAggrMinDaysApart", self.min_days_apart);
        params
    }
}

/// Hierarchical clustering of the matching events.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsEventClusters {
    keyword_count: u32,
    max_events_to_cluster: u32,
    concept_lang: Vec<String>,
}

impl Default for RequestEventsEventClusters {
    fn default() -> Self {
        Self {
            keyword_count: 30,
            max_events_to_cluster: 10000,
            concept_lang: english(),
        }
    }
}

impl RequestEventsEventClusters {
    pub const RESULT_TYPE: &'static str = "eventClusters";
    pub const MAX_KEYWORD_COUNT: u32 = 100;
    pub const MAX_EVENTS_TO_CLUSTER: u32 = 10000;

    /// Keywords used to label each cluster.
    pub fn with_keyword_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.keyword_count = check_bound("eventClustersKeywordCount", count, Self::MAX_KEYWORD_COUNT)?;
        Ok(self)
    }

    pub fn with_max_events_to_cluster(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.max_events_to_cluster = check_bound(
            "eventClustersMaxEventsToCluster",
            count,
            Self::MAX_EVENTS_TO_CLUSTER,
        )?;
        Ok(self)
    }

    pub fn with_concept_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concept_lang = super::options::strings(langs);
        self
    }
}

impl ContributesParameters for RequestEventsEventClusters {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("eventClustersKeywordCount", self.keyword_count);
        params.insert("eventClustersConceptLang", self.concept_lang.clone());
        params.insert("eventClustersMaxEventsToCluster", self.max_events_to_cluster);
        params
    }
}

/// Distribution of matching events over categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestEventsCategoryAggr;

impl RequestEventsCategoryAggr {
    pub const RESULT_TYPE: &'static str = "categoryAggr";
}

impl ContributesParameters for RequestEventsCategoryAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Events that changed recently.
///
/// Polling is incremental: pass the `lastEventActivityId` from the previous
/// response to [`Self::with_last_event_activity_id`] to receive only newer
/// activity.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventsRecentActivity {
    max_event_count: u32,
    max_mins_back: u32,
    last_event_activity_id: i64,
    lang: String,
    events_with_location_only: bool,
    events_with_lang_only: bool,
    min_avg_cos_sim: f64,
    event_flags: EventFlags,
    story_flags: StoryFlags,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventsRecentActivity {
    fn default() -> Self {
        Self {
            max_event_count: 60,
            max_mins_back: 10 * 60,
            last_event_activity_id: 0,
            lang: "eng".to_string(),
            events_with_location_only: true,
            events_with_lang_only: false,
            min_avg_cos_sim: 0.0,
            event_flags: EventFlags::default(),
            story_flags: StoryFlags::default(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventsRecentActivity {
    pub const RESULT_TYPE: &'static str = "recentActivity";
    pub const MAX_EVENT_COUNT: u32 = 1000;

    pub fn with_max_event_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.max_event_count = check_bound(
            "eventsRecentActivityMaxEventCount",
            count,
            Self::MAX_EVENT_COUNT,
        )?;
        Ok(self)
    }

    /// How far back, in minutes, to look for activity.
    pub fn with_max_mins_back(mut self, mins: u32) -> Self {
        self.max_mins_back = mins;
        self
    }

    pub fn with_last_event_activity_id(mut self, id: i64) -> Self {
        self.last_event_activity_id = id;
        self
    }

    /// Language of the returned event titles.
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn with_location_only(mut self, only: bool) -> Self {
        self.events_with_location_only = only;
        self
    }

    /// Only events with at least one story in the title language.
    pub fn with_lang_only(mut self, only: bool) -> Self {
        self.events_with_lang_only = only;
        self
    }

    /// Minimum average cosine similarity of an event's articles, 0 to 1.
    pub fn with_min_avg_cos_sim(mut self, min: f64) -> Self {
        self.min_avg_cos_sim = min;
        self
    }
}

impl ContributesParameters for RequestEventsRecentActivity {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("eventsRecentActivityMaxEventCount", self.max_event_count);
        params.insert("eventsRecentActivityMaxMinsBack", self.max_mins_back);
        params.insert(
            "eventsRecentActivityLastEventActivityId",
            self.last_event_activity_id,
        );
        params.insert("eventsRecentActivityEventLang", self.lang.as_str());
        params.insert(
            "eventsRecentActivityEventsWithLocationOnly",
            self.events_with_location_only,
        );
        params.insert(
            "eventsRecentActivityEventsWithLangOnly",
            self.events_with_lang_only,
        );
        params.insert("eventsRecentActivityMinAvgCosSim", self.min_avg_cos_sim);
        self.event_flags.write_to("events", &mut params);
        self.story_flags.write_to("events", &mut params);
        self.concept_flags.write_to("events", &mut params);
        params
    }
}

impl_concept_options!(
    RequestEventsInfo,
    RequestEventsConceptAggr,
    RequestEventsConceptGraph,
    RequestEventsConceptMatrix,
    RequestEventsConceptTrends,
);

impl_flag_builders!(RequestEventsInfo {
    with_event_flags => event_flags: EventFlags,
    with_story_flags => story_flags: StoryFlags,
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventsConceptAggr {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventsConceptGraph {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventsConceptMatrix {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventsConceptTrends {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventsRecentActivity {
    with_event_flags => event_flags: EventFlags,
    with_story_flags => story_flags: StoryFlags,
    with_concept_flags => concept_flags: ConceptFlags,
});
