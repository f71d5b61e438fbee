//! Result requests over the articles matching a search, attached to
//! [`crate::ArticlesQuery`].

use crate::errors::ContractViolation;
use crate::flags::{impl_flag_builders, ArticleFlags, ConceptFlags, SourceFlags};
use crate::params::{ContributesParameters, ParameterMap};

use super::check_bound;
use super::options::{
    concept_type_names, default_concept_types, english, ArticleSortBy, ConceptMatrixMeasure,
    ConceptType,
};

/// A page of matching articles with their details.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesInfo {
    page: u32,
    count: u32,
    sort_by: ArticleSortBy,
    sort_by_asc: bool,
    body_len: i32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestArticlesInfo {
    fn default() -> Self {
        Self {
            page: 0,
            count: 20,
            sort_by: ArticleSortBy::Date,
            sort_by_asc: false,
            body_len: 300,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestArticlesInfo {
    pub const RESULT_TYPE: &'static str = "articles";
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

    /// Articles per page, at most [`Self::MAX_COUNT`].
    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.set_count(count)?;
        Ok(self)
    }

    pub fn with_sort_by(mut self, sort_by: ArticleSortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }

    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn set_count(&mut self, count: u32) -> Result<(), ContractViolation> {
        self.count = check_bound("articlesCount", count, Self::MAX_COUNT)?;
        Ok(())
    }
}

impl ContributesParameters for RequestArticlesInfo {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("articlesPage", self.page);
        params.insert("articlesCount", self.count);
        params.insert("articlesSortBy", self.sort_by.to_string());
        params.insert("articlesSortByAsc", self.sort_by_asc);
        params.insert("articlesBodyLen", self.body_len);
        params.insert("articlesConceptLang", self.concept_lang.clone());
        params.insert("articlesConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("articles", &mut params);
        self.concept_flags.write_to("articles", &mut params);
        self.source_flags.write_to("articles", &mut params);
        params
    }
}

/// URIs of all matching articles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArticlesUriList;

impl RequestArticlesUriList {
    pub const RESULT_TYPE: &'static str = "uriList";
}

impl ContributesParameters for RequestArticlesUriList {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Internal ids of all matching articles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArticlesIdList;

impl RequestArticlesIdList {
    pub const RESULT_TYPE: &'static str = "articleIds";
}

impl ContributesParameters for RequestArticlesIdList {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Distribution of matching articles over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArticlesTimeAggr;

impl RequestArticlesTimeAggr {
    pub const RESULT_TYPE: &'static str = "timeAggr";
}

impl ContributesParameters for RequestArticlesTimeAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Distribution of a sample of matching articles over categories.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesCategoryAggr {
    sample_size: u32,
}

impl Default for RequestArticlesCategoryAggr {
    fn default() -> Self {
        Self { sample_size: 20000 }
    }
}

impl RequestArticlesCategoryAggr {
    pub const RESULT_TYPE: &'static str = "categoryAggr";
    pub const MAX_SAMPLE_SIZE: u32 = 50000;

    pub fn with_sample_size(mut self, size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("categoryAggrSampleSize", size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestArticlesCategoryAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("categoryAggrSampleSize", self.sample_size);
        params
    }
}

/// Concepts mentioned most often in a sample of matching articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesConceptAggr {
    concept_count: u32,
    sample_size: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestArticlesConceptAggr {
    fn default() -> Self {
        Self {
            concept_count: 25,
            sample_size: 1000,
            concept_lang: english(),
            concept_types: default_concept_types(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestArticlesConceptAggr {
    pub const RESULT_TYPE: &'static str = "conceptAggr";
    pub const MAX_CONCEPT_COUNT: u32 = 500;
    pub const MAX_SAMPLE_SIZE: u32 = 10000;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count = check_bound("conceptAggrConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
        Ok(self)
    }

    pub fn with_sample_size(mut self, size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("conceptAggrSampleSize", size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestArticlesConceptAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("conceptAggrConceptLang", self.concept_lang.clone());
        params.insert("conceptAggrConceptType", concept_type_names(&self.concept_types));
        params.insert("conceptAggrConceptCount", self.concept_count);
        params.insert("conceptAggrSampleSize", self.sample_size);
        self.concept_flags.write_to("conceptAggr", &mut params);
        params
    }
}

/// News sources publishing the matching articles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArticlesSourceAggr {
    source_flags: SourceFlags,
}

impl RequestArticlesSourceAggr {
    pub const RESULT_TYPE: &'static str = "sourceAggr";
}

impl ContributesParameters for RequestArticlesSourceAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        self.source_flags.write_to("sourceAggr", &mut params);
        params
    }
}

/// Top keywords in a sample of matching articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesKeywordAggr {
    lang: String,
    sample_size: u32,
}

impl Default for RequestArticlesKeywordAggr {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            sample_size: 500,
        }
    }
}

impl RequestArticlesKeywordAggr {
    pub const RESULT_TYPE: &'static str = "keywordAggr";
    pub const MAX_SAMPLE_SIZE: u32 = 1000;

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn with_sample_size(mut self, size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("keywordAggrSampleSize", size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestArticlesKeywordAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("keywordAggrLang", self.lang.as_str());
        params.insert("keywordAggrSampleSize", self.sample_size);
        params
    }
}

/// Pairwise association matrix of the top concepts in a sample of matching articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesConceptMatrix {
    concept_count: u32,
    measure: ConceptMatrixMeasure,
    sample_size: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestArticlesConceptMatrix {
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

impl RequestArticlesConceptMatrix {
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

impl ContributesParameters for RequestArticlesConceptMatrix {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("conceptMatrixConceptCount", self.concept_count);
        params.insert("conceptMatrixConceptLang", self.concept_lang.clone());
        params.insert("conceptMatrixConceptType", concept_type_names(&self.concept_types));
        params.insert("conceptMatrixSampleSize", self.sample_size);
        params.insert("conceptMatrixMeasure", self.measure.to_string());
        self.concept_flags.write_to("conceptMatrix", &mut params);
        params
    }
}

/// Graph of concepts linked by co-occurrence in a sample of matching articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesConceptGraph {
    concept_count: u32,
    link_count: u32,
    sample_size: u32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    concept_flags: ConceptFlags,
}

impl Default for RequestArticlesConceptGraph {
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

impl RequestArticlesConceptGraph {
    pub const RESULT_TYPE: &'static str = "conceptGraph";
    pub const MAX_CONCEPT_COUNT: u32 = 1000;
    pub const MAX_LINK_COUNT: u32 = 2000;
    pub const MAX_SAMPLE_SIZE: u32 = 20000;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count = check_bound("conceptGraphConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
        Ok(self)
    }

    pub fn with_link_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.link_count = check_bound("conceptGraphLinkCount", count, Self::MAX_LINK_COUNT)?;
        Ok(self)
    }

    pub fn with_sample_size(mut self, size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("conceptGraphSampleSize", size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestArticlesConceptGraph {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("conceptGraphConceptCount", self.concept_count);
        params.insert("conceptGraphConceptLang", self.concept_lang.clone());
        params.insert("conceptGraphConceptType", concept_type_names(&self.concept_types));
        params.insert("conceptGraphSampleSize", self.sample_size);
        params.insert("conceptGraphLinkCount", self.link_count);
        self.concept_flags.write_to("conceptGraph", &mut params);
        params
    }
}

/// Top trending concepts in the matching articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesConceptTrends {
    concept_count: u32,
    concept_lang: Vec<String>,
    concept_flags: ConceptFlags,
}

impl Default for RequestArticlesConceptTrends {
    fn default() -> Self {
        Self {
            concept_count: 25,
            concept_lang: english(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestArticlesConceptTrends {
    pub const RESULT_TYPE: &'static str = "conceptTrends";
    pub const MAX_CONCEPT_COUNT: u32 = 50;

    pub fn with_concept_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.concept_count =
            check_bound("trendingConceptsConceptCount", count, Self::MAX_CONCEPT_COUNT)?;
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

impl ContributesParameters for RequestArticlesConceptTrends {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("trendingConceptsConceptCount", self.concept_count);
        params.insert("trendingConceptsConceptLang", self.concept_lang.clone());
        self.concept_flags.write_to("conceptTrends", &mut params);
        params
    }
}

/// Dates mentioned in the matching articles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArticlesDateMentionAggr;

impl RequestArticlesDateMentionAggr {
    pub const RESULT_TYPE: &'static str = "dateMentionAggr";
}

impl ContributesParameters for RequestArticlesDateMentionAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Articles added recently.
///
/// Pass the `lastArticleActivityId` from the previous response to
/// [`Self::with_last_article_activity_id`] to receive only newer articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticlesRecentActivity {
    max_article_count: u32,
    max_mins_back: u32,
    last_article_activity_id: i64,
    articles_with_location_only: bool,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestArticlesRecentActivity {
    fn default() -> Self {
        Self {
            max_article_count: 60,
            max_mins_back: 10 * 60,
            last_article_activity_id: 0,
            articles_with_location_only: true,
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestArticlesRecentActivity {
    pub const RESULT_TYPE: &'static str = "recentActivity";
    pub const MAX_ARTICLE_COUNT: u32 = 1000;

    pub fn with_max_article_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.max_article_count = check_bound(
            "articleRecentActivityMaxArticleCount",
            count,
            Self::MAX_ARTICLE_COUNT,
        )?;
        Ok(self)
    }

    pub fn with_max_mins_back(mut self, mins: u32) -> Self {
        self.max_mins_back = mins;
        self
    }

    pub fn with_last_article_activity_id(mut self, id: i64) -> Self {
        self.last_article_activity_id = id;
        self
    }

    /// Only articles from sources with a known location.
    pub fn with_location_only(mut self, only: bool) -> Self {
        self.articles_with_location_only = only;
        self
    }
}

impl ContributesParameters for RequestArticlesRecentActivity {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("articleRecentActivityMaxArticleCount", self.max_article_count);
        params.insert("articleRecentActivityMaxMinsBack", self.max_mins_back);
        params.insert(
            "articleRecentActivityLastArticleActivityId",
            self.last_article_activity_id,
        );
        params.insert(
            "articleRecentActivityArticlesWithLocationOnly",
            self.articles_with_location_only,
        );
        self.article_flags.write_to("recentActivity", &mut params);
        self.concept_flags.write_to("recentActivity", &mut params);
        self.source_flags.write_to("recentActivity", &mut params);
        params
    }
}

impl_concept_options!(
    RequestArticlesInfo,
    RequestArticlesConceptAggr,
    RequestArticlesConceptMatrix,
    RequestArticlesConceptGraph,
);

impl_flag_builders!(RequestArticlesInfo {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestArticlesConceptAggr {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestArticlesSourceAggr {
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestArticlesConceptMatrix {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestArticlesConceptGraph {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestArticlesConceptTrends {
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestArticlesRecentActivity {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn articles_info_defaults() {
        let params = RequestArticlesInfo::default().to_parameter_map();
        assert_eq!(params.get("articlesBodyLen"), Some(&ParamValue::Int(300)));
        assert_eq!(
            params.get("articlesSortBy").and_then(|v| v.as_str()),
            Some("date")
        );
        assert!(params.keys().all(|k| !k.starts_with("articlesInclude")));
    }

    #[test]
    fn keyword_aggr_writes_lang_and_sample_size() {
        let params = RequestArticlesKeywordAggr::default()
            .with_lang("deu")
            .with_sample_size(800)
            .unwrap()
            .to_parameter_map();
        assert_eq!(params.get("keywordAggrLang").and_then(|v| v.as_str()), Some("deu"));
        assert_eq!(params.get("keywordAggrSampleSize"), Some(&ParamValue::Int(800)));
    }

    #[test]
    fn sample_size_bounds() {
        assert!(RequestArticlesCategoryAggr::default().with_sample_size(50000).is_ok());
        assert!(RequestArticlesCategoryAggr::default().with_sample_size(50001).is_err());
        assert!(RequestArticlesConceptAggr::default().with_sample_size(10000).is_ok());
        assert!(RequestArticlesConceptAggr::default().with_sample_size(10001).is_err());
        assert!(RequestArticlesConceptAggr::default().with_concept_count(500).is_ok());
        assert!(RequestArticlesConceptAggr::default().with_concept_count(501).is_err());
    }

    #[test]
    fn concept_trends_flags_use_trends_prefix() {
        let params = RequestArticlesConceptTrends::default()
            .with_concept_flags(ConceptFlags {
                image: true,
                ..Default::default()
            })
            .to_parameter_map();
        assert_eq!(
            params.get("conceptTrendsIncludeConceptImage"),
            Some(&ParamValue::Bool(true))
        );
    }

    #[test]
    fn recent_activity_cursor_and_bound() {
        let params = RequestArticlesRecentActivity::default()
            .with_last_article_activity_id(42)
            .with_max_article_count(1000)
            .unwrap()
            .to_parameter_map();
        assert_eq!(
            params.get("articleRecentActivityLastArticleActivityId"),
            Some(&ParamValue::Int(42))
        );
        assert!(RequestArticlesRecentActivity::default()
            .with_max_article_count(1001)
            .is_err());
    }

    #[test]
    fn articles_info_count_bound() {
        let mut info = RequestArticlesInfo::default();
        assert!(info.set_count(200).is_ok());
        assert!(info.set_count(201).is_err());
    }

    #[test]
    fn concept_matrix_graph_and_trends_bounds() {
        assert!(RequestArticlesConceptMatrix::default().with_concept_count(200).is_ok());
        assert!(RequestArticlesConceptMatrix::default().with_concept_count(201).is_err());
        assert!(RequestArticlesConceptMatrix::default().with_sample_size(10000).is_ok());
        assert!(RequestArticlesConceptMatrix::default().with_sample_size(10001).is_err());
        assert!(RequestArticlesConceptGraph::default().with_concept_count(1000).is_ok());
        assert!(RequestArticlesConceptGraph::default().with_concept_count(1001).is_err());
        assert!(RequestArticlesConceptGraph::default().with_link_count(2000).is_ok());
        assert!(RequestArticlesConceptGraph::default().with_link_count(2001).is_err());
        assert!(RequestArticlesConceptGraph::default().with_sample_size(20000).is_ok());
        assert!(RequestArticlesConceptGraph::default().with_sample_size(20001).is_err());
        assert!(RequestArticlesConceptTrends::default().with_concept_count(50).is_ok());
        assert!(RequestArticlesConceptTrends::default().with_concept_count(51).is_err());
    }

    #[test]
    fn keyword_aggr_sample_size_bound() {
        assert!(RequestArticlesKeywordAggr::default().with_sample_size(1000).is_ok());
        assert!(RequestArticlesKeywordAggr::default().with_sample_size(1001).is_err());
    }
}
