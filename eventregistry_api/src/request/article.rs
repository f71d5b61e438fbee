//! Result requests for a single article, attached to [`crate::ArticleQuery`].

use crate::errors::ContractViolation;
use crate::flags::{impl_flag_builders, ArticleFlags, ConceptFlags, SourceFlags};
use crate::params::{ContributesParameters, ParameterMap};

use super::check_bound;
use super::options::{
    concept_type_names, default_concept_types, english, strings, ArticleSortBy, ConceptType,
};

/// Details about the article itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticleInfo {
    body_len: i32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestArticleInfo {
    fn default() -> Self {
        Self {
            body_len: -1,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestArticleInfo {
    pub const RESULT_TYPE: &'static str = "info";

    /// Characters of body text to return; -1 returns the full body.
    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }
}

impl ContributesParameters for RequestArticleInfo {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("infoBodyLen", self.body_len);
        params.insert("infoConceptLang", self.concept_lang.clone());
        params.insert("infoConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("info", &mut params);
        self.concept_flags.write_to("info", &mut params);
        self.source_flags.write_to("info", &mut params);
        params
    }
}

/// Articles similar to this one, possibly in other languages.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticleSimilarArticles {
    page: u32,
    count: u32,
    lang: Vec<String>,
    limit_per_lang: i32,
    body_len: i32,
    sort_by: ArticleSortBy,
    sort_by_asc: bool,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestArticleSimilarArticles {
    fn default() -> Self {
        Self {
            page: 0,
            count: 20,
            lang: english(),
            limit_per_lang: -1,
            body_len: -1,
            sort_by: ArticleSortBy::CosSim,
            sort_by_asc: false,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestArticleSimilarArticles {
    pub const RESULT_TYPE: &'static str = "similarArticles";
    pub const MAX_COUNT: u32 = 200;

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.count = check_bound("similarArticlesCount", count, Self::MAX_COUNT)?;
        Ok(self)
    }

    pub fn with_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lang = strings(langs);
        self
    }

    /// Maximum articles per language; -1 for no limit.
    pub fn with_limit_per_lang(mut self, limit: i32) -> Self {
        self.limit_per_lang = limit;
        self
    }

    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }

    pub fn with_sort_by(mut self, sort_by: ArticleSortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }
}

impl ContributesParameters for RequestArticleSimilarArticles {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("similarArticlesPage", self.page);
        params.insert("similarArticlesCount", self.count);
        params.insert("similarArticlesLimitPerLang", self.limit_per_lang);
        params.insert("similarArticlesLang", self.lang.clone());
        params.insert("similarArticlesSortBy", self.sort_by.to_string());
        params.insert("similarArticlesSortByAsc", self.sort_by_asc);
        params.insert("similarArticlesBodyLen", self.body_len);
        params.insert("similarArticlesConceptLang", self.concept_lang.clone());
        params.insert("similarArticlesConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("similarArticles", &mut params);
        self.concept_flags.write_to("similarArticles", &mut params);
        self.source_flags.write_to("similarArticles", &mut params);
        params
    }
}

/// Articles that duplicate this one.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticleDuplicatedArticles {
    page: u32,
    count: u32,
    body_len: i32,
    sort_by: ArticleSortBy,
    sort_by_asc: bool,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestArticleDuplicatedArticles {
    fn default() -> Self {
        Self {
            page: 0,
            count: 20,
            body_len: -1,
            sort_by: ArticleSortBy::CosSim,
            sort_by_asc: false,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestArticleDuplicatedArticles {
    pub const RESULT_TYPE: &'static str = "duplicatedArticles";
    pub const MAX_COUNT: u32 = 200;

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.count = check_bound("duplicatedArticlesCount", count, Self::MAX_COUNT)?;
        Ok(self)
    }

    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }

    pub fn with_sort_by(mut self, sort_by: ArticleSortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }
}

impl ContributesParameters for RequestArticleDuplicatedArticles {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("duplicatedArticlesPage", self.page);
        params.insert("duplicatedArticlesCount", self.count);
        params.insert("duplicatedArticlesSortBy", self.sort_by.to_string());
        params.insert("duplicatedArticlesSortByAsc", self.sort_by_asc);
        params.insert("duplicatedArticlesBodyLen", self.body_len);
        params.insert("duplicatedArticlesConceptLang", self.concept_lang.clone());
        params.insert("duplicatedArticlesConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("duplicatedArticles", &mut params);
        self.concept_flags.write_to("duplicatedArticles", &mut params);
        self.source_flags.write_to("duplicatedArticles", &mut params);
        params
    }
}

/// The original article, when this one is a duplicate.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestArticleOriginalArticle {
    body_len: i32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestArticleOriginalArticle {
    fn default() -> Self {
        Self {
            body_len: -1,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestArticleOriginalArticle {
    pub const RESULT_TYPE: &'static str = "originalArticle";

    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }
}

impl ContributesParameters for RequestArticleOriginalArticle {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("originalArticleBodyLen", self.body_len);
        params.insert("originalArticleConceptLang", self.concept_lang.clone());
        params.insert("originalArticleConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("originalArticle", &mut params);
        self.concept_flags.write_to("originalArticle", &mut params);
        self.source_flags.write_to("originalArticle", &mut params);
        params
    }
}

impl_concept_options!(
    RequestArticleInfo,
    RequestArticleSimilarArticles,
    RequestArticleDuplicatedArticles,
    RequestArticleOriginalArticle,
);

impl_flag_builders!(RequestArticleInfo {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestArticleSimilarArticles {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestArticleDuplicatedArticles {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestArticleOriginalArticle {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
