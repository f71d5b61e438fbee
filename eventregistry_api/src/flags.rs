//! Info-inclusion flags: which details the service should return about each
//! returned article, concept, source, event, or story.
//!
//! Every flag has a documented default. A flag is written to the request,
//! under the result request's namespace prefix, only when it differs from
//! that default.

use crate::params::{prefixed, ParameterMap};
use crate::errors::ContractViolation;

macro_rules! flag_family {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $( $field:ident : $key:literal = $default:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name {
            $( pub $field: bool, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }

        impl $name {
            /// Flag names accepted by [`Self::set`], in wire order.
            pub const NAMES: &'static [&'static str] = &[$( $key ),*];

            /// Sets a flag by its wire name (e.g. `includeArticleBody`).
            pub fn set(&mut self, name: &str, value: bool) -> Result<(), ContractViolation> {
                match name {
                    $( $key => self.$field = value, )*
                    _ => {
                        return Err(ContractViolation::UnknownFlag {
                            family: $family,
                            flag: name.to_string(),
                        })
                    }
                }
                Ok(())
            }

            /// Consuming variant of [`Self::set`].
            pub fn with(mut self, name: &str, value: bool) -> Result<Self, ContractViolation> {
                self.set(name, value)?;
                Ok(self)
            }

            /// Writes every non-default flag as `<prefix>IncludeXxx`.
            pub fn write_to(&self, prefix: &str, params: &mut ParameterMap) {
                $( params.set_if_not_default(prefixed(prefix, $key), self.$field, $default); )*
            }
        }
    };
}

flag_family! {
    /// What to return about each article.
    ArticleFlags, "article" {
        basic_info: "includeArticleBasicInfo" = true,
        body: "includeArticleBody" = true,
        title: "includeArticleTitle" = true,
        concepts: "includeArticleConcepts" = false,
        source_info: "includeArticleSourceInfo" = true,
        event_uri: "includeArticleEventUri" = true,
        story_uri: "includeArticleStoryUri" = false,
        duplicate_list: "includeArticleDuplicateList" = false,
        original_article_info: "includeArticleOriginalArticleInfo" = false,
        categories: "includeArticleCategories" = false,
        location: "includeArticleLocation" = false,
        image: "includeArticleImage" = false,
        extracted_dates: "includeArticleExtractedDates" = false,
        details: "includeArticleDetails" = false,
    }
}

flag_family! {
    /// What to return about each concept.
    ConceptFlags, "concept" {
        image: "includeConceptImage" = false,
        description: "includeConceptDescription" = false,
        trends: "includeConceptTrends" = false,
        location_info: "includeConceptLocationInfo" = false,
        details: "includeConceptDetails" = false,
    }
}

flag_family! {
    /// What to return about each news source.
    SourceFlags, "source" {
        title: "includeSourceTitle" = true,
        description: "includeSourceDescription" = false,
        tags: "includeSourceTags" = false,
        location: "includeSourceLocation" = false,
        importance: "includeSourceImportance" = false,
        article_count: "includeSourceArticleCount" = false,
        details: "includeSourceDetails" = false,
    }
}

flag_family! {
    /// What to return about each event.
    EventFlags, "event" {
        article_counts: "includeEventArticleCounts" = true,
        concepts: "includeEventConcepts" = true,
        multi_ling_info: "includeEventMultiLingInfo" = true,
        categories: "includeEventCategories" = true,
        location: "includeEventLocation" = true,
        stories: "includeEventStories" = false,
        images: "includeEventImages" = false,
    }
}

flag_family! {
    /// What to return about each story.
    StoryFlags, "story" {
        basic_stats: "includeStoryBasicStats" = true,
        category: "includeStoryCategory" = true,
        location: "includeStoryLocation" = true,
        date: "includeStoryDate" = true,
        concepts: "includeStoryConcepts" = false,
        title: "includeStoryTitle" = false,
        summary: "includeStorySummary" = false,
        medoid_article: "includeStoryMedoidArticle" = false,
        extracted_dates: "includeStoryExtractedDates" = false,
    }
}

/// Generates consuming `with_*_flags` builders for result requests that
/// carry flag families.
macro_rules! impl_flag_builders {
    ($ty:ty { $( $method:ident => $field:ident : $flags:ty ),* $(,)? }) => {
        impl $ty {
            $(
                pub fn $method(mut self, flags: $flags) -> Self {
                    self.$field = flags;
                    self
                }
            )*
        }
    };
}
pub(crate) use impl_flag_builders;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    fn assert_family<F: Copy + Default>(
        names: &[&str],
        set: impl Fn(&mut F, &str, bool) -> Result<(), ContractViolation>,
        write: impl Fn(&F, &str, &mut ParameterMap),
    ) {
        let mut defaults = ParameterMap::new();
        write(&F::default(), "pre", &mut defaults);
        assert!(defaults.is_empty());

        for name in names {
            // Exactly one of the two values differs from the default.
            let mut written = 0;
            for value in [true, false] {
                let mut flags = F::default();
                set(&mut flags, name, value).unwrap();
                let mut params = ParameterMap::new();
                write(&flags, "pre", &mut params);
                match params.len() {
                    0 => {}
                    1 => {
                        let key = prefixed("pre", name);
                        assert_eq!(params.get(&key), Some(&ParamValue::Bool(value)));
                        written += 1;
                    }
                    n => panic!("{} produced {} keys", name, n),
                }
            }
            assert_eq!(written, 1, "{}", name);
        }
    }

    #[test]
    fn article_flags_write_only_changes() {
        assert_family::<ArticleFlags>(ArticleFlags::NAMES, ArticleFlags::set, ArticleFlags::write_to);
    }

    #[test]
    fn every_family_writes_only_changes() {
        assert_family::<ConceptFlags>(ConceptFlags::NAMES, ConceptFlags::set, ConceptFlags::write_to);
        assert_family::<SourceFlags>(SourceFlags::NAMES, SourceFlags::set, SourceFlags::write_to);
        assert_family::<EventFlags>(EventFlags::NAMES, EventFlags::set, EventFlags::write_to);
        assert_family::<StoryFlags>(StoryFlags::NAMES, StoryFlags::set, StoryFlags::write_to);
    }

    #[test]
    fn body_flag_is_written_when_disabled() {
        let flags = ArticleFlags {
            body: false,
            concepts: true,
            ..Default::default()
        };
        let mut params = ParameterMap::new();
        flags.write_to("articles", &mut params);
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["articlesIncludeArticleBody", "articlesIncludeArticleConcepts"]
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = EventFlags::default().with("includeArticleBody", true).unwrap_err();
        assert_eq!(
            err,
            ContractViolation::UnknownFlag {
                family: "event",
                flag: "includeArticleBody".to_string()
            }
        );
    }
}
