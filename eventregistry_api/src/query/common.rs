//! Shared query infrastructure: the [`Query`] and [`SearchQuery`] traits,
//! the [`SearchFilter`] fields, and [`DateBound`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::errors::ContractViolation;
use crate::params::{ContributesParameters, ParameterMap};
use crate::request::{ResultRequest, Subject};

/// Trait implemented by all queries. A query is one remote action plus an
/// ordered list of result requests of its own subject family.
///
/// `to_parameter_map` yields only the query's own parameters; merging in the
/// attached result requests is done by [`crate::encode_query`].
pub trait Query: ContributesParameters {
    /// The server-side operation, sent as `action`.
    fn action(&self) -> &'static str;

    /// The endpoint path the query is sent to.
    fn path(&self) -> &'static str;

    /// The subject family whose result requests this query accepts.
    fn subject(&self) -> Subject;

    /// Attached result requests, in attachment order.
    fn requested_results(&self) -> &[ResultRequest];

    fn requested_results_mut(&mut self) -> &mut Vec<ResultRequest>;

    /// Appends a result request, failing if it belongs to another subject family.
    fn add_requested_result(
        &mut self,
        request: impl Into<ResultRequest>,
    ) -> Result<(), ContractViolation>
    where
        Self: Sized,
    {
        let request = request.into();
        if request.subject() != self.subject() {
            return Err(ContractViolation::FamilyMismatch {
                action: self.action(),
                expected: self.subject(),
                found: request.subject(),
            });
        }
        self.requested_results_mut().push(request);
        Ok(())
    }

    fn with_requested_result(
        mut self,
        request: impl Into<ResultRequest>,
    ) -> Result<Self, ContractViolation>
    where
        Self: Sized,
    {
        self.add_requested_result(request)?;
        Ok(self)
    }

    /// Drops every attached result request.
    fn clear_requested_results(&mut self) {
        self.requested_results_mut().clear();
    }
}

/// Builder methods shared by the two search queries ([`crate::EventsQuery`]
/// and [`crate::ArticlesQuery`]).
pub trait SearchQuery: Query {
    /// Returns a mutable reference to the search filter fields.
    fn filter_mut(&mut self) -> &mut SearchFilter;

    /// Replaces the keyword string.
    fn with_keywords(mut self, keywords: &str) -> Self
    where
        Self: Sized,
    {
        self.filter_mut().keywords = keywords.to_string();
        self
    }

    /// Appends a keyword, separated from any existing keywords by a space.
    fn add_keyword(&mut self, keyword: &str) {
        let keywords = &mut self.filter_mut().keywords;
        if !keywords.is_empty() {
            keywords.push(' ');
        }
        keywords.push_str(keyword);
    }

    fn add_concept(&mut self, concept_uri: &str) {
        self.filter_mut().concept_uris.push(concept_uri.to_string());
    }

    fn add_location(&mut self, location_uri: &str) {
        self.filter_mut().location_uris.push(location_uri.to_string());
    }

    fn add_category(&mut self, category_uri: &str) {
        self.filter_mut().category_uris.push(category_uri.to_string());
    }

    fn add_news_source(&mut self, source_uri: &str) {
        self.filter_mut().publisher_uris.push(source_uri.to_string());
    }

    /// Restricts results to the given languages.
    fn with_lang<I, S>(mut self, langs: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_mut().lang = langs.into_iter().map(Into::into).collect();
        self
    }

    /// Whether category filters also match their sub-categories. Defaults to true.
    fn with_category_include_sub(mut self, include: bool) -> Self
    where
        Self: Sized,
    {
        self.filter_mut().category_include_sub = include;
        self
    }

    fn with_ignore_keywords(mut self, keywords: &str) -> Self
    where
        Self: Sized,
    {
        self.filter_mut().ignore_keywords = keywords.to_string();
        self
    }

    fn add_ignore_concept(&mut self, concept_uri: &str) {
        self.filter_mut().ignore_concept_uris.push(concept_uri.to_string());
    }

    fn add_ignore_location(&mut self, location_uri: &str) {
        self.filter_mut().ignore_location_uris.push(location_uri.to_string());
    }

    fn add_ignore_category(&mut self, category_uri: &str) {
        self.filter_mut().ignore_category_uris.push(category_uri.to_string());
    }

    fn add_ignore_news_source(&mut self, source_uri: &str) {
        self.filter_mut().ignore_publisher_uris.push(source_uri.to_string());
    }

    fn with_ignore_lang<I, S>(mut self, langs: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_mut().ignore_lang = langs.into_iter().map(Into::into).collect();
        self
    }

    fn with_ignore_category_include_sub(mut self, include: bool) -> Self
    where
        Self: Sized,
    {
        self.filter_mut().ignore_category_include_sub = include;
        self
    }

    /// Sets or clears the publication date range. Both bounds are validated
    /// before either is applied.
    fn set_date_limit(
        &mut self,
        start: impl Into<DateBound>,
        end: impl Into<DateBound>,
    ) -> Result<(), ContractViolation> {
        let start = start.into().resolve()?;
        let end = end.into().resolve()?;
        let filter = self.filter_mut();
        filter.date_start = start;
        filter.date_end = end;
        Ok(())
    }

    /// Sets or clears the range of dates mentioned in the article text.
    fn set_date_mention_limit(
        &mut self,
        start: impl Into<DateBound>,
        end: impl Into<DateBound>,
    ) -> Result<(), ContractViolation> {
        let start = start.into().resolve()?;
        let end = end.into().resolve()?;
        let filter = self.filter_mut();
        filter.date_mention_start = start;
        filter.date_mention_end = end;
        Ok(())
    }
}

/// Filter criteria shared by the event and article searches.
///
/// Only values that differ from their defaults are written, so an untouched
/// filter contributes no parameters at all.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchFilter {
    pub keywords: String,
    pub concept_uris: Vec<String>,
    pub lang: Vec<String>,
    pub publisher_uris: Vec<String>,
    pub location_uris: Vec<String>,
    pub category_uris: Vec<String>,
    /// Also match sub-categories of `category_uris`. Defaults to true.
    pub category_include_sub: bool,
    /// `YYYY-MM-DD`.
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub date_mention_start: Option<String>,
    pub date_mention_end: Option<String>,
    pub ignore_keywords: String,
    pub ignore_concept_uris: Vec<String>,
    pub ignore_lang: Vec<String>,
    pub ignore_location_uris: Vec<String>,
    pub ignore_publisher_uris: Vec<String>,
    pub ignore_category_uris: Vec<String>,
    pub ignore_category_include_sub: bool,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            concept_uris: Vec::new(),
            lang: Vec::new(),
            publisher_uris: Vec::new(),
            location_uris: Vec::new(),
            category_uris: Vec::new(),
            category_include_sub: true,
            date_start: None,
            date_end: None,
            date_mention_start: None,
            date_mention_end: None,
            ignore_keywords: String::new(),
            ignore_concept_uris: Vec::new(),
            ignore_lang: Vec::new(),
            ignore_location_uris: Vec::new(),
            ignore_publisher_uris: Vec::new(),
            ignore_category_uris: Vec::new(),
            ignore_category_include_sub: true,
        }
    }
}

impl SearchFilter {
    /// Writes the search criteria into `params`, skipping defaults.
    pub fn write_to(&self, params: &mut ParameterMap) {
        params.set_if_not_default("keywords", self.keywords.as_str(), "");
        write_list(params, "conceptUri", &self.concept_uris);
        write_list(params, "lang", &self.lang);
        write_list(params, "publisherUri", &self.publisher_uris);
        write_list(params, "locationUri", &self.location_uris);
        write_list(params, "categoryUri", &self.category_uris);
        params.set_if_not_default("categoryIncludeSub", self.category_include_sub, true);
        write_date(params, "dateStart", &self.date_start);
        write_date(params, "dateEnd", &self.date_end);
        write_date(params, "dateMentionStart", &self.date_mention_start);
        write_date(params, "dateMentionEnd", &self.date_mention_end);

        params.set_if_not_default("ignoreKeywords", self.ignore_keywords.as_str(), "");
        write_list(params, "ignoreConceptUri", &self.ignore_concept_uris);
        write_list(params, "ignoreLang", &self.ignore_lang);
        write_list(params, "ignoreLocationUri", &self.ignore_location_uris);
        write_list(params, "ignorePublisherUri", &self.ignore_publisher_uris);
        write_list(params, "ignoreCategoryUri", &self.ignore_category_uris);
        params.set_if_not_default(
            "ignoreCategoryIncludeSub",
            self.ignore_category_include_sub,
            true,
        );
    }
}

fn write_list(params: &mut ParameterMap, key: &str, values: &[String]) {
    for value in values {
        params.push_to_list(key, value.as_str());
    }
}

fn write_date(params: &mut ParameterMap, key: &str, value: &Option<String>) {
    if let Some(date) = value {
        params.insert(key, date.as_str());
    }
}

/// One end of a date range: a date, a pre-formatted `YYYY-MM-DD` string, or
/// [`DateBound::Unset`] to remove a previously set bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateBound {
    Date(NaiveDate),
    Text(String),
    Unset,
}

impl DateBound {
    /// The wire value of this bound. Text is checked but passed through unchanged.
    pub fn resolve(self) -> Result<Option<String>, ContractViolation> {
        match self {
            DateBound::Date(date) => Ok(Some(date.format("%Y-%m-%d").to_string())),
            DateBound::Text(text) => {
                NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                    .map_err(|_| ContractViolation::InvalidDate(text.clone()))?;
                Ok(Some(text))
            }
            DateBound::Unset => Ok(None),
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::Date(date)
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(datetime: NaiveDateTime) -> Self {
        DateBound::Date(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateBound {
    fn from(datetime: DateTime<Tz>) -> Self {
        DateBound::Date(datetime.date_naive())
    }
}

impl From<&str> for DateBound {
    fn from(text: &str) -> Self {
        DateBound::Text(text.to_string())
    }
}

impl From<String> for DateBound {
    fn from(text: String) -> Self {
        DateBound::Text(text)
    }
}

impl<T: Into<DateBound>> From<Option<T>> for DateBound {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DateBound::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn default_filter_writes_nothing() {
        let mut params = ParameterMap::new();
        SearchFilter::default().write_to(&mut params);
        assert!(params.is_empty());
    }

    #[test]
    fn datetime_truncates_to_date() {
        let dt = NaiveDate::from_ymd_opt(2014, 5, 2)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap();
        assert_eq!(DateBound::from(dt).resolve(), Ok(Some("2014-05-02".to_string())));
    }

    #[test]
    fn text_is_validated_but_unchanged() {
        assert_eq!(
            DateBound::from("2014-05-02").resolve(),
            Ok(Some("2014-05-02".to_string()))
        );
        assert_eq!(
            DateBound::from("May 2nd").resolve(),
            Err(ContractViolation::InvalidDate("May 2nd".to_string()))
        );
    }

    #[test]
    fn none_unsets() {
        assert_eq!(DateBound::from(None::<NaiveDate>), DateBound::Unset);
        assert_eq!(DateBound::Unset.resolve(), Ok(None));
    }

    #[test]
    fn category_include_sub_only_when_disabled() {
        let mut params = ParameterMap::new();
        SearchFilter {
            category_include_sub: false,
            ..Default::default()
        }
        .write_to(&mut params);
        assert_eq!(params.get("categoryIncludeSub"), Some(&ParamValue::Bool(false)));
        assert_eq!(params.len(), 1);
    }
}
