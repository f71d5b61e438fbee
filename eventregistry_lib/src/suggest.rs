//! Parameters for the `suggest*` lookup endpoints, which resolve a text
//! prefix to concept, source, location, category or concept class URIs.

use eventregistry_api::{ContributesParameters, ParameterMap};

/// `/json/suggestConcepts`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConceptSuggest {
    pub prefix: String,
    /// `person`, `loc`, `org`, `wiki`, `entities`, `concepts`, `conceptClass`, `conceptFolder`.
    pub sources: Vec<String>,
    pub lang: String,
    pub label_lang: String,
    pub page: u32,
    pub count: u32,
    /// Label locations as "city, country" instead of just "city".
    pub full_loc_info: bool,
}

impl ConceptSuggest {
    pub const PATH: &'static str = "/json/suggestConcepts";

    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            sources: vec!["concepts".to_string()],
            lang: "eng".to_string(),
            label_lang: "eng".to_string(),
            page: 0,
            count: 20,
            full_loc_info: false,
        }
    }
}

impl ContributesParameters for ConceptSuggest {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("prefix", self.prefix.as_str());
        params.insert("source", self.sources.clone());
        params.insert("lang", self.lang.as_str());
        params.insert("labelLang", self.label_lang.as_str());
        params.insert("page", self.page);
        params.insert("count", self.count);
        params.insert("fullLocInfo", self.full_loc_info);
        params
    }
}

/// `/json/suggestSources`.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSuggest {
    pub prefix: String,
    pub page: u32,
    pub count: u32,
}

impl SourceSuggest {
    pub const PATH: &'static str = "/json/suggestSources";

    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            page: 0,
            count: 20,
        }
    }
}

impl ContributesParameters for SourceSuggest {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("prefix", self.prefix.as_str());
        params.insert("page", self.page);
        params.insert("count", self.count);
        params
    }
}

/// `/json/suggestLocations`: cities and countries.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSuggest {
    pub prefix: String,
    pub count: u32,
    pub lang: String,
    pub sources: Vec<String>,
}

impl LocationSuggest {
    pub const PATH: &'static str = "/json/suggestLocations";

    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            count: 20,
            lang: "eng".to_string(),
            sources: vec!["city".to_string(), "country".to_string()],
        }
    }
}

impl ContributesParameters for LocationSuggest {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("prefix", self.prefix.as_str());
        params.insert("count", self.count);
        params.insert("source", self.sources.clone());
        params.insert("lang", self.lang.as_str());
        params
    }
}

/// `/json/suggestCategories`.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySuggest {
    pub prefix: String,
    pub page: u32,
    pub count: u32,
}

impl CategorySuggest {
    pub const PATH: &'static str = "/json/suggestCategories";

    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            page: 0,
            count: 20,
        }
    }
}

impl ContributesParameters for CategorySuggest {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("prefix", self.prefix.as_str());
        params.insert("page", self.page);
        params.insert("count", self.count);
        params
    }
}

/// `/json/suggestConceptClasses`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConceptClassSuggest {
    pub prefix: String,
    pub lang: String,
    pub label_lang: String,
    pub page: u32,
    pub count: u32,
}

impl ConceptClassSuggest {
    pub const PATH: &'static str = "/json/suggestConceptClasses";

    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            lang: "eng".to_string(),
            label_lang: "eng".to_string(),
            page: 0,
            count: 20,
        }
    }
}

impl ContributesParameters for ConceptClassSuggest {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("prefix", self.prefix.as_str());
        params.insert("lang", self.lang.as_str());
        params.insert("labelLang", self.label_lang.as_str());
        params.insert("page", self.page);
        params.insert("count", self.count);
        params
    }
}
