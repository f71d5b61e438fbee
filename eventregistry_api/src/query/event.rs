use crate::params::{ContributesParameters, ParameterMap};
use crate::request::{ResultRequest, Subject};

use super::common::Query;

/// Fetches one or more events by URI.
#[derive(Clone, Debug, PartialEq)]
pub struct EventQuery {
    event_uris: Vec<String>,
    requested: Vec<ResultRequest>,
}

impl EventQuery {
    pub const ACTION: &'static str = "getEvent";

    pub fn new<I, S>(event_uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            event_uris: event_uris.into_iter().map(Into::into).collect(),
            requested: Vec::new(),
        }
    }

    pub fn event_uris(&self) -> &[String] {
        &self.event_uris
    }
}

impl Query for EventQuery {
    fn action(&self) -> &'static str {
        Self::ACTION
    }
    fn path(&self) -> &'static str {
        "/json/event"
    }
    fn subject(&self) -> Subject {
        Subject::Event
    }
    fn requested_results(&self) -> &[ResultRequest] {
        &self.requested
    }
    fn requested_results_mut(&mut self) -> &mut Vec<ResultRequest> {
        &mut self.requested
    }
}

impl ContributesParameters for EventQuery {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("action", Self::ACTION);
        params.insert("eventUri", self.event_uris.clone());
        params
    }
}
