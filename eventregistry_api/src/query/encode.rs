//! Flattening a query and its result requests into one request.

use std::fmt;

use url::Url;

use crate::errors::{ContractViolation, Error};
use crate::params::{ContributesParameters, ParameterMap};

use super::common::Query;

/// Account credentials appended to requests as `erUsername` / `erPassword`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn append_to(&self, params: &mut ParameterMap) {
        params.insert("erUsername", self.username.as_str());
        params.insert("erPassword", self.password.as_str());
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A fully encoded request, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub path: &'static str,
    pub params: ParameterMap,
}

impl RequestDescriptor {
    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }

    /// The GET URL for this request against `base`.
    pub fn url(&self, base: &str) -> Result<Url, url::ParseError> {
        let url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), self.path))?;
        Ok(self.params.add_to_url(&url))
    }
}

/// Merges the query's parameters with those of every attached result request.
///
/// Later requests overwrite keys written by earlier ones. `resultType` is
/// set to the result type tags in attachment order.
pub fn flatten(query: &impl Query) -> Result<ParameterMap, ContractViolation> {
    let requested = query.requested_results();
    if requested.is_empty() {
        return Err(ContractViolation::NoResultRequested);
    }
    let mut params = query.to_parameter_map();
    for request in requested {
        params.merge(request.to_parameter_map());
    }
    params.insert("action", query.action());
    params.insert(
        "resultType",
        requested
            .iter()
            .map(|r| r.result_type().to_string())
            .collect::<Vec<_>>(),
    );
    Ok(params)
}

/// Flattens `query` and appends `credentials` when given.
pub fn encode_query(
    query: &impl Query,
    credentials: Option<&Credentials>,
) -> Result<RequestDescriptor, Error> {
    let mut params = flatten(query)?;
    if let Some(credentials) = credentials {
        credentials.append_to(&mut params);
    }
    Ok(RequestDescriptor {
        path: query.path(),
        params,
    })
}
