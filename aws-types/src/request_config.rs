/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-request configuration overrides.
//!
//! A [`RequestOverrideConfiguration`] travels inside a request model. The transport layer reads it
//! to add headers and query parameters, to tighten timeouts, and to tag the user agent with the
//! names of higher-level APIs that issued the call.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Name and version of a library built on top of the SDK, reported in the user agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiName {
    name: String,
    version: String,
}

impl ApiName {
    /// Creates a new `ApiName`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The library name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The library version.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ApiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Configuration that applies to a single request and overrides client defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RequestOverrideConfiguration {
    headers: BTreeMap<String, Vec<String>>,
    raw_query_parameters: BTreeMap<String, Vec<String>>,
    api_call_timeout: Option<Duration>,
    api_call_attempt_timeout: Option<Duration>,
    api_names: Vec<ApiName>,
}

impl RequestOverrideConfiguration {
    /// Create a new [`Builder`].
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Create a [`Builder`] seeded with every value of this configuration.
    pub fn to_builder(&self) -> Builder {
        Builder {
            headers: self.headers.clone(),
            raw_query_parameters: self.raw_query_parameters.clone(),
            api_call_timeout: self.api_call_timeout,
            api_call_attempt_timeout: self.api_call_attempt_timeout,
            api_names: self.api_names.clone(),
        }
    }

    /// Additional headers, by name, sent with the request.
    pub fn headers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.headers
    }

    /// Additional query parameters, by name, sent with the request.
    pub fn raw_query_parameters(&self) -> &BTreeMap<String, Vec<String>> {
        &self.raw_query_parameters
    }

    /// A limit on the amount of time the whole call may take, including every retry attempt.
    pub fn api_call_timeout(&self) -> Option<Duration> {
        self.api_call_timeout
    }

    /// A limit on the amount of time a single attempt may take.
    pub fn api_call_attempt_timeout(&self) -> Option<Duration> {
        self.api_call_attempt_timeout
    }

    /// Names of the libraries that issued this request.
    pub fn api_names(&self) -> &[ApiName] {
        &self.api_names
    }
}

/// A builder for [`RequestOverrideConfiguration`]s
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Builder {
    headers: BTreeMap<String, Vec<String>>,
    raw_query_parameters: BTreeMap<String, Vec<String>>,
    api_call_timeout: Option<Duration>,
    api_call_attempt_timeout: Option<Duration>,
    api_names: Vec<ApiName>,
}

impl Builder {
    /// Appends `value` to the values of header `name`.
    pub fn put_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Replaces every value of header `name`.
    pub fn set_header(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.headers.insert(name.into(), values);
        self
    }

    /// Replaces all additional headers.
    pub fn set_headers(mut self, headers: BTreeMap<String, Vec<String>>) -> Self {
        self.headers = headers;
        self
    }

    /// Appends `value` to the values of query parameter `name`.
    pub fn put_raw_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.raw_query_parameters
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Replaces all additional query parameters.
    pub fn set_raw_query_parameters(mut self, parameters: BTreeMap<String, Vec<String>>) -> Self {
        self.raw_query_parameters = parameters;
        self
    }

    /// Set the limit on the duration of the whole call.
    pub fn api_call_timeout(self, timeout: Duration) -> Self {
        self.set_api_call_timeout(Some(timeout))
    }

    /// Sets the api call timeout if `Some(Duration)` is passed. Unsets it when `None` is passed.
    pub fn set_api_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.api_call_timeout = timeout;
        self
    }

    /// Set the limit on the duration of a single attempt.
    pub fn api_call_attempt_timeout(self, timeout: Duration) -> Self {
        self.set_api_call_attempt_timeout(Some(timeout))
    }

    /// Sets the attempt timeout if `Some(Duration)` is passed. Unsets it when `None` is passed.
    pub fn set_api_call_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.api_call_attempt_timeout = timeout;
        self
    }

    /// Appends an API name.
    pub fn add_api_name(mut self, api_name: ApiName) -> Self {
        self.api_names.push(api_name);
        self
    }

    /// Appends an API name produced by `f`.
    pub fn add_api_name_with(self, f: impl FnOnce() -> ApiName) -> Self {
        self.add_api_name(f())
    }

    /// Builds a [`RequestOverrideConfiguration`].
    pub fn build(self) -> RequestOverrideConfiguration {
        RequestOverrideConfiguration {
            headers: self.headers,
            raw_query_parameters: self.raw_query_parameters,
            api_call_timeout: self.api_call_timeout,
            api_call_attempt_timeout: self.api_call_attempt_timeout,
            api_names: self.api_names,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ApiName, RequestOverrideConfiguration};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::time::Duration;

    #[test]
    fn builder_accumulates_values() {
        let config = RequestOverrideConfiguration::builder()
            .put_header("x-amz-trace", "a")
            .put_header("x-amz-trace", "b")
            .put_raw_query_parameter("debug", "1")
            .api_call_timeout(Duration::from_secs(5))
            .add_api_name(ApiName::new("cert-sync", "1.2.0"))
            .build();
        assert_eq!(
            config.headers().get("x-amz-trace"),
            Some(&vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            config.raw_query_parameters().get("debug"),
            Some(&vec!["1".to_string()])
        );
        assert_eq!(config.api_call_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.api_call_attempt_timeout(), None);
        assert_eq!(config.api_names()[0].to_string(), "cert-sync/1.2.0");
    }

    #[test]
    fn set_none_clears_timeout() {
        let config = RequestOverrideConfiguration::builder()
            .api_call_attempt_timeout(Duration::from_millis(10))
            .set_api_call_attempt_timeout(None)
            .build();
        assert_eq!(config, RequestOverrideConfiguration::default());
    }

    proptest! {
        #[test]
        fn to_builder_round_trips(
            header in "[a-z]{1,8}",
            value in "[ -~]{0,16}",
            millis in proptest::option::of(0u64..100_000),
        ) {
            let config = RequestOverrideConfiguration::builder()
                .put_header(header.clone(), value)
                .set_api_call_timeout(millis.map(Duration::from_millis))
                .add_api_name_with(|| ApiName::new("lib", "0.1"))
                .build();
            prop_assert_eq!(config.to_builder().build(), config);
        }
    }
}
