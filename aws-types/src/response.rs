/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Metadata the transport attaches to every response model.

use crate::RequestId;

/// Identifiers and status of the HTTP exchange that produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResponseMetadata {
    request_id: Option<String>,
    extended_request_id: Option<String>,
    http_status_code: Option<u16>,
}

impl ResponseMetadata {
    /// Create a new [`Builder`].
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Create a [`Builder`] seeded with every value of this metadata.
    pub fn to_builder(&self) -> Builder {
        Builder {
            request_id: self.request_id.clone(),
            extended_request_id: self.extended_request_id.clone(),
            http_status_code: self.http_status_code,
        }
    }

    /// The secondary request ID some services return, e.g. `x-amz-id-2`.
    pub fn extended_request_id(&self) -> Option<&str> {
        self.extended_request_id.as_deref()
    }

    /// The HTTP status code of the response.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    /// Returns true if the HTTP status code is in the 2xx range.
    pub fn is_successful(&self) -> bool {
        matches!(self.http_status_code, Some(200..=299))
    }
}

impl RequestId for ResponseMetadata {
    fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// A builder for [`ResponseMetadata`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Builder {
    request_id: Option<String>,
    extended_request_id: Option<String>,
    http_status_code: Option<u16>,
}

impl Builder {
    /// Set the request ID.
    pub fn request_id(self, request_id: impl Into<String>) -> Self {
        self.set_request_id(Some(request_id.into()))
    }

    /// Set the request ID, or unset it with `None`.
    pub fn set_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Set the extended request ID.
    pub fn extended_request_id(self, extended_request_id: impl Into<String>) -> Self {
        self.set_extended_request_id(Some(extended_request_id.into()))
    }

    /// Set the extended request ID, or unset it with `None`.
    pub fn set_extended_request_id(mut self, extended_request_id: Option<String>) -> Self {
        self.extended_request_id = extended_request_id;
        self
    }

    /// Set the HTTP status code.
    pub fn http_status_code(self, status: u16) -> Self {
        self.set_http_status_code(Some(status))
    }

    /// Set the HTTP status code, or unset it with `None`.
    pub fn set_http_status_code(mut self, status: Option<u16>) -> Self {
        self.http_status_code = status;
        self
    }

    /// Builds a [`ResponseMetadata`].
    pub fn build(self) -> ResponseMetadata {
        ResponseMetadata {
            request_id: self.request_id,
            extended_request_id: self.extended_request_id,
            http_status_code: self.http_status_code,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ResponseMetadata;
    use crate::RequestId;

    #[test]
    fn request_id_is_exposed() {
        let metadata = ResponseMetadata::builder()
            .request_id("7a62c49f-347e-4fc4-9331-6e8eEXAMPLE")
            .http_status_code(200)
            .build();
        assert_eq!(
            metadata.request_id(),
            Some("7a62c49f-347e-4fc4-9331-6e8eEXAMPLE")
        );
        assert!(metadata.is_successful());
        assert_eq!(metadata.to_builder().build(), metadata);
    }

    #[test]
    fn missing_metadata_has_no_request_id() {
        let metadata: Option<ResponseMetadata> = None;
        assert_eq!(metadata.request_id(), None);
        assert!(!ResponseMetadata::default().is_successful());
    }
}
