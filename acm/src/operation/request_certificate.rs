/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request and response models of the `RequestCertificate` operation.

pub use self::_request_certificate_request::RequestCertificateRequest;
pub use self::_request_certificate_response::RequestCertificateResponse;

mod _request_certificate_request;
mod _request_certificate_response;

/// Builders of the `RequestCertificate` models.
pub mod builders {
    pub use super::_request_certificate_request::RequestCertificateRequestBuilder;
    pub use super::_request_certificate_response::RequestCertificateResponseBuilder;
}
