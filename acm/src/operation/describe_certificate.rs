/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request and response models of the `DescribeCertificate` operation.

pub use self::_describe_certificate_request::DescribeCertificateRequest;
pub use self::_describe_certificate_response::DescribeCertificateResponse;

mod _describe_certificate_request;
mod _describe_certificate_response;

/// Builders of the `DescribeCertificate` models.
pub mod builders {
    pub use super::_describe_certificate_request::DescribeCertificateRequestBuilder;
    pub use super::_describe_certificate_response::DescribeCertificateResponseBuilder;
}
