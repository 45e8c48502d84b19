/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request and response models of the `ListCertificates` operation.

pub use self::_list_certificates_request::ListCertificatesRequest;
pub use self::_list_certificates_response::ListCertificatesResponse;

mod _list_certificates_request;
mod _list_certificates_response;

/// Builders of the `ListCertificates` models.
pub mod builders {
    pub use super::_list_certificates_request::ListCertificatesRequestBuilder;
    pub use super::_list_certificates_response::ListCertificatesResponseBuilder;
}
