/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request and response models of the `ImportCertificate` operation.

pub use self::_import_certificate_request::ImportCertificateRequest;
pub use self::_import_certificate_response::ImportCertificateResponse;

mod _import_certificate_request;
mod _import_certificate_response;

/// Builders of the `ImportCertificate` models.
pub mod builders {
    pub use super::_import_certificate_request::ImportCertificateRequestBuilder;
    pub use super::_import_certificate_response::ImportCertificateResponseBuilder;
}
