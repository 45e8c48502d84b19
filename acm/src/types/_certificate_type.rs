/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The source of a certificate.
    pub enum CertificateType {
        Imported => "IMPORTED",
        AmazonIssued => "AMAZON_ISSUED",
        Private => "PRIVATE",
    }
}
