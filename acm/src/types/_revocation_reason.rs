/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The reason a certificate was revoked.
    pub enum RevocationReason {
        Unspecified => "UNSPECIFIED",
        KeyCompromise => "KEY_COMPROMISE",
        CaCompromise => "CA_COMPROMISE",
        AffiliationChanged => "AFFILIATION_CHANGED",
        Superceded => "SUPERCEDED",
        CessationOfOperation => "CESSATION_OF_OPERATION",
        CertificateHold => "CERTIFICATE_HOLD",
        RemoveFromCrl => "REMOVE_FROM_CRL",
        PrivilegeWithdrawn => "PRIVILEGE_WITHDRAWN",
        AACompromise => "A_A_COMPROMISE",
    }
}
