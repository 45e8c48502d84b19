/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// A key usage extension value.
    pub enum KeyUsageName {
        DigitalSignature => "DIGITAL_SIGNATURE",
        NonRepudiation => "NON_REPUDIATION",
        KeyEncipherment => "KEY_ENCIPHERMENT",
        DataEncipherment => "DATA_ENCIPHERMENT",
        KeyAgreement => "KEY_AGREEMENT",
        CertificateSigning => "CERTIFICATE_SIGNING",
        CrlSigning => "CRL_SIGNING",
        EncipherOnly => "ENCIPHER_ONLY",
        DecipherOnly => "DECIPHER_ONLY",
        Any => "ANY",
        Custom => "CUSTOM",
    }
}
