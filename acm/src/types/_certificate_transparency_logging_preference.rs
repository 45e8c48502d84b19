/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// Whether a certificate is recorded in a public certificate transparency log.
    pub enum CertificateTransparencyLoggingPreference {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}
