/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// An extended key usage extension value.
    pub enum ExtendedKeyUsageName {
        TlsWebServerAuthentication => "TLS_WEB_SERVER_AUTHENTICATION",
        TlsWebClientAuthentication => "TLS_WEB_CLIENT_AUTHENTICATION",
        CodeSigning => "CODE_SIGNING",
        EmailProtection => "EMAIL_PROTECTION",
        TimeStamping => "TIME_STAMPING",
        OcspSigning => "OCSP_SIGNING",
        IpsecEndSystem => "IPSEC_END_SYSTEM",
        IpsecTunnel => "IPSEC_TUNNEL",
        IpsecUser => "IPSEC_USER",
        Any => "ANY",
        None => "NONE",
        Custom => "CUSTOM",
    }
}
