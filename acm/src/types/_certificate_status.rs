/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The status of a certificate.
    pub enum CertificateStatus {
        PendingValidation => "PENDING_VALIDATION",
        Issued => "ISSUED",
        Inactive => "INACTIVE",
        Expired => "EXPIRED",
        ValidationTimedOut => "VALIDATION_TIMED_OUT",
        Revoked => "REVOKED",
        Failed => "FAILED",
    }
}

#[cfg(test)]
mod test {
    use super::CertificateStatus;
    use std::str::FromStr;

    #[test]
    fn known_values_map_to_variants() {
        assert_eq!(CertificateStatus::from("ISSUED"), CertificateStatus::Issued);
        assert_eq!(CertificateStatus::ValidationTimedOut.as_str(), "VALIDATION_TIMED_OUT");
        assert_eq!(CertificateStatus::values().len(), 7);
        for value in CertificateStatus::values() {
            assert_eq!(CertificateStatus::from(*value).as_str(), *value);
        }
    }

    #[test]
    fn unknown_values_keep_their_text() {
        let status = CertificateStatus::from_str("ARCHIVED").unwrap();
        assert!(matches!(status, CertificateStatus::Unknown(_)));
        assert_eq!(status.as_str(), "ARCHIVED");
        assert_eq!(status.to_string(), "ARCHIVED");
        assert_ne!(status, CertificateStatus::from("archived"));
    }
}
