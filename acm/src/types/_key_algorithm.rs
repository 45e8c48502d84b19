/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The algorithm used to generate a key pair.
    pub enum KeyAlgorithm {
        Rsa1024 => "RSA_1024",
        Rsa2048 => "RSA_2048",
        Rsa3072 => "RSA_3072",
        Rsa4096 => "RSA_4096",
        EcPrime256v1 => "EC_prime256v1",
        EcSecp384r1 => "EC_secp384r1",
        EcSecp521r1 => "EC_secp521r1",
    }
}

#[cfg(test)]
mod test {
    use super::KeyAlgorithm;

    #[test]
    fn mixed_case_values() {
        assert_eq!(KeyAlgorithm::from("EC_prime256v1"), KeyAlgorithm::EcPrime256v1);
        assert_eq!(KeyAlgorithm::EcSecp384r1.as_ref(), "EC_secp384r1");
        assert!(matches!(KeyAlgorithm::from("EC_PRIME256V1"), KeyAlgorithm::Unknown(_)));
    }
}
