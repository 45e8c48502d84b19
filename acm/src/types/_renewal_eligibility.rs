/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// Whether a certificate is eligible for managed renewal.
    pub enum RenewalEligibility {
        Eligible => "ELIGIBLE",
        Ineligible => "INELIGIBLE",
    }
}
