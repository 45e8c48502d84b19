/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The status of managed renewal.
    pub enum RenewalStatus {
        PendingAutoRenewal => "PENDING_AUTO_RENEWAL",
        PendingValidation => "PENDING_VALIDATION",
        Success => "SUCCESS",
        Failed => "FAILED",
    }
}
