/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The order of a sorted certificate listing.
    pub enum SortOrder {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}
