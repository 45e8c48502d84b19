/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The field used to sort a certificate listing.
    pub enum SortBy {
        CreatedAt => "CREATED_AT",
    }
}
