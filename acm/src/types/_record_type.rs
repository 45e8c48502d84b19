/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The type of a DNS record.
    pub enum RecordType {
        Cname => "CNAME",
    }
}
