/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

string_enum! {
    /// The method used to validate domain ownership.
    pub enum ValidationMethod {
        Email => "EMAIL",
        Dns => "DNS",
    }
}
