/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request and response models of every ACM operation.

pub mod describe_certificate;
pub mod import_certificate;
pub mod list_certificates;
pub mod request_certificate;
