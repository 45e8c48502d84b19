/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use acm::operation::import_certificate::ImportCertificateRequest;
use acm::primitives::{Blob, DateTime};
use acm::types::{CertificateSummary, KeyUsageName};
use acm::AcmRequestBuilder;
use pretty_assertions::assert_eq;
use smithy_schema::serde::{SerializableStruct, ShapeSerializer};
use smithy_schema::Schema;
use std::convert::Infallible;

/// Records every write as `name=value` lines.
#[derive(Default)]
struct RecordingSerializer {
    lines: Vec<String>,
}

impl RecordingSerializer {
    fn push(&mut self, schema: &dyn Schema, value: impl std::fmt::Display) {
        let name = schema.location_name().unwrap_or("-").to_string();
        self.lines.push(format!("{}={}", name, value));
    }
}

impl ShapeSerializer for RecordingSerializer {
    type Output = Vec<String>;
    type Error = Infallible;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self.lines)
    }

    fn write_struct<F>(&mut self, schema: &dyn Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.push(schema, format!("{{{}", schema.shape_id().shape_name()));
        write_members(self)?;
        self.lines.push("}".to_string());
        Ok(())
    }

    fn write_list<F>(&mut self, schema: &dyn Schema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.push(schema, "[");
        write_elements(self)?;
        self.lines.push("]".to_string());
        Ok(())
    }

    fn write_boolean(&mut self, schema: &dyn Schema, value: bool) -> Result<(), Self::Error> {
        self.push(schema, value);
        Ok(())
    }

    fn write_integer(&mut self, schema: &dyn Schema, value: i32) -> Result<(), Self::Error> {
        self.push(schema, value);
        Ok(())
    }

    fn write_long(&mut self, schema: &dyn Schema, value: i64) -> Result<(), Self::Error> {
        self.push(schema, value);
        Ok(())
    }

    fn write_string(&mut self, schema: &dyn Schema, value: &str) -> Result<(), Self::Error> {
        self.push(schema, value);
        Ok(())
    }

    fn write_blob(&mut self, schema: &dyn Schema, value: &Blob) -> Result<(), Self::Error> {
        self.push(schema, format!("{} bytes", value.as_ref().len()));
        Ok(())
    }

    fn write_timestamp(&mut self, schema: &dyn Schema, value: &DateTime) -> Result<(), Self::Error> {
        self.push(schema, value.secs());
        Ok(())
    }
}

fn serialize(record: &impl SerializableStruct) -> Vec<String> {
    let mut serializer = RecordingSerializer::default();
    match record.serialize(&mut serializer) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    match serializer.finish() {
        Ok(lines) => lines,
        Err(never) => match never {},
    }
}

#[test]
fn sensitive_members_are_written_and_override_configuration_is_not() {
    let request = ImportCertificateRequest::builder()
        .override_configuration_with(|c| c.put_header("x-trace", "1"))
        .certificate(Blob::new("cert"))
        .private_key(Blob::new("secret"))
        .tags_with(|t| t.key("env").value("prod"))
        .build();

    assert_eq!(
        serialize(&request),
        vec![
            "-={ImportCertificateRequest",
            "Certificate=4 bytes",
            "PrivateKey=6 bytes",
            "Tags=[",
            "-={Tag",
            "Key=env",
            "Value=prod",
            "}",
            "]",
            "}",
        ]
    );
}

#[test]
fn unset_lists_are_skipped_and_empty_lists_are_written() {
    let unset = CertificateSummary::builder()
        .domain_name("example.com")
        .created_at(DateTime::from_secs(1_576_540_098))
        .build();
    assert_eq!(
        serialize(&unset),
        vec![
            "-={CertificateSummary",
            "DomainName=example.com",
            "CreatedAt=1576540098",
            "}",
        ]
    );

    let with_lists = unset
        .to_builder()
        .set_subject_alternative_name_summaries(Some(vec![]))
        .key_usages(KeyUsageName::from("NEW_USAGE"))
        .build();
    let lines = serialize(&with_lists);
    assert!(lines.contains(&"SubjectAlternativeNameSummaries=[".to_string()));
    assert!(lines.contains(&"member=NEW_USAGE".to_string()));
}
