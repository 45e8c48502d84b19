/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::DateTime;
use std::fmt::Write;
use time::macros::format_description;
use time::OffsetDateTime;

/// Failure to render a [`DateTime`] in a textual format.
#[derive(Debug, thiserror::Error)]
pub enum DateTimeFormatError {
    /// The date is outside the range the textual format can express.
    #[error("date time is out of range for formatting: {0}")]
    OutOfRange(#[source] time::error::ComponentRange),
    /// The formatter failed to render the date.
    #[error("failed to format date time: {0}")]
    Format(#[source] time::error::Format),
}

fn to_offset_date_time(date_time: &DateTime) -> Result<OffsetDateTime, DateTimeFormatError> {
    OffsetDateTime::from_unix_timestamp_nanos(date_time.as_nanos())
        .map_err(DateTimeFormatError::OutOfRange)
}

/// Ok: "2019-12-16T23:48:18Z"
/// Ok: "2019-12-16T23:48:18.52Z"
pub(super) fn rfc3339(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
    let date = to_offset_date_time(date_time)?;
    let mut out = date
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]"
        ))
        .map_err(DateTimeFormatError::Format)?;
    if date_time.has_subsec_nanos() {
        let fraction = format!("{:0>9}", date_time.subsec_nanos());
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('Z');
    Ok(out)
}

/// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
/// Ok: "Mon, 16 Dec 2019 23:48:18.520 GMT"
pub(super) fn http_date(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
    let date = to_offset_date_time(date_time)?;
    let mut out = date
        .format(format_description!(
            "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second]"
        ))
        .map_err(DateTimeFormatError::Format)?;
    if date_time.has_subsec_nanos() {
        // millisecond precision only
        let _ = write!(out, ".{:03}", date_time.subsec_nanos() / 1_000_000);
    }
    out.push_str(" GMT");
    Ok(out)
}

pub(super) fn epoch_seconds(date_time: &DateTime) -> String {
    if date_time.has_subsec_nanos() {
        let fraction = format!("{:0>9}", date_time.subsec_nanos());
        format!("{}.{}", date_time.secs(), fraction.trim_end_matches('0'))
    } else {
        date_time.secs().to_string()
    }
}
