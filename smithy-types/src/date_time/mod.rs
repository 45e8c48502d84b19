/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! DateTime type for representing timestamp members.
//!
//! Unlike [`std::time::SystemTime`], this type is not opaque. The time inside of it can be
//! read, and it can be rendered in any of the timestamp formats the wire protocols use.

use num_integer::div_mod_floor;
use num_integer::Integer;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod format;

pub use self::format::DateTimeFormatError;

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_SECOND_U32: u32 = 1_000_000_000;

/// Instant in time.
///
/// Represented as seconds and sub-second nanos since the Unix epoch (January 1, 1970 at
/// midnight UTC/GMT). Ordering, equality and hashing are structural, so records holding
/// timestamps compare the way their wire values do.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> DateTime {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from a number of seconds and a fractional second since the Unix epoch.
    ///
    /// # Example
    /// ```
    /// # use smithy_types::DateTime;
    /// assert_eq!(
    ///     DateTime::from_secs_and_nanos(1, 500_000_000u32),
    ///     DateTime::from_fractional_secs(1, 0.5),
    /// );
    /// ```
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let subsecond_nanos = (fraction * 1_000_000_000_f64) as u32;
        DateTime::from_secs_and_nanos(epoch_seconds, subsecond_nanos)
    }

    /// Creates a `DateTime` from a number of seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is not less than one second.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND_U32 {
            panic!("{} is >= 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Returns the number of nanoseconds since the Unix epoch.
    pub fn as_nanos(&self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.subsecond_nanos as i128
    }

    /// Returns true if sub-second nanos is greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Returns the epoch seconds component of the `DateTime`.
    ///
    /// _Note: this does not include the sub-second nanos._
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component of the `DateTime`.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Converts the `DateTime` to the number of milliseconds since the Unix epoch.
    ///
    /// This is fallible since `DateTime` holds more precision than an `i64` worth of millis.
    pub fn to_millis(self) -> Result<i64, ConversionError> {
        let subsec_millis =
            Integer::div_floor(&i64::from(self.subsecond_nanos), &(NANOS_PER_MILLI as i64));
        self.seconds
            .checked_mul(MILLIS_PER_SECOND)
            .and_then(|millis| millis.checked_add(subsec_millis))
            .ok_or(ConversionError(
                "DateTime value too large to fit into i64 epoch millis",
            ))
    }

    /// Formats the `DateTime` to a string using the given `format`.
    ///
    /// Returns an error if the date is outside the range a formatted date can express.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339(self),
            Format::HttpDate => format::http_date(self),
            Format::EpochSeconds => Ok(format::epoch_seconds(self)),
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(duration) => DateTime::from_secs_and_nanos(
                duration.as_secs() as i64,
                duration.subsec_nanos(),
            ),
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = duration.subsec_nanos();
                if nanos != 0 {
                    seconds -= 1;
                    nanos = NANOS_PER_SECOND_U32 - nanos;
                }
                DateTime::from_secs_and_nanos(seconds, nanos)
            }
        }
    }
}

impl TryFrom<DateTime> for SystemTime {
    type Error = ConversionError;

    fn try_from(date_time: DateTime) -> Result<Self, Self::Error> {
        if date_time.secs() < 0 {
            let mut secs = date_time.secs().unsigned_abs();
            let mut nanos = date_time.subsec_nanos();
            if nanos != 0 {
                secs -= 1;
                nanos = NANOS_PER_SECOND_U32 - nanos;
            }
            UNIX_EPOCH
                .checked_sub(Duration::new(secs, nanos))
                .ok_or(ConversionError("overflow occurred when subtracting duration"))
        } else {
            UNIX_EPOCH
                .checked_add(Duration::new(
                    date_time.secs() as u64,
                    date_time.subsec_nanos(),
                ))
                .ok_or(ConversionError("overflow occurred when adding duration"))
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fmt(Format::DateTime) {
            Ok(date) => write!(f, "{}", date),
            Err(_) => write!(
                f,
                "DateTime {{ secs: {}, nanos: {} }}",
                self.seconds, self.subsecond_nanos
            ),
        }
    }
}

/// Failure to convert a `DateTime` to or from another type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ConversionError(&'static str);

/// Formats for representing a `DateTime` as a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Format {
    /// RFC-3339 Date Time, e.g. `2019-12-16T23:48:18Z`.
    DateTime,
    /// Date format used by the HTTP `Date` header, specified in RFC-7231.
    HttpDate,
    /// Number of seconds since the Unix epoch formatted as a floating point.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn test_fmt() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let date_time = DateTime::from_fractional_secs(1576540098, 0.52);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
        assert_eq!(date_time.to_string(), "2019-12-16T23:48:18.52Z");
    }

    #[test]
    fn millis_round_trip() {
        assert_eq!(DateTime::from_millis(1576540098520).to_millis(), Ok(1576540098520));
        assert_eq!(
            DateTime::from_millis(-1),
            DateTime::from_secs_and_nanos(-1, 999_000_000)
        );
        assert!(DateTime::from_secs(i64::MAX).to_millis().is_err());
    }

    #[test]
    #[should_panic]
    fn nanos_out_of_range() {
        DateTime::from_secs_and_nanos(1, 1_000_000_000);
    }

    #[test]
    fn system_time_conversions() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 52);
        let date_time = DateTime::from(time);
        assert_eq!(date_time, DateTime::from_secs_and_nanos(1576540098, 52));
        assert_eq!(SystemTime::try_from(date_time).unwrap(), time);

        let before = UNIX_EPOCH - Duration::new(1, 500_000_000);
        let date_time = DateTime::from(before);
        assert_eq!(date_time, DateTime::from_secs_and_nanos(-2, 500_000_000));
        assert_eq!(SystemTime::try_from(date_time).unwrap(), before);
    }

    #[test]
    fn ordering_follows_the_timeline() {
        let earlier = DateTime::from_secs_and_nanos(10, 5);
        let later = DateTime::from_secs_and_nanos(10, 6);
        assert!(earlier < later);
        assert!(DateTime::from_secs(-1) < DateTime::from_secs(0));
    }
}
