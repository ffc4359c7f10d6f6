/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::fmt;
use std::time::Duration;
use chrono::{DateTime,NaiveDate,TimeZone,Utc};
use serde::{Serialize,Deserialize};

/// milliseconds since the Unix epoch - the acquisition timestamp unit of the scene archive
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now () -> Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis: i64) -> Self { EpochMillis(millis) }

    pub fn from_secs (secs: i64) -> Self { EpochMillis(secs * 1000) }

    pub fn millis (&self) -> i64 { self.0 }
}

impl fmt::Display for EpochMillis {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateTime::<Utc>::from(*self))
    }
}

impl<Tz> From<DateTime<Tz>> for EpochMillis where Tz: TimeZone {
    fn from (date: DateTime<Tz>) -> Self { EpochMillis( date.timestamp_millis()) }
}

impl From<EpochMillis> for DateTime<Utc> {
    fn from (millis: EpochMillis) -> Self {
        DateTime::<Utc>::from_timestamp_millis(millis.0).unwrap_or( DateTime::<Utc>::from_timestamp_millis(0).unwrap())
    }
}

/// a half open calendar date interval [start..end).
/// Note that start > end is deliberately not rejected here - the archive simply reports
/// zero scenes for such a range, and `is_empty()` lets callers warn about it
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new (start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn is_empty (&self) -> bool {
        self.start >= self.end
    }

    /// ISO-8601 date string of the inclusive interval start
    pub fn start_iso (&self) -> String { self.start.format("%Y-%m-%d").to_string() }

    /// ISO-8601 date string of the exclusive interval end
    pub fn end_iso (&self) -> String { self.end.format("%Y-%m-%d").to_string() }
}

impl fmt::Display for DateRange {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start_iso(), self.end_iso())
    }
}

#[inline] pub fn millis (n: u64) -> Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64) -> Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64) -> Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64) -> Duration { Duration::from_secs(n * 3600) }

#[inline]
pub fn utc_now () -> DateTime<Utc> {
    Utc::now()
}

pub fn from_epoch_millis (millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from(EpochMillis(millis))
}
