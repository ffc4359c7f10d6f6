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

use serde::{Deserialize,Serialize};

use capsat_common::datetime::DateRange;
use capsat_common::geo::GeoDisk;

use crate::CLOUD_PROPERTY;

/// comparison operators of the archive's numeric metadata filter
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="SCREAMING_SNAKE_CASE")]
pub enum FilterOp {
    LessThan,
}

/// a numeric comparison filter on a named per-scene metadata attribute
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct NumericFilter {
    pub property: String,
    pub op: FilterOp,
    pub value: f64,
}

/// a logical view over the remote scene archive: a collection restricted by
/// spatial bounds, an acquisition date range and optional metadata filters.
///
/// The serialized form of this struct is the wire filter representation the
/// archive endpoints consume.
///
/// Invariant: the only way to obtain a filtered (composite) view is to derive it
/// from an unfiltered one via [`SceneQuery::with_max_cloudiness`], which makes it
/// a subset of its parent by construction.
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct SceneQuery {
    pub collection: String,

    /// scenes must intersect this area of interest
    pub bounds: GeoDisk,

    /// acquisition date in [start..end), ISO dates on the wire
    pub dates: DateRange,

    #[serde(skip_serializing_if="Vec::is_empty")]
    filters: Vec<NumericFilter>,
}

impl SceneQuery {
    /// the date + bounds view, no metadata restrictions
    pub fn unfiltered (collection: &str, bounds: GeoDisk, dates: DateRange) -> Self {
        SceneQuery { collection: collection.to_string(), bounds, dates, filters: Vec::new() }
    }

    /// derive the composite view: scenes with cloudiness strictly below the threshold.
    /// Note the strict less-than - classification of individual scenes uses an inclusive
    /// bound (see [`crate::series::classify_scenes`])
    pub fn with_max_cloudiness (&self, max_cloudiness: u8) -> Self {
        let mut query = self.clone();
        query.filters.push( NumericFilter {
            property: CLOUD_PROPERTY.to_string(),
            op: FilterOp::LessThan,
            value: max_cloudiness as f64
        });
        query
    }

    pub fn filters (&self) -> &[NumericFilter] {
        self.filters.as_slice()
    }
}
