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

use chrono::NaiveDate;
use capsat_common::datetime::DateRange;
use capsat_common::geo::{GeoDisk,GeoPoint};
use capsat_ee::{CLOUD_PROPERTY,DEFAULT_COLLECTION,query::{FilterOp,SceneQuery}};

fn rome_query () -> SceneQuery {
    let disk = GeoDisk::around( GeoPoint::from_lon_lat_degrees( 12.4964, 41.9028), 25000.0);
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2023,9,1).unwrap(),
        NaiveDate::from_ymd_opt(2024,3,1).unwrap());
    SceneQuery::unfiltered( DEFAULT_COLLECTION, disk, range)
}

#[test]
fn test_unfiltered_has_no_metadata_filters() {
    let query = rome_query();
    assert!( query.filters().is_empty());
}

#[test]
fn test_composite_view_derivation() {
    let unfiltered = rome_query();
    let composite = unfiltered.with_max_cloudiness( 15);

    // same collection, bounds and dates - only the cloud filter is added, which makes
    // the composite view a subset of the unfiltered one by construction
    assert_eq!( composite.collection, unfiltered.collection);
    assert_eq!( composite.bounds, unfiltered.bounds);
    assert_eq!( composite.dates, unfiltered.dates);

    assert_eq!( composite.filters().len(), 1);
    let filter = &composite.filters()[0];
    assert_eq!( filter.property, CLOUD_PROPERTY);
    assert_eq!( filter.op, FilterOp::LessThan); // strict - not <=
    assert_eq!( filter.value, 15.0);

    // the parent view is untouched by the derivation
    assert!( unfiltered.filters().is_empty());
}

#[test]
fn test_wire_form() {
    let query = rome_query().with_max_cloudiness( 15);
    let json = serde_json::to_value( &query).unwrap();

    assert_eq!( json["collection"], "COPERNICUS/S2_HARMONIZED");
    assert_eq!( json["bounds"]["center"]["lon"], 12.4964);
    assert_eq!( json["bounds"]["center"]["lat"], 41.9028);
    assert_eq!( json["bounds"]["radius_meters"], 25000.0);
    assert_eq!( json["dates"]["start"], "2023-09-01");
    assert_eq!( json["dates"]["end"], "2024-03-01");
    assert_eq!( json["filters"][0]["property"], "CLOUDY_PIXEL_PERCENTAGE");
    assert_eq!( json["filters"][0]["op"], "LESS_THAN");
    assert_eq!( json["filters"][0]["value"], 15.0);
}

#[test]
fn test_unfiltered_wire_form_omits_filters() {
    let json = serde_json::to_value( &rome_query()).unwrap();
    assert!( json.get("filters").is_none());
}

#[test]
fn test_inverted_range_still_serializes() {
    // start > end is passed through - the archive reports zero scenes for it
    let disk = GeoDisk::around( GeoPoint::from_lon_lat_degrees( 2.3522, 48.8566), 25000.0);
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2024,3,1).unwrap(),
        NaiveDate::from_ymd_opt(2023,9,1).unwrap());
    assert!( range.is_empty());

    let query = SceneQuery::unfiltered( DEFAULT_COLLECTION, disk, range);
    let json = serde_json::to_value( &query).unwrap();
    assert_eq!( json["dates"]["start"], "2024-03-01");
    assert_eq!( json["dates"]["end"], "2023-09-01");
}
