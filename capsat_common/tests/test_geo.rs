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

use capsat_common::angle::*;
use capsat_common::geo::*;

// run with "cargo test test_angle_normalization -- --nocapture"

#[test]
fn test_angle_normalization() {
    let lon = Longitude::from_degrees(200.0);
    println!("display lon = {}", lon);
    assert_eq!( lon.degrees(), -160.0);
    assert_eq!( lon, Longitude::from_degrees(-160.0));

    let lat = Latitude::from_degrees(100.0);
    assert_eq!( lat.degrees(), 80.0);

    let lat = Latitude::from_degrees(-100.0);
    assert_eq!( lat.degrees(), -80.0);
}

#[test]
fn test_geo_point_serde() {
    let input = r#"{ "longitude": -122.0, "latitude": 37.0 }"#;
    let p: GeoPoint = serde_json::from_str(&input).unwrap();
    println!("deserialized GeoPoint: {p:?}");
    assert_eq!( p.lon.degrees(), -122.0);
    assert_eq!( p.lat.degrees(), 37.0);

    // alternative (short) field names
    let input = r#"{ "lon": -122.0, "lat": 37.0 }"#;
    let p1: GeoPoint = serde_json::from_str(&input).unwrap();
    assert_eq!( p, p1);

    let s: String = serde_json::to_string(&p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, r#"{"lon":-122.0,"lat":37.0}"#);
}

#[test]
fn test_geo_disk() {
    let rome = GeoPoint::from_lon_lat_degrees( 12.4964, 41.9028);
    let aoi = GeoDisk::around( rome, 25000.0);
    println!("aoi: {}", aoi);

    assert_eq!( aoi.center, rome);
    assert_eq!( aoi.radius_meters, 25000.0);

    let json = serde_json::to_string(&aoi).unwrap();
    let aoi1: GeoDisk = serde_json::from_str(&json).unwrap();
    assert_eq!( aoi, aoi1);
}
