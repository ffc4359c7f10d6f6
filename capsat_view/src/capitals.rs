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

use serde::Serialize;
use capsat_common::geo::{GeoDisk,GeoPoint};

/// fixed buffer radius around a capital center point
pub const AOI_RADIUS_METERS: f64 = 25000.0;

/// a selectable place with a fixed (longitude,latitude) center
#[derive(Serialize,Debug,Clone,Copy,PartialEq)]
pub struct Capital {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

impl Capital {
    pub fn point (&self) -> GeoPoint {
        GeoPoint::from_lon_lat_degrees( self.lon, self.lat)
    }

    /// the area of interest queried for this capital
    pub fn area_of_interest (&self) -> GeoDisk {
        GeoDisk::around( self.point(), AOI_RADIUS_METERS)
    }
}

/// the static set of selectable European capitals
pub const EUROPEAN_CAPITALS: &[Capital] = &[
    Capital { name: "Rome, Italy",            lon:  12.4964, lat: 41.9028 },
    Capital { name: "Stockholm, Sweden",      lon:  18.0656, lat: 59.3327 },
    Capital { name: "Paris, France",          lon:   2.3522, lat: 48.8566 },
    Capital { name: "Berlin, Germany",        lon:  13.4050, lat: 52.5200 },
    Capital { name: "London, UK",             lon:  -0.1278, lat: 51.5074 },
    Capital { name: "Madrid, Spain",          lon:  -3.7038, lat: 40.4168 },
    Capital { name: "Vienna, Austria",        lon:  16.3738, lat: 48.2082 },
    Capital { name: "Athens, Greece",         lon:  23.7275, lat: 37.9838 },
    Capital { name: "Warsaw, Poland",         lon:  21.0118, lat: 52.2297 },
    Capital { name: "Amsterdam, Netherlands", lon:   4.8952, lat: 52.3702 },
    Capital { name: "Oslo, Norway",           lon:  10.7522, lat: 59.9139 },
    Capital { name: "Lisbon, Portugal",       lon:  -9.1393, lat: 38.7223 },
];

pub fn find_capital (name: &str) -> Option<&'static Capital> {
    EUROPEAN_CAPITALS.iter().find( |c| c.name == name)
}
