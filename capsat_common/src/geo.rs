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

//! minimal WGS84 surface geometry - just what we need to express spatial filters for
//! remote archive queries. All heavy geometry (scene footprint intersection, buffering,
//! reprojection) is owned by the archive service

use std::fmt;
use serde::{Serialize,Deserialize};

use crate::angle::{Latitude,Longitude};

/// a geodetic surface point given as (lon,lat) degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPoint {
    #[serde(alias="longitude")]
    pub lon: Longitude,
    #[serde(alias="latitude")]
    pub lat: Latitude,
}

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint { lon, lat }
    }

    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint { lon: Longitude::from_degrees(lon), lat: Latitude::from_degrees(lat) }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon: {}, lat: {})", self.lon, self.lat)
    }
}

/// a circular area of interest: a center point buffered by a radius in meters.
/// This is the spatial filter unit of the scene archive - we never materialize the
/// disk outline locally
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoDisk {
    pub center: GeoPoint,
    pub radius_meters: f64,
}

impl GeoDisk {
    pub fn around (center: GeoPoint, radius_meters: f64) -> Self {
        GeoDisk { center, radius_meters }
    }
}

impl fmt::Display for GeoDisk {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{}m", self.center, self.radius_meters)
    }
}
