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

//! client crate for the hosted satellite scene archive: session initialization,
//! scene queries (count / list / mean aggregate) and server-side median composites.
//!
//! The archive owns everything pixel related - this crate only assembles query
//! parameters, turns per-scene metadata into typed records and classifies them
//! against a user supplied cloudiness threshold.

use std::time::Duration;
use serde::{Deserialize,Serialize};
use capsat_common::datetime::{secs,EpochMillis};

mod errors;
pub use errors::*;

mod session;
pub use session::*;

pub mod query;
pub use query::*;

pub mod archive;
pub use archive::*;

pub mod series;
pub use series::*;

pub mod pipeline;
pub use pipeline::*;

/// the scene collection we query by default (ESA Copernicus Sentinel-2 level 2A)
pub const DEFAULT_COLLECTION: &'static str = "COPERNICUS/S2_HARMONIZED";

/// per-scene metadata attribute holding the acquisition time in epoch milliseconds
pub const TIME_START_PROPERTY: &'static str = "system:time_start";

/// per-scene metadata attribute holding the cloud cover percentage.
/// This single name is used for the composite filter, the mean aggregate and the
/// record mapping so that filter and classification can never drift apart
pub const CLOUD_PROPERTY: &'static str = "CLOUDY_PIXEL_PERCENTAGE";

/// archive server / credential configuration
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct EeConfig {
    /// base URL of the archive REST endpoints
    pub base_url: String,

    /// the image collection to query (e.g. "COPERNICUS/S2_HARMONIZED")
    pub collection: String,

    /// service account identifier used for the session handshake
    pub service_account: String,

    /// base64 encoded service account private key (JSON)
    pub private_key_b64: String,

    /// per-request timeout
    pub timeout: Duration,
}

impl Default for EeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://earthengine.googleapis.com/v1".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            service_account: String::new(),
            private_key_b64: String::new(),
            timeout: secs(30),
        }
    }
}

/// the fixed-shape per-scene record we keep from the archive's attribute bag.
/// Only the two attributes consumed downstream are mapped, everything else is
/// dropped at the deserialization boundary
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct SceneRecord {
    /// acquisition timestamp ("system:time_start")
    pub time_start: EpochMillis,

    /// cloud cover percentage in [0.0 .. 100.0] ("CLOUDY_PIXEL_PERCENTAGE")
    pub cloudiness: f64,
}

impl SceneRecord {
    pub fn new (time_start: EpochMillis, cloudiness: f64) -> Self {
        SceneRecord { time_start, cloudiness }
    }
}

/// display parameters for rendering a composite as map tiles (natural color RGB defaults)
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct VisParams {
    pub bands: Vec<String>,
    pub min: u32,
    pub max: u32,
    pub gamma: f64,
}

impl Default for VisParams {
    fn default() -> Self {
        Self {
            bands: vec!["B4".to_string(), "B3".to_string(), "B2".to_string()],
            min: 0,
            max: 3000,
            gamma: 1.4,
        }
    }
}

/// opaque reference to a server-side median-reduced raster. We never materialize
/// pixel data locally - this is only good for requesting map tiles
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct CompositeHandle {
    pub image_id: String,

    /// URL template with `{z}/{x}/{y}` placeholders, display params still to be appended
    pub tile_url_template: String,
}

impl CompositeHandle {
    /// the full tile URL template for given display parameters
    pub fn tile_url (&self, vis: &VisParams) -> String {
        format!("{}?bands={}&min={}&max={}&gamma={}",
            self.tile_url_template, vis.bands.join(","), vis.min, vis.max, vis.gamma)
    }
}
