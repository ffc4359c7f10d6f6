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

//! command line tool to run the scene query pipeline once and print the report as JSON

use anyhow::{Result,anyhow};
use chrono::NaiveDate;

use capsat_common::{define_cli,check_cli};
use capsat_common::config::load_config_from;
use capsat_common::datetime::DateRange;
use capsat_common::geo::{GeoDisk,GeoPoint};
use capsat_ee::{EeConfig,PipelineRequest,ee_session,run_pipeline};

define_cli! { ARGS [about="query the scene archive and print a classified cloudiness report"] =
    config: String [help="pathname of the ee config file", long, default_value="configs/ee.ron"],
    lon: f64 [help="longitude of the area of interest center (degrees)", long, allow_hyphen_values=true],
    lat: f64 [help="latitude of the area of interest center (degrees)", long, allow_hyphen_values=true],
    radius: f64 [help="area of interest radius in meters", long, default_value="25000"],
    start: String [help="inclusive start date (YYYY-MM-DD)", long],
    end: String [help="exclusive end date (YYYY-MM-DD)", long],
    max_cloud: u8 [help="max cloudiness percentage for the composite [1..100]", long, default_value="15"]
}

fn parse_date (s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str( s, "%Y-%m-%d").map_err( |e| anyhow!("not a YYYY-MM-DD date: {} ({})", s, e))
}

#[tokio::main]
async fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt::init();

    let config: EeConfig = load_config_from( &ARGS.config)?;

    let center = GeoPoint::from_lon_lat_degrees( ARGS.lon, ARGS.lat);
    let request = PipelineRequest {
        name: format!("{}", center),
        bounds: GeoDisk::around( center, ARGS.radius),
        dates: DateRange::new( parse_date( &ARGS.start)?, parse_date( &ARGS.end)?),
        max_cloudiness: ARGS.max_cloud,
    };

    let session = ee_session( &config).await?;
    let report = run_pipeline( &session, &request).await?;

    println!("{}", serde_json::to_string_pretty( &report)?);
    Ok(())
}
