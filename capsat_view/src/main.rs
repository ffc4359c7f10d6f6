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

//! European capitals satellite viewer - pick a capital, a date range and a cloudiness
//! threshold, get a median composite on a map plus a per-scene cloudiness chart

use anyhow::Result;
use tracing::info;

use capsat_common::{define_cli,check_cli};
use capsat_common::config::load_config_from;
use capsat_ee::{EeConfig,ee_session};

mod capitals;
mod server;

define_cli! { ARGS [about="European capitals satellite viewer"] =
    config: String [help="pathname of the ee config file", long, default_value="configs/ee.ron"],
    host: String [help="address to serve on", long, default_value="127.0.0.1"],
    port: u16 [help="port to serve on", long, default_value="8080"]
}

#[tokio::main]
async fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt::init();

    let config: EeConfig = load_config_from( &ARGS.config)?;

    // happens-once credential exchange. If this fails the process exits and serves
    // no interactions at all
    let session = ee_session( &config).await?;

    let router = server::build_router( session);
    let listener = tokio::net::TcpListener::bind( (ARGS.host.as_str(), ARGS.port)).await?;
    info!("serving European capitals satellite viewer on http://{}:{}", ARGS.host, ARGS.port);
    axum::serve( listener, router).await?;

    Ok(())
}
