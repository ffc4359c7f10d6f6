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

//! the remote aggregator: idempotent read-only operations against a [`SceneQuery`].
//! Each operation is a single HTTP round trip, there are no retries - a failed call
//! is surfaced to the caller and abandons the current pipeline run

use serde::{Deserialize,Serialize};

use capsat_common::datetime::EpochMillis;

use crate::{CompositeHandle,EeSession,SceneQuery,SceneRecord,errors::*};

#[derive(Serialize)]
struct CountRequest<'a> {
    query: &'a SceneQuery,
}

#[derive(Deserialize)]
struct CountResponse {
    count: usize,
}

#[derive(Serialize)]
struct ListRequest<'a> {
    query: &'a SceneQuery,
    limit: usize,
}

#[derive(Deserialize)]
struct ListResponse {
    scenes: Vec<SceneEntry>,
}

/// one element of the archive's scene listing
#[derive(Deserialize)]
struct SceneEntry {
    #[serde(default)]
    id: String,
    properties: SceneProperties,
}

/// the per-scene attribute bag, mapped to the two attributes we consume.
/// All other bag entries are dropped right here at the deserialization boundary
#[derive(Deserialize)]
struct SceneProperties {
    #[serde(rename="system:time_start")]
    time_start: i64,

    #[serde(rename="CLOUDY_PIXEL_PERCENTAGE")]
    cloudiness: f64,
}

impl From<SceneEntry> for SceneRecord {
    fn from (entry: SceneEntry) -> Self {
        SceneRecord { time_start: EpochMillis::new( entry.properties.time_start), cloudiness: entry.properties.cloudiness }
    }
}

#[derive(Serialize)]
struct AggregateRequest<'a> {
    query: &'a SceneQuery,
    property: &'a str,
    reducer: &'static str,
}

#[derive(Deserialize)]
struct AggregateResponse {
    value: f64,
}

#[derive(Serialize)]
struct CompositeRequest<'a> {
    query: &'a SceneQuery,
    reducer: &'static str,
}

/// number of scenes in the view
pub async fn count (session: &EeSession, query: &SceneQuery) -> Result<usize> {
    let response: CountResponse = session.post_query( "collection:count", &CountRequest { query }).await?;
    Ok( response.count)
}

/// per-scene metadata records of the view. To retrieve the full set `limit` has to be
/// the view's count - this is a single bounded call, the archive does not paginate
pub async fn list_scenes (session: &EeSession, query: &SceneQuery, limit: usize) -> Result<Vec<SceneRecord>> {
    let request = ListRequest { query, limit };
    let response: ListResponse = session.post_query( "collection:list", &request).await?;
    Ok( response.scenes.into_iter().map( SceneRecord::from).collect())
}

/// population mean of a numeric metadata attribute across all scenes of the view
pub async fn aggregate_mean (session: &EeSession, query: &SceneQuery, property: &str) -> Result<f64> {
    let request = AggregateRequest { query, property, reducer: "MEAN" };
    let response: AggregateResponse = session.post_query( "collection:aggregate", &request).await?;
    Ok( response.value)
}

/// request a per-pixel median reduction across the scenes of the view. Callers must
/// not invoke this on an empty view (undefined and expensive on the archive side)
pub async fn median_composite (session: &EeSession, query: &SceneQuery) -> Result<CompositeHandle> {
    let request = CompositeRequest { query, reducer: "MEDIAN" };
    session.post_query( "collection:composite", &request).await
}
