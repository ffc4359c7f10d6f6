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

//! the one-shot query-and-summarize pipeline: build the unfiltered and composite views,
//! aggregate over them, classify the scene series and resolve the median composite.
//! All remote calls are awaited strictly in sequence - worst case latency is the sum
//! of the round trips, and a failed call abandons the run

use serde::{Deserialize,Serialize};
use tracing::info;

use capsat_common::datetime::DateRange;
use capsat_common::geo::GeoDisk;

use crate::{
    CLOUD_PROPERTY, CompositeHandle, EeSession, SceneQuery,
    archive::{aggregate_mean, count, list_scenes, median_composite},
    errors::*,
    series::{ClassifiedSeries, classify_scenes},
};

/// outcome of the composite resolution - either there was nothing under the
/// threshold or we hold an opaque server-side image reference
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub enum CompositeResult {
    Empty,
    Image( CompositeHandle ),
}

impl CompositeResult {
    pub fn is_empty (&self) -> bool {
        matches!( self, CompositeResult::Empty)
    }
}

/// one user input combination: where, when and how cloudy is acceptable
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct PipelineRequest {
    /// display name of the selected location
    pub name: String,

    /// area of interest (location buffered by a fixed radius)
    pub bounds: GeoDisk,

    pub dates: DateRange,

    /// max cloudiness percentage in [1..100] - composite filter and series threshold
    pub max_cloudiness: u8,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct PipelineReport {
    pub name: String,
    pub max_cloudiness: u8,

    /// scenes matching date + bounds only
    pub unfiltered_count: usize,

    /// scenes additionally under the cloudiness threshold (strict)
    pub composite_count: usize,

    /// mean cloudiness over the unfiltered view - deliberately not the composite view
    pub mean_cloudiness: Option<f64>,

    pub series: ClassifiedSeries,

    pub composite: CompositeResult,
}

impl PipelineReport {
    /// the bare-map short circuit: nothing under the threshold, no chart data
    fn empty ( request: &PipelineRequest, unfiltered_count: usize) -> Self {
        PipelineReport {
            name: request.name.clone(),
            max_cloudiness: request.max_cloudiness,
            unfiltered_count,
            composite_count: 0,
            mean_cloudiness: None,
            series: ClassifiedSeries::empty(),
            composite: CompositeResult::Empty,
        }
    }

    pub fn has_composite (&self) -> bool {
        !self.composite.is_empty()
    }
}

/// run the full pipeline for one input combination.
///
/// The composite view is derived from the unfiltered view, never built independently.
/// If no scene passes the cloudiness filter the run short circuits to an empty report
/// (bare map, no chart) without listing or aggregating anything.
pub async fn run_pipeline (session: &EeSession, request: &PipelineRequest) -> Result<PipelineReport> {
    let unfiltered = SceneQuery::unfiltered( session.collection(), request.bounds, request.dates);
    let composite_query = unfiltered.with_max_cloudiness( request.max_cloudiness);

    let composite_count = count( session, &composite_query).await?;
    let unfiltered_count = count( session, &unfiltered).await?;

    info!("{}: {} scenes in {}, {} under {}%",
        request.name, unfiltered_count, request.dates, composite_count, request.max_cloudiness);

    if composite_count == 0 {
        return Ok( PipelineReport::empty( request, unfiltered_count))
    }

    let scenes = list_scenes( session, &unfiltered, unfiltered_count).await?;
    let mean_cloudiness = aggregate_mean( session, &unfiltered, CLOUD_PROPERTY).await?;
    let series = classify_scenes( scenes, request.max_cloudiness);
    let composite = CompositeResult::Image( median_composite( session, &composite_query).await?);

    Ok( PipelineReport {
        name: request.name.clone(),
        max_cloudiness: request.max_cloudiness,
        unfiltered_count,
        composite_count,
        mean_cloudiness: Some( mean_cloudiness),
        series,
        composite,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::{Arc,Mutex};
    use axum::{Router, extract::{Path,State}, response::Json, routing::post};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as B64;
    use serde_json::{Value,json};
    use capsat_common::datetime::secs;
    use capsat_common::geo::GeoPoint;
    use chrono::NaiveDate;
    use crate::{EeConfig, series::CloudLabel, session::open_ee_session};

    /// canned in-process archive. Records every operation endpoint hit together with
    /// whether the posted query carried a cloudiness filter
    #[derive(Clone)]
    struct StubArchive {
        log: Arc<Mutex<Vec<(String,bool)>>>,
        composite_count: usize,
        unfiltered_count: usize,
    }

    impl StubArchive {
        fn new (composite_count: usize, unfiltered_count: usize) -> Self {
            StubArchive { log: Arc::new( Mutex::new( Vec::new())), composite_count, unfiltered_count }
        }

        fn calls (&self) -> Vec<(String,bool)> {
            self.log.lock().unwrap().clone()
        }
    }

    async fn stub_op (State(stub): State<StubArchive>, Path(op): Path<String>, Json(body): Json<Value>) -> Json<Value> {
        let filtered = body.get("query").map( |q| q.get("filters").is_some()).unwrap_or(false);
        if op != "token" {
            stub.log.lock().unwrap().push( (op.clone(), filtered));
        }

        let response = match op.as_str() {
            "token" => json!({ "access_token": "stub-token" }),
            "collection:count" => {
                let count = if filtered { stub.composite_count } else { stub.unfiltered_count };
                json!({ "count": count })
            }
            "collection:list" => json!({ "scenes": [
                { "id": "a", "properties": { "system:time_start": 1695168000000i64, "CLOUDY_PIXEL_PERCENTAGE": 5.0 } },
                { "id": "b", "properties": { "system:time_start": 1695254400000i64, "CLOUDY_PIXEL_PERCENTAGE": 40.0 } },
                { "id": "c", "properties": { "system:time_start": 1695340800000i64, "CLOUDY_PIXEL_PERCENTAGE": 15.0 } }
            ]}),
            "collection:aggregate" => json!({ "value": 20.0 }),
            "collection:composite" => json!({
                "image_id": "composites/stub",
                "tile_url_template": "https://archive.example/composites/stub/tiles/{z}/{x}/{y}"
            }),
            _ => json!({})
        };
        Json( response)
    }

    async fn serve_stub (stub: StubArchive) -> SocketAddr {
        let router = Router::new().route( "/{op}", post( stub_op)).with_state( stub);
        let listener = tokio::net::TcpListener::bind( "127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn( async move { axum::serve( listener, router).await.unwrap(); });
        addr
    }

    fn stub_config (addr: SocketAddr) -> EeConfig {
        EeConfig {
            base_url: format!("http://{}", addr),
            service_account: "viewer@example.iam.gserviceaccount.com".to_string(),
            private_key_b64: B64.encode( r#"{"key": "test"}"#),
            timeout: secs(5),
            ..EeConfig::default()
        }
    }

    fn request () -> PipelineRequest {
        PipelineRequest {
            name: "Rome, Italy".to_string(),
            bounds: GeoDisk::around( GeoPoint::from_lon_lat_degrees( 12.4964, 41.9028), 25000.0),
            dates: DateRange::new(
                NaiveDate::from_ymd_opt(2023,9,1).unwrap(),
                NaiveDate::from_ymd_opt(2024,3,1).unwrap()),
            max_cloudiness: 15,
        }
    }

    #[tokio::test]
    async fn zero_composite_count_stops_after_the_counts() {
        // nothing under the threshold: no list, no mean aggregate and no median
        // reduction request - just the two counts, filtered view first
        let stub = StubArchive::new( 0, 3);
        let addr = serve_stub( stub.clone()).await;
        let session = open_ee_session( &stub_config( addr)).await.unwrap();

        let report = run_pipeline( &session, &request()).await.unwrap();
        assert_eq!( report.unfiltered_count, 3);
        assert_eq!( report.composite_count, 0);
        assert_eq!( report.mean_cloudiness, None);
        assert!( report.series.is_empty());
        assert!( !report.has_composite());

        let expected = vec![
            ("collection:count".to_string(), true),
            ("collection:count".to_string(), false),
        ];
        assert_eq!( stub.calls(), expected);
    }

    #[tokio::test]
    async fn mean_and_series_come_from_the_unfiltered_view() {
        // list and aggregate requests carry the filter-less query, only the counts
        // and the median reduction see the derived composite view
        let stub = StubArchive::new( 2, 3);
        let addr = serve_stub( stub.clone()).await;
        let session = open_ee_session( &stub_config( addr)).await.unwrap();

        let report = run_pipeline( &session, &request()).await.unwrap();
        assert_eq!( report.unfiltered_count, 3);
        assert_eq!( report.composite_count, 2);
        assert_eq!( report.mean_cloudiness, Some(20.0));
        assert_eq!( report.series.len(), 3);
        assert!( report.has_composite());

        let labels: Vec<CloudLabel> = report.series.iter().map( |s| s.label).collect();
        assert_eq!( labels, vec![CloudLabel::Under, CloudLabel::Over, CloudLabel::Under]);

        let expected = vec![
            ("collection:count".to_string(), true),
            ("collection:count".to_string(), false),
            ("collection:list".to_string(), false),
            ("collection:aggregate".to_string(), false),
            ("collection:composite".to_string(), true),
        ];
        assert_eq!( stub.calls(), expected);
    }

    #[test]
    fn empty_report_is_bare_map() {
        // unfiltered scenes may exist - if none passes the filter there is no chart and no mean
        let report = PipelineReport::empty( &request(), 7);
        assert_eq!( report.unfiltered_count, 7);
        assert_eq!( report.composite_count, 0);
        assert_eq!( report.mean_cloudiness, None);
        assert!( report.series.is_empty());
        assert!( !report.has_composite());
    }

    #[test]
    fn composite_result_serde() {
        let empty = CompositeResult::Empty;
        let json = serde_json::to_string( &empty).unwrap();
        assert_eq!( json, r#""Empty""#);

        let image = CompositeResult::Image( CompositeHandle {
            image_id: "composites/4711".to_string(),
            tile_url_template: "https://earthengine.googleapis.com/v1/composites/4711/tiles/{z}/{x}/{y}".to_string(),
        });
        let json = serde_json::to_string( &image).unwrap();
        let back: CompositeResult = serde_json::from_str( &json).unwrap();
        assert_eq!( back, image);
    }
}
