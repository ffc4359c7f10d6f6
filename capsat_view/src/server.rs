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

//! the presentation adapter: a small axum server that turns user inputs into one
//! pipeline run per request and hands the classified series / composite handle to
//! the browser-side chart and map

use std::sync::Arc;
use axum::{
    Router,
    extract::{Query,State},
    http::StatusCode,
    response::{Html,IntoResponse,Json,Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize,Serialize};
use tracing::warn;

use capsat_common::datetime::DateRange;
use capsat_ee::{CapsatEeError,CompositeResult,EeSession,PipelineReport,PipelineRequest,VisParams,run_pipeline};

use crate::capitals::{Capital,EUROPEAN_CAPITALS,find_capital};

const INDEX_HTML: &'static str = include_str!("../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<EeSession>,
}

pub fn build_router (session: Arc<EeSession>) -> Router {
    Router::new()
        .route( "/", get( get_index))
        .route( "/capitals", get( get_capitals))
        .route( "/query", get( get_query))
        .with_state( AppState { session })
}

async fn get_index () -> Html<&'static str> {
    Html( INDEX_HTML)
}

async fn get_capitals () -> Json<&'static [Capital]> {
    Json( EUROPEAN_CAPITALS)
}

#[derive(Deserialize,Debug)]
pub struct QueryParams {
    pub city: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub max_cloud: u8,
}

#[derive(Serialize,Debug)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub report: PipelineReport,

    /// tile URL template for the resolved composite, display params applied
    pub tile_url: Option<String>,

    /// empty-composite warning - not an error, the client renders a bare map
    pub warning: Option<String>,
}

/// the per-request end of the widget layer's validation: the city has to be one of
/// the enumerated capitals and the slider range is re-checked server side
pub fn validate_params (params: &QueryParams) -> Result<(&'static Capital,PipelineRequest),(StatusCode,String)> {
    let capital = find_capital( params.city.as_str())
        .ok_or( (StatusCode::NOT_FOUND, format!("unknown capital: {}", params.city)))?;

    if params.max_cloud < 1 || params.max_cloud > 100 {
        return Err( (StatusCode::BAD_REQUEST, format!("max_cloud not in [1..100]: {}", params.max_cloud)))
    }

    let request = PipelineRequest {
        name: capital.name.to_string(),
        bounds: capital.area_of_interest(),
        dates: DateRange::new( params.start, params.end),
        max_cloudiness: params.max_cloud,
    };
    Ok( (capital, request))
}

pub fn empty_composite_warning (name: &str, max_cloudiness: u8) -> String {
    format!("No Sentinel-2 images found for {} that meet the {}% max cloudiness filter. \
             Try expanding the date range or increasing the cloud filter.", name, max_cloudiness)
}

fn to_response (report: PipelineReport) -> QueryResponse {
    let tile_url = match &report.composite {
        CompositeResult::Image(handle) => Some( handle.tile_url( &VisParams::default())),
        CompositeResult::Empty => None,
    };
    let warning = if report.composite.is_empty() {
        Some( empty_composite_warning( report.name.as_str(), report.max_cloudiness))
    } else {
        None
    };
    QueryResponse { report, tile_url, warning }
}

async fn get_query (State(state): State<AppState>, Query(params): Query<QueryParams>) -> Response {
    let (_capital, request) = match validate_params( &params) {
        Ok(v) => v,
        Err((status,msg)) => return (status, msg).into_response()
    };

    match run_pipeline( &state.session, &request).await {
        Ok(report) => Json( to_response( report)).into_response(),
        Err(e) => {
            // terminal for this run only - the next input change starts a fresh one
            warn!("pipeline run for {} failed: {}", request.name, e);
            let status = match e {
                CapsatEeError::SessionInitError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_GATEWAY
            };
            (status, e.to_string()).into_response()
        }
    }
}
