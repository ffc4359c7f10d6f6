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

use std::io::Write;
use std::sync::Arc;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use reqwest::{Client,Response,StatusCode};
use serde::{Deserialize,Serialize,de::DeserializeOwned};
use tempfile::NamedTempFile;
use tokio::sync::OnceCell;
use tracing::info;

use crate::{EeConfig,errors::*};

/// authenticated connection to the scene archive. There is one per process,
/// lazily created by [`ee_session`] and shared read-only by all pipeline runs
#[derive(Debug)]
pub struct EeSession {
    config: Arc<EeConfig>,
    client: Client,
    access_token: String,
}

impl EeSession {
    pub fn collection (&self) -> &str {
        self.config.collection.as_str()
    }

    pub fn config (&self) -> &EeConfig {
        self.config.as_ref()
    }

    /// single JSON-in/JSON-out POST round trip against an archive operation endpoint
    pub(crate) async fn post_query<T,U> (&self, op: &str, body: &T) -> Result<U>
        where T: Serialize, U: DeserializeOwned
    {
        let url = format!("{}/{}", self.config.base_url, op);
        let response = self.client.post( &url).bearer_auth( &self.access_token).json( body).send().await?;

        match response.status() {
            StatusCode::OK => from_json( response).await,
            other => Err( query_error( format!("{} failed with status {}", op, other.as_str())))
        }
    }
}

// the reqwest::Response::json() alternative does not preserve enough error information
pub(crate) async fn from_json<T> (response: Response) -> Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err( |e| CapsatEeError::JsonError( e.to_string()))
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    service_account: &'a str,
    private_key: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// credential exchange with the archive. The base64 encoded private key is decoded
/// into a temporary key file that only exists for the duration of the handshake
pub(crate) async fn open_ee_session (config: &EeConfig) -> Result<EeSession> {
    let decoded = B64.decode( config.private_key_b64.as_bytes())
        .map_err( |e| session_init_error( format!("private key decode failed: {e}")))?;

    let mut key_file = NamedTempFile::new()?;
    key_file.write_all( &decoded)?;

    let private_key = std::fs::read_to_string( key_file.path())?;

    let client = Client::builder()
        .timeout( config.timeout)
        .build()?;

    let request = TokenRequest { service_account: config.service_account.as_str(), private_key: private_key.as_str() };
    let url = format!("{}/token", config.base_url);
    let response = client.post( &url).json( &request).send().await
        .map_err( |e| session_init_error( format!("session handshake failed: {e}")))?;

    if response.status() != StatusCode::OK {
        return Err( session_init_error( format!("session handshake rejected with status {}", response.status().as_str())))
    }

    let token: TokenResponse = from_json( response).await?;
    info!("archive session initialized for {}", config.service_account);

    // key_file is dropped (and deleted) here - the credential never outlives the handshake
    Ok( EeSession { config: Arc::new( config.clone()), client, access_token: token.access_token })
}

static EE_SESSION: OnceCell<std::result::Result<Arc<EeSession>,String>> = OnceCell::const_new();

/// the process-wide memoized archive session. The first caller performs the credential
/// exchange, later callers get the cached handle. A failed initialization is terminal -
/// every subsequent call reports the original failure without retrying the handshake
pub async fn ee_session (config: &EeConfig) -> Result<Arc<EeSession>> {
    let cached = EE_SESSION.get_or_init( || async {
        open_ee_session( config).await.map( Arc::new).map_err( |e| e.to_string())
    }).await;

    match cached {
        Ok(session) => Ok( session.clone()),
        Err(msg) => Err( session_init_error( msg))
    }
}
