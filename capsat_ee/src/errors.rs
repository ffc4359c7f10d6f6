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

use thiserror::Error;
use reqwest;

pub type Result<T> = std::result::Result<T, CapsatEeError>;

#[derive(Error,Debug)]
pub enum CapsatEeError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] capsat_common::config::ConfigError),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("JSON error {0}")]
    JsonError( String ),

    /// credential decode or archive session handshake failed - terminal for the process
    #[error("session init error {0}")]
    SessionInitError( String ),

    /// a remote count/list/aggregate/composite call failed - terminal for the current run
    #[error("archive query error {0}")]
    QueryError( String ),
}

pub fn query_error (msg: impl ToString)->CapsatEeError {
    CapsatEeError::QueryError(msg.to_string())
}

pub fn session_init_error (msg: impl ToString)->CapsatEeError {
    CapsatEeError::SessionInitError(msg.to_string())
}
