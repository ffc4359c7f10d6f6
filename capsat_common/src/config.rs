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

//! RON config file support. Config structs are instantiated from named files in the
//! workspace config dir, which is resolved as `$CAPSAT_ROOT/configs` with a fallback
//! to `./configs`

use std::{env,fs,path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config parse error {0}")]
    ParseError( #[from] ron::error::SpannedError),

    #[error("no such config file {0}")]
    NotFound( String ),
}

const CONFIGS: &'static str = "configs";

/// the directory in which named config files are looked up
pub fn config_dir () -> PathBuf {
    match env::var("CAPSAT_ROOT") {
        Ok(root) => Path::new( root.as_str()).join( CONFIGS),
        Err(_) => PathBuf::from( CONFIGS)
    }
}

pub fn config_path (file_name: &str) -> PathBuf {
    config_dir().join( file_name)
}

/// instantiate a config struct from a named RON file in the config dir
pub fn load_config<C> (file_name: &str) -> Result<C> where C: DeserializeOwned {
    let path = config_path( file_name);
    if !path.is_file() {
        return Err( ConfigError::NotFound( path.to_string_lossy().to_string()))
    }

    let input = fs::read_to_string( &path)?;
    Ok( ron::from_str( input.as_str())?)
}

/// instantiate a config struct from an explicitly given RON file
pub fn load_config_from<C> (path: impl AsRef<Path>) -> Result<C> where C: DeserializeOwned {
    let path = path.as_ref();
    if !path.is_file() {
        return Err( ConfigError::NotFound( path.to_string_lossy().to_string()))
    }

    let input = fs::read_to_string( path)?;
    Ok( ron::from_str( input.as_str())?)
}
