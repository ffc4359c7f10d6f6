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

use serde::{Deserialize,Serialize};

use crate::SceneRecord;

/// scene classification relative to the user's cloudiness threshold
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="UPPERCASE")]
pub enum CloudLabel {
    Under,
    Over,
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct ClassifiedScene {
    #[serde(flatten)]
    pub scene: SceneRecord,
    pub label: CloudLabel,
}

/// scenes of the unfiltered view, ordered by non-decreasing acquisition time,
/// each labeled against the cloudiness threshold
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ClassifiedSeries( Vec<ClassifiedScene> );

impl ClassifiedSeries {
    pub fn empty () -> Self {
        ClassifiedSeries( Vec::new())
    }

    pub fn len (&self) -> usize { self.0.len() }

    pub fn is_empty (&self) -> bool { self.0.is_empty() }

    pub fn iter (&self) -> std::slice::Iter<'_,ClassifiedScene> { self.0.iter() }

    pub fn as_slice (&self) -> &[ClassifiedScene] { self.0.as_slice() }
}

/// label every scene of the unfiltered view against the cloudiness threshold.
///
/// Scenes are stably sorted by ascending acquisition time (equal timestamps keep
/// their query order). A scene is `Under` iff `cloudiness <= threshold` - the bound
/// is inclusive while the composite view filter is a strict less-than, so a scene
/// exactly at the threshold shows as `Under` in the series but is not part of the
/// composite. That asymmetry is intentional.
pub fn classify_scenes (mut scenes: Vec<SceneRecord>, max_cloudiness: u8) -> ClassifiedSeries {
    scenes.sort_by_key( |s| s.time_start); // stable

    let threshold = max_cloudiness as f64;
    let classified = scenes.into_iter().map( |scene| {
        let label = if scene.cloudiness <= threshold { CloudLabel::Under } else { CloudLabel::Over };
        ClassifiedScene { scene, label }
    }).collect();

    ClassifiedSeries( classified)
}
