//! Sample recordings
//!
//! A recording is a JSON list of raw samples, each tagged with its input
//! type, that can be replayed through a `Manager`.

use crate::error::GestureResult;
use crate::input::{InputType, RawSample};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded raw sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSample {
    pub input_type: InputType,
    #[serde(flatten)]
    pub sample: RawSample,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleRecording {
    pub samples: Vec<RecordedSample>,
}

impl SampleRecording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input_type: InputType, sample: RawSample) {
        self.samples.push(RecordedSample { input_type, sample });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn from_json_str(json: &str) -> GestureResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> GestureResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let recording = Self::from_json_str(&data)?;
        tracing::debug!("Loaded {} samples from {}", recording.len(), path.display());
        Ok(recording)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::Manager;
    use crate::processing::Point;

    const DRAG: &str = r#"[
        {"inputType": "start", "timestampMs": 0,
         "touches": [{"identifier": 1, "x": 0, "y": 0}],
         "changedTouches": [{"identifier": 1, "x": 0, "y": 0}]},
        {"inputType": "move", "timestampMs": 20,
         "touches": [{"identifier": 1, "x": 30, "y": 0}],
         "changedTouches": [{"identifier": 1, "x": 30, "y": 0}]},
        {"inputType": "end", "timestampMs": 40,
         "touches": [],
         "changedTouches": [{"identifier": 1, "x": 30, "y": 10}]}
    ]"#;

    #[test]
    fn test_parse_recording() {
        let recording = SampleRecording::from_json_str(DRAG).unwrap();
        assert_eq!(recording.len(), 3);
        assert_eq!(recording.samples[2].input_type, InputType::End);
        assert!(recording.samples[2].sample.touches.is_empty());
        assert_eq!(recording.samples[1].sample.timestamp_ms, 20.0);
    }

    #[test]
    fn test_replay_through_manager() {
        let recording = SampleRecording::from_json_str(DRAG).unwrap();
        let mut manager = Manager::new();

        let inputs = manager.replay(&recording);

        assert_eq!(inputs.len(), 3);
        assert!(inputs[0].is_first);
        assert!(inputs[2].is_final);
        assert_eq!(inputs[1].velocity.map(|v| v.x), Some(1.5));
        assert_eq!(inputs[2].center, Some(Point::new(30.0, 10.0)));
        assert_eq!(inputs[2].elapsed_ms, 40.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SampleRecording::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::error::GestureError::Io(_)));
    }
}
