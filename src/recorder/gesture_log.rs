//! Gesture log
//!
//! Collects emitted gesture notifications so they can be inspected or
//! written out as JSON after an interaction.

use crate::error::GestureResult;
use crate::manager::GestureEvent;
use crate::processing::{Direction, Point};
use crate::recognizer::{RecognizerId, RecognizerState};
use parking_lot::Mutex as ParkingMutex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// One emitted notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureRecord {
    /// Full event name, e.g. "panend"
    pub name: String,
    pub recognizer: RecognizerId,
    pub state: RecognizerState,
    pub timestamp_ms: f64,
    pub center: Option<Point>,
    pub direction: Direction,
}

impl From<&GestureEvent<'_>> for GestureRecord {
    fn from(event: &GestureEvent<'_>) -> Self {
        Self {
            name: event.name.to_string(),
            recognizer: event.recognizer,
            state: event.state,
            timestamp_ms: event.input.timestamp_ms,
            center: event.input.center,
            direction: event.input.direction,
        }
    }
}

/// Shared, cloneable buffer of gesture records
///
/// The buffer is `Arc`-backed so clones can be read or flushed from another thread.
#[derive(Debug, Clone, Default)]
pub struct GestureLog {
    records: Arc<ParkingMutex<Vec<GestureRecord>>>,
}

impl GestureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler suitable for `Manager::on`
    pub fn handler(&self) -> impl FnMut(&GestureEvent<'_>) + 'static {
        let records = Arc::clone(&self.records);
        move |event: &GestureEvent<'_>| records.lock().push(GestureRecord::from(event))
    }

    pub fn records(&self) -> Vec<GestureRecord> {
        self.records.lock().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Write every record to `path` as pretty JSON
    pub fn flush_to(&self, path: &Path) -> GestureResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&*self.records.lock())?;
        std::fs::write(path, data)?;

        tracing::info!("Wrote {} gesture records to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputType, RawSample, TouchPoint};
    use crate::manager::Manager;
    use crate::recognizer::testing::Scripted;
    use crate::recognizer::Recognizer;
    use RecognizerState::*;

    fn tap_manager(log: &GestureLog) -> Manager {
        let mut manager = Manager::new();
        let (tap, _) = Scripted::new([Possible, Recognized]);
        manager.add(Recognizer::new("tap", tap));
        manager.on("tap tapend", log.handler());
        manager
    }

    fn tap(manager: &mut Manager) {
        let finger = TouchPoint::new(1, 12.0, 8.0);
        manager.handle(InputType::Start, &RawSample::new(0.0, vec![finger], vec![finger]));
        manager.handle(InputType::End, &RawSample::new(90.0, Vec::new(), vec![finger]));
    }

    #[test]
    fn test_collects_emitted_notifications() {
        let log = GestureLog::new();
        let mut manager = tap_manager(&log);

        tap(&mut manager);

        assert_eq!(log.names(), vec!["tap", "tapend"]);
        let records = log.records();
        assert_eq!(records[0].state, Recognized);
        assert_eq!(records[0].timestamp_ms, 90.0);
        assert_eq!(records[0].center, Some(Point::new(12.0, 8.0)));
        assert_eq!(records[0].recognizer, manager.get("tap").unwrap().id());

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_flush_to_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("gestures.json");
        let log = GestureLog::new();
        let mut manager = tap_manager(&log);
        tap(&mut manager);

        log.flush_to(&path).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let written: Vec<GestureRecord> = serde_json::from_str(&data).unwrap();
        assert_eq!(written, log.records());
        assert!(data.contains("\"timestampMs\""));
    }

    #[test]
    fn test_clone_is_readable_from_another_thread() {
        let log = GestureLog::new();
        let mut manager = tap_manager(&log);
        tap(&mut manager);

        let reader = log.clone();
        let names = std::thread::spawn(move || reader.names()).join().unwrap();

        assert_eq!(names, vec!["tap", "tapend"]);
    }
}
