//! Touch identifier tracking
//!
//! Associates raw touch points with the tracked interaction across samples and
//! splits each sample into the points that are active and the points that
//! changed.

use crate::input::types::{InputType, RawSample, TargetId, TouchPoint};
use std::collections::{HashMap, HashSet};

/// Decides whether a touch point originated inside the tracked target element
pub trait TargetScope {
    fn contains(&self, point: &TouchPoint) -> bool;
}

impl<F> TargetScope for F
where
    F: Fn(&TouchPoint) -> bool,
{
    fn contains(&self, point: &TouchPoint) -> bool {
        self(point)
    }
}

/// Accepts every point
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTarget;

impl TargetScope for AnyTarget {
    fn contains(&self, _point: &TouchPoint) -> bool {
        true
    }
}

/// Accepts points whose target is `root` or one of its descendants
///
/// The element tree is described by a child -> parent map supplied by the adapter.
#[derive(Debug, Clone, Default)]
pub struct TargetSubtree {
    root: TargetId,
    parents: HashMap<TargetId, TargetId>,
}

impl TargetSubtree {
    pub fn new(root: TargetId) -> Self {
        Self {
            root,
            parents: HashMap::new(),
        }
    }

    /// Record that `child` is nested directly inside `parent`
    pub fn with_parent(mut self, child: TargetId, parent: TargetId) -> Self {
        self.parents.insert(child, parent);
        self
    }

    fn is_within(&self, target: TargetId) -> bool {
        let mut node = target;
        let mut seen = HashSet::new();
        loop {
            if node == self.root {
                return true;
            }
            // guard against a malformed parent map
            if !seen.insert(node) {
                return false;
            }
            match self.parents.get(&node) {
                Some(parent) => node = *parent,
                None => return false,
            }
        }
    }
}

impl TargetScope for TargetSubtree {
    fn contains(&self, point: &TouchPoint) -> bool {
        point.target.map_or(false, |target| self.is_within(target))
    }
}

/// Points of one sample after identifier resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackedTouches {
    /// Every point belonging to the interaction, including ones lifting in this sample
    pub all: Vec<TouchPoint>,
    /// Points that changed in this sample
    pub changed: Vec<TouchPoint>,
}

impl TrackedTouches {
    /// No pre-existing points: every active point is also a changed one
    pub fn only_changed(&self) -> bool {
        self.all.len() == self.changed.len()
    }
}

pub struct TouchTracker {
    active: HashMap<u64, bool>,
    scope: Box<dyn TargetScope>,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TouchTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchTracker")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::with_scope(AnyTarget)
    }

    pub fn with_scope(scope: impl TargetScope + 'static) -> Self {
        Self {
            active: HashMap::new(),
            scope: Box::new(scope),
        }
    }

    pub fn set_scope(&mut self, scope: impl TargetScope + 'static) {
        self.scope = Box::new(scope);
    }

    pub fn is_tracked(&self, identifier: u64) -> bool {
        self.active.get(&identifier).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.active.values().filter(|active| **active).count()
    }

    pub fn reset(&mut self) {
        self.active.clear();
    }

    /// Resolve which points of `sample` belong to the tracked interaction
    ///
    /// Returns `None` when none of the changed points belong to it.
    pub fn resolve(&mut self, input_type: InputType, sample: &RawSample) -> Option<TrackedTouches> {
        if input_type.is_ongoing() && sample.touches.len() == 1 {
            let only = sample.touches[0];
            self.active.insert(only.identifier, true);
            return Some(TrackedTouches {
                all: vec![only],
                changed: vec![only],
            });
        }

        let target_touches: Vec<TouchPoint> = sample
            .touches
            .iter()
            .filter(|touch| self.scope.contains(touch))
            .copied()
            .collect();

        if input_type == InputType::Start {
            for touch in &target_touches {
                self.active.insert(touch.identifier, true);
            }
        }

        let mut changed = Vec::with_capacity(sample.changed_touches.len());
        for touch in &sample.changed_touches {
            if self.is_tracked(touch.identifier) {
                changed.push(*touch);
            }
            if input_type.is_terminal() {
                self.active.remove(&touch.identifier);
            }
        }

        if changed.is_empty() {
            tracing::trace!(
                "Dropping {} sample: no changed touches belong to the target",
                input_type
            );
            return None;
        }

        let all = unique_by_identifier(target_touches.iter().chain(changed.iter()).copied());
        Some(TrackedTouches { all, changed })
    }
}

/// Deduplicate by identifier (first occurrence wins), ordered by identifier
fn unique_by_identifier(points: impl Iterator<Item = TouchPoint>) -> Vec<TouchPoint> {
    let mut seen = HashSet::new();
    let mut unique: Vec<TouchPoint> = points.filter(|p| seen.insert(p.identifier)).collect();
    unique.sort_by_key(|p| p.identifier);
    unique
}
