//! Touch-action hint aggregation
//!
//! Collapses the hints of every enabled recognizer into the single value the
//! rendering layer applies to the tracked element.

use crate::recognizer::TouchAction;

/// Clean a list of hints into one touch-action value
///
/// `none` wins over everything. Both pan axes combine, a single pan axis
/// stands alone, then `manipulation`, then `auto`.
pub fn clean_touch_actions(actions: &[TouchAction]) -> String {
    let has = |action: TouchAction| actions.contains(&action);

    if has(TouchAction::None) {
        return TouchAction::None.to_string();
    }

    match (has(TouchAction::PanX), has(TouchAction::PanY)) {
        (true, true) => format!("{} {}", TouchAction::PanX, TouchAction::PanY),
        (true, false) => TouchAction::PanX.to_string(),
        (false, true) => TouchAction::PanY.to_string(),
        (false, false) if has(TouchAction::Manipulation) => TouchAction::Manipulation.to_string(),
        (false, false) => TouchAction::Auto.to_string(),
    }
}
