//! Release decision: distance and velocity thresholds

use serde::{Deserialize, Serialize};

use crate::config::SwipeConfig;

/// Page change requested by a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Toward the first item (finger moved right).
    Retreat,
    /// Toward the last item (finger moved left).
    Advance,
}

impl SwipeDirection {
    /// Apply one step from `start` and clamp into `[0, len - 1]`.
    /// Returns `start` unchanged for an empty list.
    pub fn step(self, start: usize, len: usize) -> usize {
        if len == 0 {
            return start;
        }
        let last = len - 1;
        match self {
            Self::Retreat => start.saturating_sub(1).min(last),
            Self::Advance => start.saturating_add(1).min(last),
        }
    }
}

/// Decide the direction of a released drag.
///
/// Either the travelled distance (a fraction of the container width) or the
/// release velocity (px/ms) satisfies a direction. Retreat is evaluated
/// first and wins when both directions are satisfied.
pub fn decide_direction(
    delta_x: f32,
    velocity_x: f32,
    container_width: f32,
    cfg: &SwipeConfig,
) -> Option<SwipeDirection> {
    let distance = container_width * cfg.change_index_fraction;
    let velocity = cfg.velocity_threshold;

    if delta_x > distance || velocity_x > velocity {
        Some(SwipeDirection::Retreat)
    } else if delta_x < -distance || velocity_x < -velocity {
        Some(SwipeDirection::Advance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SwipeConfig {
        SwipeConfig::default()
    }

    #[test]
    fn test_distance_only_trigger() {
        assert_eq!(
            decide_direction(151.0, 0.0, 300.0, &cfg()),
            Some(SwipeDirection::Retreat)
        );
        assert_eq!(
            decide_direction(-151.0, 0.0, 300.0, &cfg()),
            Some(SwipeDirection::Advance)
        );
    }

    #[test]
    fn test_velocity_only_trigger() {
        assert_eq!(
            decide_direction(10.0, 0.6, 300.0, &cfg()),
            Some(SwipeDirection::Retreat)
        );
        assert_eq!(
            decide_direction(-10.0, -0.6, 300.0, &cfg()),
            Some(SwipeDirection::Advance)
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(decide_direction(150.0, 0.0, 300.0, &cfg()), None);
        assert_eq!(decide_direction(0.0, 0.5, 300.0, &cfg()), None);
        assert_eq!(decide_direction(-150.0, -0.5, 300.0, &cfg()), None);
    }

    #[test]
    fn test_no_trigger() {
        assert_eq!(decide_direction(100.0, 0.2, 300.0, &cfg()), None);
        assert_eq!(decide_direction(0.0, 0.0, 300.0, &cfg()), None);
    }

    #[test]
    fn test_retreat_wins_when_both_satisfied() {
        // Dragged well to the right, then flung back to the left
        assert_eq!(
            decide_direction(200.0, -0.9, 300.0, &cfg()),
            Some(SwipeDirection::Retreat)
        );
    }

    #[test]
    fn test_step_clamps() {
        assert_eq!(SwipeDirection::Retreat.step(0, 3), 0);
        assert_eq!(SwipeDirection::Retreat.step(2, 3), 1);
        assert_eq!(SwipeDirection::Advance.step(2, 3), 2);
        assert_eq!(SwipeDirection::Advance.step(0, 3), 1);
        assert_eq!(SwipeDirection::Advance.step(0, 0), 0);
        // A start beyond a shrunk list is pulled back into range
        assert_eq!(SwipeDirection::Retreat.step(9, 3), 2);
    }
}
