//! Per-marker hover state.

use bevy::prelude::*;

use crate::config::MARKER_HOVER_SCALE;

/// Pointer transitions that drive [`MarkerHover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTransition {
    Enter,
    Leave,
}

/// Hover state, stored on each marker entity.
///
/// Markers do not coordinate: if the picking backend reports the pointer
/// over two markers at once, both are `Hovered`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerHover {
    #[default]
    Idle,
    Hovered,
}

impl MarkerHover {
    pub fn apply(&mut self, transition: PointerTransition) {
        *self = match transition {
            PointerTransition::Enter => MarkerHover::Hovered,
            PointerTransition::Leave => MarkerHover::Idle,
        };
    }

    pub fn is_hovered(self) -> bool {
        self == MarkerHover::Hovered
    }

    /// Uniform scale of the marker mesh in this state.
    pub fn scale(self) -> f32 {
        match self {
            MarkerHover::Idle => 1.0,
            MarkerHover::Hovered => MARKER_HOVER_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_leave() {
        let mut hover = MarkerHover::default();
        hover.apply(PointerTransition::Enter);
        assert!(hover.is_hovered());
        hover.apply(PointerTransition::Leave);
        assert_eq!(hover, MarkerHover::Idle);
    }

    #[test]
    fn test_repeated_enter_leave_pairs_end_idle() {
        let mut hover = MarkerHover::default();
        for _ in 0..25 {
            hover.apply(PointerTransition::Enter);
            hover.apply(PointerTransition::Leave);
        }
        assert_eq!(hover, MarkerHover::Idle);
    }

    #[test]
    fn test_leave_while_idle_stays_idle() {
        let mut hover = MarkerHover::Idle;
        hover.apply(PointerTransition::Leave);
        assert_eq!(hover, MarkerHover::Idle);
    }

    #[test]
    fn test_double_enter_stays_hovered() {
        let mut hover = MarkerHover::Idle;
        hover.apply(PointerTransition::Enter);
        hover.apply(PointerTransition::Enter);
        assert_eq!(hover, MarkerHover::Hovered);
    }

    #[test]
    fn test_scale() {
        assert_eq!(MarkerHover::Idle.scale(), 1.0);
        assert_eq!(MarkerHover::Hovered.scale(), 1.5);
    }

    #[test]
    fn test_markers_are_independent() {
        let mut a = MarkerHover::Idle;
        let mut b = MarkerHover::Idle;
        a.apply(PointerTransition::Enter);
        b.apply(PointerTransition::Enter);
        a.apply(PointerTransition::Leave);
        assert_eq!(a, MarkerHover::Idle);
        assert_eq!(b, MarkerHover::Hovered);
    }
}
