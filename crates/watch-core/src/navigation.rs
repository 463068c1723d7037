//! Screen navigator: a finite-state machine over the three watch screens.
//!
//! Transitions happen only on the rising edge of the primary pointer button
//! and only when the press lands inside one of the active screen's arrow
//! regions. Presses anywhere else are ignored.

use log::debug;

use crate::input::PointerState;
use crate::ui::{ArrowDirection, ClickRegion, Screen, Viewport};

/// Left arrow hit box, shared by every screen that has one
pub const LEFT_ARROW_REGION: ClickRegion = ClickRegion::new(-0.9, -0.6, -0.1, 0.1);

/// Right arrow hit box, shared by every screen that has one
pub const RIGHT_ARROW_REGION: ClickRegion = ClickRegion::new(0.6, 0.9, -0.1, 0.1);

/// An outgoing edge of the screen state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavTarget {
    pub region: ClickRegion,
    pub direction: ArrowDirection,
    pub target: Screen,
}

const TIME_TARGETS: [NavTarget; 1] = [NavTarget {
    region: RIGHT_ARROW_REGION,
    direction: ArrowDirection::Right,
    target: Screen::Heart,
}];

const HEART_TARGETS: [NavTarget; 2] = [
    NavTarget {
        region: LEFT_ARROW_REGION,
        direction: ArrowDirection::Left,
        target: Screen::Time,
    },
    NavTarget {
        region: RIGHT_ARROW_REGION,
        direction: ArrowDirection::Right,
        target: Screen::Battery,
    },
];

const BATTERY_TARGETS: [NavTarget; 1] = [NavTarget {
    region: LEFT_ARROW_REGION,
    direction: ArrowDirection::Left,
    target: Screen::Heart,
}];

/// Outgoing transitions of `screen`, checked in order.
pub fn targets(screen: Screen) -> &'static [NavTarget] {
    match screen {
        Screen::Time => &TIME_TARGETS,
        Screen::Heart => &HEART_TARGETS,
        Screen::Battery => &BATTERY_TARGETS,
    }
}

/// A completed screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// Tracks the active screen and the previous button level.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: Screen,
    prev_pressed: bool,
}

impl Navigator {
    /// Start on the time screen with the button released.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    /// Feed this frame's pointer state. Applies at most one transition.
    pub fn handle_pointer(
        &mut self,
        pointer: PointerState,
        viewport: Viewport,
    ) -> Option<Transition> {
        let just_pressed = pointer.pressed && !self.prev_pressed;
        self.prev_pressed = pointer.pressed;

        if !just_pressed {
            return None;
        }

        let point = viewport.pixel_to_ndc(pointer.x, pointer.y);
        let hit = targets(self.active)
            .iter()
            .find(|nav| nav.region.contains(point));

        match hit {
            Some(nav) => {
                let transition = Transition {
                    from: self.active,
                    to: nav.target,
                };
                self.active = nav.target;
                debug!(" Navigating {:?} -> {:?}", transition.from, transition.to);
                Some(transition)
            }
            None => {
                debug!(" Click at {:?} missed every region on {:?}", point, self.active);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(200, 200);

    /// Pixel position of an NDC point on the test viewport.
    fn press_at(x_ndc: f32, y_ndc: f32) -> PointerState {
        PointerState::new((x_ndc + 1.0) * 100.0, (1.0 - y_ndc) * 100.0, true)
    }

    fn release() -> PointerState {
        PointerState::default()
    }

    fn click(nav: &mut Navigator, x_ndc: f32, y_ndc: f32) -> Option<Transition> {
        let result = nav.handle_pointer(press_at(x_ndc, y_ndc), VIEWPORT);
        nav.handle_pointer(release(), VIEWPORT);
        result
    }

    #[test]
    fn test_starts_on_time() {
        assert_eq!(Navigator::new().active(), Screen::Time);
    }

    #[test]
    fn test_time_right_goes_to_heart() {
        let mut nav = Navigator::new();

        let transition = click(&mut nav, 0.75, 0.0);

        assert_eq!(
            transition,
            Some(Transition {
                from: Screen::Time,
                to: Screen::Heart
            })
        );
        assert_eq!(nav.active(), Screen::Heart);
    }

    #[test]
    fn test_time_left_region_is_not_an_edge() {
        let mut nav = Navigator::new();

        assert_eq!(click(&mut nav, -0.75, 0.0), None);
        assert_eq!(nav.active(), Screen::Time);
    }

    #[test]
    fn test_outside_click_is_ignored() {
        let mut nav = Navigator::new();

        assert_eq!(click(&mut nav, 0.0, 0.0), None);
        assert_eq!(click(&mut nav, 0.75, 0.5), None);
        assert_eq!(nav.active(), Screen::Time);
    }

    #[test]
    fn test_heart_transitions() {
        let mut nav = Navigator::new();
        click(&mut nav, 0.75, 0.0);

        click(&mut nav, -0.75, 0.0);
        assert_eq!(nav.active(), Screen::Time);

        click(&mut nav, 0.75, 0.0);
        click(&mut nav, 0.75, 0.0);
        assert_eq!(nav.active(), Screen::Battery);
    }

    #[test]
    fn test_battery_has_no_right_transition() {
        let mut nav = Navigator::new();
        click(&mut nav, 0.75, 0.0);
        click(&mut nav, 0.75, 0.0);
        assert_eq!(nav.active(), Screen::Battery);

        assert_eq!(click(&mut nav, 0.75, 0.0), None);
        assert_eq!(nav.active(), Screen::Battery);

        click(&mut nav, -0.75, 0.0);
        assert_eq!(nav.active(), Screen::Heart);
    }

    #[test]
    fn test_held_button_fires_once() {
        let mut nav = Navigator::new();
        let held = press_at(0.75, 0.0);

        assert!(nav.handle_pointer(held, VIEWPORT).is_some());
        // Still held over Heart's right arrow: no second transition
        assert!(nav.handle_pointer(held, VIEWPORT).is_none());
        assert_eq!(nav.active(), Screen::Heart);
    }

    #[test]
    fn test_press_dragged_into_region_does_not_fire() {
        let mut nav = Navigator::new();

        nav.handle_pointer(press_at(0.0, 0.0), VIEWPORT);
        assert!(nav.handle_pointer(press_at(0.75, 0.0), VIEWPORT).is_none());
        assert_eq!(nav.active(), Screen::Time);
    }

    #[test]
    fn test_region_edges_are_inclusive() {
        let mut nav = Navigator::new();
        // Pixel (160, 100) maps exactly to NDC (0.6, 0.0), the left edge
        let edge = PointerState::new(160.0, 100.0, true);

        assert!(nav.handle_pointer(edge, VIEWPORT).is_some());
    }

    #[test]
    fn test_every_screen_has_regions() {
        for screen in Screen::ALL {
            assert!(!targets(screen).is_empty());
            for nav in targets(screen) {
                assert_ne!(nav.target, screen);
            }
        }
    }
}
