//! Pointer-driven 3D tilt of cards.

use crate::directive::{Directive, Target};
use crate::layout::{Layout, Rect, Viewport};
use crate::scheduler::{Scheduler, Task, TimerId};

/// Pointer position normalized to [-1, 1] on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Normalize client coordinates against the viewport.
    pub fn from_client(client_x: f64, client_y: f64, viewport: &Viewport) -> Self {
        Self {
            x: client_x / viewport.width * 2.0 - 1.0,
            y: client_y / viewport.height * 2.0 - 1.0,
        }
    }
}

/// Rotation (degrees) around the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt for one element. `None` for degenerate (zero-sized) elements.
pub fn tilt_for(
    pointer: PointerPosition,
    rect: &Rect,
    viewport: &Viewport,
    intensity: f64,
) -> Option<Tilt> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let (center_x, center_y) = rect.center();
    let delta_x = (pointer.x * viewport.width - center_x) / rect.width;
    let delta_y = (pointer.y * viewport.height - center_y) / rect.height;
    Some(Tilt {
        rotate_x: delta_y * intensity,
        rotate_y: delta_x * intensity,
    })
}

/// Tilt every eligible element lying fully inside the viewport.
pub fn apply_mouse_tilt(
    pointer: PointerPosition,
    layout: &Layout,
    intensity: f64,
) -> Vec<Directive> {
    layout
        .tilt_targets
        .iter()
        .enumerate()
        .filter(|(_, rect)| rect.is_inside(&layout.viewport))
        .filter_map(|(index, rect)| {
            tilt_for(pointer, rect, &layout.viewport, intensity).map(|tilt| {
                Directive::style(Target::TiltTarget(index), "transform", tilt.transform())
            })
        })
        .collect()
}

/// Clear every tilt transform (after a resize).
pub fn reset_tilt(layout: &Layout) -> Vec<Directive> {
    (0..layout.tilt_targets.len())
        .map(|index| Directive::clear_style(Target::TiltTarget(index), "transform"))
        .collect()
}

/// Last pointer position and whether the pointer is currently moving.
///
/// The moving flag is informational; tilt is computed on every move
/// regardless of it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: PointerPosition,
    moving: bool,
    idle_timer: Option<TimerId>,
}

impl PointerTracker {
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Record a move and restart the idle timer.
    pub fn on_move(
        &mut self,
        position: PointerPosition,
        scheduler: &mut Scheduler,
        idle_ms: u64,
    ) {
        self.position = position;
        self.moving = true;
        if let Some(timer) = self.idle_timer.take() {
            scheduler.cancel(timer);
        }
        self.idle_timer = Some(scheduler.schedule(idle_ms, Task::PointerIdle));
    }

    pub fn on_idle(&mut self) {
        self.moving = false;
        self.idle_timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 1000.0,
            height: 800.0,
        }
    }

    #[test]
    fn normalizes_client_coordinates() {
        let p = PointerPosition::from_client(500.0, 0.0, &viewport());
        assert_eq!(p, PointerPosition { x: 0.0, y: -1.0 });
        let p = PointerPosition::from_client(1000.0, 800.0, &viewport());
        assert_eq!(p, PointerPosition { x: 1.0, y: 1.0 });
    }

    #[test]
    fn tilt_scales_offset_by_element_size() {
        // center (150, 100), pointer maps to (500, 400)
        let rect = Rect::new(100.0, 50.0, 100.0, 100.0);
        let pointer = PointerPosition { x: 0.5, y: 0.5 };
        let tilt = tilt_for(pointer, &rect, &viewport(), 5.0).unwrap();
        assert_eq!(tilt.rotate_y, (500.0 - 150.0) / 100.0 * 5.0);
        assert_eq!(tilt.rotate_x, (400.0 - 100.0) / 100.0 * 5.0);
        assert!(tilt.transform().starts_with("perspective(1000px) rotateX(15deg)"));
    }

    #[test]
    fn zero_sized_elements_are_skipped() {
        let rect = Rect::new(10.0, 10.0, 0.0, 20.0);
        assert_eq!(tilt_for(PointerPosition::default(), &rect, &viewport(), 5.0), None);
    }

    #[test]
    fn only_fully_visible_targets_tilt() {
        let layout = Layout {
            viewport: viewport(),
            tilt_targets: vec![
                Rect::new(10.0, 10.0, 100.0, 100.0),
                Rect::new(10.0, 750.0, 100.0, 100.0),
                Rect::new(300.0, 300.0, 100.0, 100.0),
            ],
            ..Layout::default()
        };
        let directives = apply_mouse_tilt(PointerPosition::default(), &layout, 5.0);
        let targets: Vec<_> = directives.iter().filter_map(Directive::target).collect();
        assert_eq!(targets, vec![Target::TiltTarget(0), Target::TiltTarget(2)]);
    }

    #[test]
    fn idle_timer_restarts_on_every_move() {
        let mut scheduler = Scheduler::new();
        let mut tracker = PointerTracker::default();

        tracker.on_move(PointerPosition::default(), &mut scheduler, 100);
        scheduler.set_now(60);
        tracker.on_move(PointerPosition { x: 0.2, y: 0.1 }, &mut scheduler, 100);
        assert!(tracker.is_moving());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.next_due(), Some(160));

        assert_eq!(scheduler.pop_due(160), Some(Task::PointerIdle));
        tracker.on_idle();
        assert!(!tracker.is_moving());
        assert_eq!(tracker.position(), PointerPosition { x: 0.2, y: 0.1 });
    }
}
