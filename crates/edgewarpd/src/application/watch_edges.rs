//! EdgeWatcher: decides whether and where to warp the pointer.
//!
//! The platform event loop samples the pointer and feeds each position
//! through [`EdgeWatcher::observe`].  The watcher locates the containing
//! output, checks whether the pointer is resting on a *dead* edge — one
//! the pointer cannot cross on its own because no output lies directly
//! beyond it — and drives the [`PointerDevice`] port when a warp target
//! exists:
//!
//! 1. bounded search first ([`next_output_in_direction`]), which handles
//!    neighbors whose edges touch but whose spans do not cover the
//!    pointer's row or column;
//! 2. toroidal fallback ([`cycle_output_in_direction`]) when wrapping is
//!    enabled and the desktop boundary has been reached.
//!
//! After a warp fires, the latch suppresses further warps until the
//! pointer has left the edges of its output at least once.

use std::sync::Arc;

use edgewarp_core::{
    cycle_output_in_direction, next_output_in_direction, Direction, Output, OutputRegistry,
    Position, Rect,
};
use tracing::{debug, trace};

/// Port: the physical pointer, as far as this daemon is concerned.
///
/// The production implementation issues the display server's warp request;
/// tests use the recording mock in `infrastructure::pointer`.
pub trait PointerDevice: Send + Sync {
    /// Moves the pointer to an absolute desktop position.
    fn warp_to(&self, position: Position);
}

/// The pointer-tracking use case.
pub struct EdgeWatcher {
    pointer: Arc<dyn PointerDevice>,
    /// Whether to wrap around the desktop like a torus when the bounded
    /// search finds nothing.
    wrap: bool,
    /// Set after a warp so that we prevent further warps until the pointer
    /// left the edge at least once.
    has_warped: bool,
}

impl EdgeWatcher {
    pub fn new(pointer: Arc<dyn PointerDevice>, wrap: bool) -> Self {
        Self { pointer, wrap, has_warped: false }
    }

    /// Feeds one sampled pointer position through the warp decision.
    ///
    /// Returns the destination when a warp was issued, `None` otherwise.
    /// A pointer that is off every output (or an empty registry) is a
    /// no-op apart from releasing the latch.
    pub fn observe(&mut self, registry: &OutputRegistry, position: Position) -> Option<Position> {
        let Some(from) = registry.output_at(position) else {
            self.has_warped = false;
            return None;
        };

        let touched = touched_edges(&from.rect, position);
        if touched.is_empty() {
            self.has_warped = false;
            return None;
        }
        if self.has_warped {
            trace!("pointer still resting on an edge after a warp, not warping again");
            return None;
        }

        for direction in touched {
            // If another output lies directly beyond this edge the pointer
            // can cross on its own; nothing to do for this direction.
            if registry.output_at(step_beyond(position, direction)).is_some() {
                continue;
            }

            let target = next_output_in_direction(registry, from, position, direction)
                .or_else(|| {
                    if self.wrap {
                        cycle_output_in_direction(registry, position, direction)
                    } else {
                        None
                    }
                });

            let Some(target) = target else {
                trace!("no output beyond the {:?} edge of output {}", direction, from.id);
                continue;
            };
            if target.id == from.id {
                // A torus with a single output in this lane wraps onto itself.
                continue;
            }

            let destination = entry_position(target, position, direction);
            debug!(
                "warping pointer from {} / {} to {} / {} on output {}",
                position.x, position.y, destination.x, destination.y, target.id
            );
            self.pointer.warp_to(destination);
            self.has_warped = true;
            return Some(destination);
        }

        None
    }
}

/// Returns the directions in which `position` touches an edge of `rect`.
/// A corner touches two edges; scan order follows [`Direction::ALL`].
fn touched_edges(rect: &Rect, position: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| match direction {
            Direction::Top => position.y == rect.y,
            Direction::Left => position.x == rect.x,
            Direction::Bottom => position.y == rect.bottom() - 1,
            Direction::Right => position.x == rect.right() - 1,
        })
        .collect()
}

/// The position one pixel past `position` in `direction`.
fn step_beyond(position: Position, direction: Direction) -> Position {
    match direction {
        Direction::Top => Position::new(position.x, position.y - 1),
        Direction::Bottom => Position::new(position.x, position.y + 1),
        Direction::Left => Position::new(position.x - 1, position.y),
        Direction::Right => Position::new(position.x + 1, position.y),
    }
}

/// Where the pointer lands on `target`: the edge opposite the travel
/// direction, with the perpendicular coordinate clamped into the target
/// rectangle.
fn entry_position(target: &Output, pointer: Position, direction: Direction) -> Position {
    let rect = &target.rect;
    let clamped_x = pointer.x.clamp(rect.x, rect.right() - 1);
    let clamped_y = pointer.y.clamp(rect.y, rect.bottom() - 1);

    match direction {
        Direction::Top => Position::new(clamped_x, rect.bottom() - 1),
        Direction::Bottom => Position::new(clamped_x, rect.y),
        Direction::Left => Position::new(rect.right() - 1, clamped_y),
        Direction::Right => Position::new(rect.x, clamped_y),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
