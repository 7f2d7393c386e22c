//! Directional navigation queries over the output registry.
//!
//! Everything here is a pure function of the registry contents and the
//! inputs: no state is retained between calls, and the registry is never
//! mutated during a query.  Results borrow from the registry.
//!
//! Two search flavours exist.  The *bounded* search answers "what output
//! is beyond this edge, if any" and returns `None` at the physical
//! boundary of the desktop.  The *toroidal* search treats the outputs as
//! tiling a torus and finds the output on the far opposite side, which is
//! what edge wrapping uses once the bounded search has come up empty.

use crate::domain::geometry::{Direction, Position};
use crate::domain::registry::{Output, OutputRegistry};

/// Returns `true` iff `second` lies immediately beyond `first`'s edge in
/// `direction`, touching it with zero gap.
///
/// Intentionally strict: overlapping or gapped outputs are never
/// neighbors.  Bottom and Right are defined by swapping the operands onto
/// the Top and Left tests, which makes the predicate symmetric:
/// `neighbors_in_direction(a, b, Bottom) == neighbors_in_direction(b, a, Top)`.
pub fn neighbors_in_direction(first: &Output, second: &Output, direction: Direction) -> bool {
    match direction {
        Direction::Top => second.rect.bottom() == first.rect.y,
        Direction::Left => second.rect.right() == first.rect.x,
        Direction::Bottom => neighbors_in_direction(second, first, Direction::Top),
        Direction::Right => neighbors_in_direction(second, first, Direction::Left),
    }
}

/// Picks whichever of the two candidates is closer to `pointer` along the
/// axis perpendicular to `direction`.
///
/// An absent candidate acts as the identity element, so
/// [`next_output_in_direction`] can fold every output through this metric.
/// On a tie the first candidate wins, keeping the result stable under the
/// traversal order.
pub fn closer_to<'a>(
    pointer: Position,
    direction: Direction,
    first: Option<&'a Output>,
    second: Option<&'a Output>,
) -> Option<&'a Output> {
    let (first, second) = match (first, second) {
        (None, second) => return second,
        (first, None) => return first,
        (Some(first), Some(second)) => (first, second),
    };

    let distance = |output: &Output| -> i32 {
        let rect = &output.rect;
        match direction {
            Direction::Top | Direction::Bottom => {
                // Horizontal axis: nearer of the left edge and the last column.
                (pointer.x - rect.x)
                    .abs()
                    .min((pointer.x - (rect.right() - 1)).abs())
            }
            Direction::Left | Direction::Right => {
                // Vertical axis: the top edge and the exclusive bottom edge.
                (pointer.y - rect.y).abs().min((pointer.y - rect.bottom()).abs())
            }
        }
    };

    if distance(second) < distance(first) {
        Some(second)
    } else {
        Some(first)
    }
}

/// Returns the best output adjacent to `from` in `direction`, or `None`
/// when the physical boundary of the desktop has been reached.
///
/// `pointer` must lie within `from`'s rectangle (caller responsibility);
/// it is only used to break ties between multiple adjacent outputs.
pub fn next_output_in_direction<'a>(
    registry: &'a OutputRegistry,
    from: &Output,
    pointer: Position,
    direction: Direction,
) -> Option<&'a Output> {
    registry
        .iter()
        .filter(|candidate| neighbors_in_direction(from, candidate, direction))
        .fold(None, |best, candidate| {
            closer_to(pointer, direction, best, Some(candidate))
        })
}

/// Returns the next output in `direction` assuming the outputs form a
/// torus, i.e. it actually looks on the far opposite side.
///
/// Only outputs whose span along the perpendicular axis contains the
/// pointer coordinate are eligible.  Wrapping towards the top picks the
/// eligible output with the greatest bottom edge, wrapping towards the
/// bottom the one with the smallest top edge; Left/Right mirror this on
/// the x axis.  Comparisons are strict, so ties keep the first output
/// encountered in traversal order.
pub fn cycle_output_in_direction<'a>(
    registry: &'a OutputRegistry,
    pointer: Position,
    direction: Direction,
) -> Option<&'a Output> {
    let mut best: Option<&Output> = None;

    for output in registry.iter() {
        let rect = &output.rect;
        let eligible = match direction {
            Direction::Top | Direction::Bottom => rect.x <= pointer.x && pointer.x < rect.right(),
            Direction::Left | Direction::Right => rect.y <= pointer.y && pointer.y < rect.bottom(),
        };
        if !eligible {
            continue;
        }

        let replaces = match (direction, best) {
            (_, None) => true,
            (Direction::Top, Some(current)) => rect.bottom() > current.rect.bottom(),
            (Direction::Bottom, Some(current)) => rect.y < current.rect.y,
            (Direction::Left, Some(current)) => rect.right() > current.rect.right(),
            (Direction::Right, Some(current)) => rect.x < current.rect.x,
        };
        if replaces {
            best = Some(output);
        }
    }

    best
}
