//! Integration scenarios exercising the registry and the query engine
//! together, the way the daemon drives them: rebuild once, then answer a
//! series of directional queries against the snapshot.

use edgewarp_core::{
    cycle_output_in_direction, next_output_in_direction, Direction, Output, OutputId,
    OutputRegistry, Position, Rect,
};

fn output(id: u32, x: i32, y: i32, width: u32, height: u32) -> Output {
    Output {
        id: OutputId(id),
        rect: Rect::new(x, y, width, height),
    }
}

// ── Side-by-side dual-head scenario ──────────────────────────────────────────

#[test]
fn test_dual_head_side_by_side_navigation() {
    let left = output(1, 0, 0, 1920, 1080);
    let right = output(2, 1920, 0, 1920, 1080);

    let mut registry = OutputRegistry::new();
    registry.replace(vec![left, right]);

    // The pointer sits on the last column of the left output.
    let pointer = Position::new(1919, 540);
    let containing = registry.output_at(pointer).expect("pointer is on the left output");
    assert_eq!(containing.id, OutputId(1));

    // Bounded search to the right finds the right output.
    let next = next_output_in_direction(&registry, containing, pointer, Direction::Right);
    assert_eq!(next.map(|o| o.id), Some(OutputId(2)));

    // And back again from the right output's first column.
    let pointer_right = Position::new(1920, 540);
    let containing_right = registry.output_at(pointer_right).expect("on the right output");
    assert_eq!(containing_right.id, OutputId(2));
    let back =
        next_output_in_direction(&registry, containing_right, pointer_right, Direction::Left);
    assert_eq!(back.map(|o| o.id), Some(OutputId(1)));

    // Leftwards from the left output is the desktop boundary.
    let boundary = next_output_in_direction(&registry, containing, pointer, Direction::Left);
    assert!(boundary.is_none());

    // Toroidal search wraps past that boundary onto the right output.
    let wrapped = cycle_output_in_direction(&registry, pointer, Direction::Left);
    assert_eq!(wrapped.map(|o| o.id), Some(OutputId(2)));
}

// ── Uneven heights: the classic dead-edge setup ──────────────────────────────

#[test]
fn test_uneven_heights_bounded_search_still_finds_the_short_neighbor() {
    // A tall output on the left, a shorter one top-aligned on the right.
    // The strict adjacency test only compares edge coordinates, so the
    // short neighbor is found even for pointer rows below its span; the
    // caller decides where on it to land.
    let tall = output(1, 0, 0, 1920, 2160);
    let short = output(2, 1920, 0, 1920, 1080);

    let mut registry = OutputRegistry::new();
    registry.replace(vec![tall, short]);

    let pointer = Position::new(1919, 1800); // below the short output's span
    let next = next_output_in_direction(&registry, &tall, pointer, Direction::Right);
    assert_eq!(next.map(|o| o.id), Some(OutputId(2)));
}

#[test]
fn test_uneven_heights_cycle_respects_the_pointer_row() {
    let tall = output(1, 0, 0, 1920, 2160);
    let short = output(2, 1920, 0, 1920, 1080);

    let mut registry = OutputRegistry::new();
    registry.replace(vec![tall, short]);

    // At a row both outputs cover, wrapping left lands on the right-most.
    let aligned = Position::new(0, 540);
    let wrapped = cycle_output_in_direction(&registry, aligned, Direction::Left);
    assert_eq!(wrapped.map(|o| o.id), Some(OutputId(2)));

    // Below the short output's span only the tall output is eligible, and
    // wrapping from its own left edge comes back to itself.
    let low = Position::new(0, 1800);
    let wrapped = cycle_output_in_direction(&registry, low, Direction::Left);
    assert_eq!(wrapped.map(|o| o.id), Some(OutputId(1)));
}

// ── Rebuild between queries ──────────────────────────────────────────────────

#[test]
fn test_queries_after_rebuild_only_see_the_new_snapshot() {
    let mut registry = OutputRegistry::new();
    registry.replace(vec![output(1, 0, 0, 1920, 1080), output(2, 1920, 0, 1920, 1080)]);

    // Resolution change: a single larger output replaces both.
    registry.replace(vec![output(3, 0, 0, 3840, 2160)]);

    let pointer = Position::new(1919, 540);
    let containing = registry.output_at(pointer).expect("must be on the new output");
    assert_eq!(containing.id, OutputId(3));

    assert!(
        next_output_in_direction(&registry, containing, pointer, Direction::Right).is_none()
    );
    let wrapped = cycle_output_in_direction(&registry, pointer, Direction::Right);
    assert_eq!(wrapped.map(|o| o.id), Some(OutputId(3)), "torus of one output wraps onto itself");
}
