//! The output registry: an insertion-ordered collection of display outputs.
//!
//! The registry always reflects exactly one topology snapshot.  A rebuild
//! constructs the new collection off to the side and swaps it in as a
//! single step, so a reader never observes a half-built registry — it sees
//! either the old complete snapshot or the new one.
//!
//! Registry order is not spatial; the navigation queries derive all
//! ordering from geometry alone.  Query results borrow from the registry
//! and are valid until the next [`OutputRegistry::replace`].

use std::fmt;

use tracing::{trace, warn};

use crate::domain::geometry::{Position, Rect};

/// Server-assigned identifier of an output, unique within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputId(pub u32);

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical display output: identifier plus its rectangle in desktop space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    pub id: OutputId,
    pub rect: Rect,
}

/// Insertion-ordered collection of the currently enabled, connected outputs.
#[derive(Debug, Default)]
pub struct OutputRegistry {
    outputs: Vec<Output>,
}

impl OutputRegistry {
    /// Creates an empty registry.  Every query against it returns `None`.
    pub fn new() -> Self {
        Self { outputs: Vec::new() }
    }

    /// Replaces the entire contents with a new topology snapshot.
    ///
    /// Records that would break the registry invariants are skipped rather
    /// than inserted: rectangles with a zero dimension and ids that already
    /// appeared earlier in the same snapshot.  The surviving records then
    /// replace the old contents in one move.
    pub fn replace(&mut self, snapshot: Vec<Output>) {
        let mut next: Vec<Output> = Vec::with_capacity(snapshot.len());
        for output in snapshot {
            if output.rect.width == 0 || output.rect.height == 0 {
                warn!(
                    "output {} has a degenerate rectangle {:?}, skipping it",
                    output.id, output.rect
                );
                continue;
            }
            if next.iter().any(|existing| existing.id == output.id) {
                warn!(
                    "output {} appears twice in the snapshot, keeping the first record",
                    output.id
                );
                continue;
            }
            next.push(output);
        }
        self.outputs = next;
    }

    /// Returns the first output in registry order whose rectangle contains
    /// `position`, using half-open bounds on both axes.
    ///
    /// Overlapping outputs should not happen under a well-formed topology;
    /// if they do, the first match in registry order wins, which keeps the
    /// answer deterministic.
    pub fn output_at(&self, position: Position) -> Option<&Output> {
        let found = self.outputs.iter().find(|output| output.rect.contains(position));
        if let Some(output) = found {
            trace!(
                "output {} contains position {} / {}",
                output.id, position.x, position.y
            );
        }
        found
    }

    /// Read-only traversal in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Output> {
        self.outputs.iter()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
