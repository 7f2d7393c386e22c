//! OutputSynchronizer: rebuilds the output registry from a topology source.
//!
//! The synchronizer sits between a [`TopologySource`] (the port a live
//! display-server adapter implements) and the registry.  A refresh either
//! replaces the whole registry with a freshly validated snapshot or leaves
//! it untouched:
//!
//! - per-output failures (disconnected output, unresolved geometry) are
//!   logged and skipped, never aborting the rest of the rebuild;
//! - a failure of the topology query itself propagates to the caller and
//!   preserves the previous registry contents (last-known-good);
//! - when a fixed output list is configured, the registry is seeded once
//!   and all later refreshes are no-ops.

use std::sync::Arc;

use edgewarp_core::{Output, OutputId, OutputRegistry, Rect};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for topology queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// The topology snapshot itself could not be obtained at all.  There is
    /// no meaningful partial state to fall back on, so at startup this is
    /// treated as fatal by the binary.
    #[error("topology query failed: {0}")]
    QueryFailed(String),
}

/// One output as reported by a topology source, before resolution.
#[derive(Debug, Clone)]
pub struct OutputProbe {
    /// Server-assigned output identifier.
    pub id: u32,
    /// `false` when the output is disabled or disconnected.
    pub connected: bool,
    /// Resolved geometry; `None` when the source could not obtain it
    /// (e.g. missing CRTC information).
    pub geometry: Option<Rect>,
}

/// Port: something that can report the current monitor topology.
///
/// The production implementation talks to the display server's RandR
/// subsystem; tests use the scripted mock in `infrastructure::topology`.
pub trait TopologySource: Send + Sync {
    /// Queries the complete set of outputs in one consistent snapshot.
    fn query_outputs(&self) -> Result<Vec<OutputProbe>, TopologyError>;
}

enum SyncMode {
    /// Query the topology source on every refresh.
    Live(Arc<dyn TopologySource>),
    /// Seed the registry once from a static list, then ignore refreshes.
    Fixed(Vec<Output>),
}

/// The registry rebuild use case.
pub struct OutputSynchronizer {
    mode: SyncMode,
    seeded: bool,
}

impl OutputSynchronizer {
    /// Creates a synchronizer that queries `source` on every refresh.
    pub fn live(source: Arc<dyn TopologySource>) -> Self {
        Self { mode: SyncMode::Live(source), seeded: false }
    }

    /// Creates a synchronizer backed by a fixed output list.  Topology
    /// queries are suppressed entirely; the registry is populated from
    /// `outputs` on the first refresh and untouched afterwards.
    pub fn fixed(outputs: Vec<Output>) -> Self {
        Self { mode: SyncMode::Fixed(outputs), seeded: false }
    }

    /// Refreshes `registry` from the configured source.
    ///
    /// The new snapshot fully replaces the old contents in a single step.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError`] when the topology query itself fails; the
    /// previous registry contents are left intact in that case.
    pub fn refresh(&mut self, registry: &mut OutputRegistry) -> Result<(), TopologyError> {
        match &self.mode {
            SyncMode::Fixed(outputs) => {
                if self.seeded {
                    debug!("fixed output list active, skipping topology query");
                    return Ok(());
                }
                registry.replace(outputs.clone());
                self.seeded = true;
                debug!("registry seeded with {} fixed outputs", registry.len());
                Ok(())
            }
            SyncMode::Live(source) => {
                let probes = source.query_outputs()?;

                let mut snapshot = Vec::with_capacity(probes.len());
                for probe in probes {
                    if !probe.connected {
                        debug!("output {} seems to be disabled or disconnected, skipping it", probe.id);
                        continue;
                    }
                    let Some(rect) = probe.geometry else {
                        warn!("could not resolve geometry for output {}, skipping it", probe.id);
                        continue;
                    };
                    snapshot.push(Output { id: OutputId(probe.id), rect });
                }

                registry.replace(snapshot);
                debug!("registry rebuilt with {} outputs", registry.len());
                Ok(())
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::topology::mock::MockTopologySource;
    use edgewarp_core::Position;

    fn probe(id: u32, x: i32, y: i32, width: u32, height: u32) -> OutputProbe {
        OutputProbe {
            id,
            connected: true,
            geometry: Some(Rect::new(x, y, width, height)),
        }
    }

    fn fixed_output(id: u32, x: i32, y: i32) -> Output {
        Output {
            id: OutputId(id),
            rect: Rect::new(x, y, 1920, 1080),
        }
    }

    // ── Live mode ─────────────────────────────────────────────────────────────

    #[test]
    fn test_refresh_builds_registry_from_probes() {
        let source = Arc::new(MockTopologySource::new());
        source.push_snapshot(vec![probe(1, 0, 0, 1920, 1080), probe(2, 1920, 0, 1920, 1080)]);

        let mut sync = OutputSynchronizer::live(source);
        let mut registry = OutputRegistry::new();

        sync.refresh(&mut registry).expect("refresh must succeed");

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.output_at(Position::new(2000, 500)).map(|o| o.id),
            Some(OutputId(2))
        );
    }

    #[test]
    fn test_refresh_skips_disconnected_outputs() {
        let source = Arc::new(MockTopologySource::new());
        source.push_snapshot(vec![
            probe(1, 0, 0, 1920, 1080),
            OutputProbe { id: 2, connected: false, geometry: Some(Rect::new(1920, 0, 1920, 1080)) },
        ]);

        let mut sync = OutputSynchronizer::live(source);
        let mut registry = OutputRegistry::new();
        sync.refresh(&mut registry).expect("refresh must succeed");

        assert_eq!(registry.len(), 1);
        assert!(registry.output_at(Position::new(2000, 500)).is_none());
    }

    #[test]
    fn test_refresh_skips_outputs_without_resolved_geometry() {
        let source = Arc::new(MockTopologySource::new());
        source.push_snapshot(vec![
            OutputProbe { id: 1, connected: true, geometry: None },
            probe(2, 0, 0, 1920, 1080),
        ]);

        let mut sync = OutputSynchronizer::live(source);
        let mut registry = OutputRegistry::new();
        sync.refresh(&mut registry).expect("refresh must succeed");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next().map(|o| o.id), Some(OutputId(2)));
    }

    #[test]
    fn test_refresh_replaces_previous_snapshot_wholesale() {
        let source = Arc::new(MockTopologySource::new());
        source.push_snapshot(vec![probe(1, 0, 0, 1024, 768)]);
        source.push_snapshot(vec![probe(2, 0, 0, 1920, 1080)]);

        let mut sync = OutputSynchronizer::live(source);
        let mut registry = OutputRegistry::new();

        sync.refresh(&mut registry).expect("first refresh");
        sync.refresh(&mut registry).expect("second refresh");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next().map(|o| o.id), Some(OutputId(2)));
    }

    #[test]
    fn test_refresh_failure_preserves_last_known_good_registry() {
        let source = Arc::new(MockTopologySource::new());
        source.push_snapshot(vec![probe(1, 0, 0, 1920, 1080)]);
        source.push_failure("randr went away");

        let mut sync = OutputSynchronizer::live(source);
        let mut registry = OutputRegistry::new();

        sync.refresh(&mut registry).expect("first refresh succeeds");
        let err = sync.refresh(&mut registry).expect_err("second refresh fails");

        assert_eq!(err, TopologyError::QueryFailed("randr went away".to_string()));
        assert_eq!(registry.len(), 1, "previous snapshot must be preserved");
        assert!(registry.output_at(Position::new(100, 100)).is_some());
    }

    // ── Fixed mode ────────────────────────────────────────────────────────────

    #[test]
    fn test_fixed_mode_seeds_registry_on_first_refresh() {
        let mut sync = OutputSynchronizer::fixed(vec![fixed_output(1, 0, 0), fixed_output(2, 1920, 0)]);
        let mut registry = OutputRegistry::new();

        sync.refresh(&mut registry).expect("seeding must succeed");

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_fixed_mode_later_refreshes_are_no_ops() {
        let mut sync = OutputSynchronizer::fixed(vec![fixed_output(1, 0, 0)]);
        let mut registry = OutputRegistry::new();
        sync.refresh(&mut registry).expect("seed");

        // Simulate an external rebuild notification arriving anyway.
        sync.refresh(&mut registry).expect("must stay Ok");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next().map(|o| o.id), Some(OutputId(1)));
    }
}
