//! Mock topology source for unit testing.
//!
//! Lets tests script a sequence of snapshots and failures without a
//! display server.  Each [`query_outputs`](MockTopologySource::query_outputs)
//! call consumes the next scripted response.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::sync_outputs::{OutputProbe, TopologyError, TopologySource};

/// A mock implementation of [`TopologySource`] driven by scripted responses.
pub struct MockTopologySource {
    responses: Mutex<VecDeque<Result<Vec<OutputProbe>, TopologyError>>>,
}

impl MockTopologySource {
    /// Creates a mock with no scripted responses.
    pub fn new() -> Self {
        Self { responses: Mutex::new(VecDeque::new()) }
    }

    /// Scripts one successful snapshot.
    pub fn push_snapshot(&self, probes: Vec<OutputProbe>) {
        self.responses.lock().expect("lock poisoned").push_back(Ok(probes));
    }

    /// Scripts one failing query.
    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .expect("lock poisoned")
            .push_back(Err(TopologyError::QueryFailed(message.to_string())));
    }
}

impl Default for MockTopologySource {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologySource for MockTopologySource {
    fn query_outputs(&self) -> Result<Vec<OutputProbe>, TopologyError> {
        self.responses
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TopologyError::QueryFailed(
                    "no scripted response left in MockTopologySource".to_string(),
                ))
            })
    }
}
