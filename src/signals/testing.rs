/*!
 * Test Doubles
 * Recording ProcessControl for call-order and failure-path tests
 */

use super::traits::ProcessControl;
use crate::core::errors::SignalError;
use crate::core::types::Pid;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// A pause/resume call observed by `RecordingControl`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Pause(Pid),
    Resume(Pid),
}

/// `ProcessControl` double that records every call in order.
///
/// Pids in `gone` answer `ProcessGone`; pids in `broken` answer a delivery
/// failure; everything else succeeds. Clones share the call log, so a
/// clone can be handed to a worker task while the original inspects it.
#[derive(Debug, Clone, Default)]
pub struct RecordingControl {
    calls: Arc<Mutex<Vec<Call>>>,
    gone: BTreeSet<Pid>,
    broken: BTreeSet<Pid>,
}

impl RecordingControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `pid` answer `ProcessGone` on every call
    pub fn with_gone(mut self, pid: Pid) -> Self {
        self.gone.insert(pid);
        self
    }

    /// Make `pid` answer a fatal delivery failure on every call
    pub fn with_broken(mut self, pid: Pid) -> Self {
        self.broken.insert(pid);
        self
    }

    /// Every call observed so far, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, pid: Pid) -> Result<(), SignalError> {
        self.calls.lock().unwrap().push(call);
        if self.gone.contains(&pid) {
            return Err(SignalError::ProcessGone(pid));
        }
        if self.broken.contains(&pid) {
            return Err(SignalError::Delivery {
                pid,
                detail: "permission denied".into(),
            });
        }
        Ok(())
    }
}

impl ProcessControl for RecordingControl {
    fn pause(&self, pid: Pid) -> Result<(), SignalError> {
        self.record(Call::Pause(pid), pid)
    }

    fn resume(&self, pid: Pid) -> Result<(), SignalError> {
        self.record(Call::Resume(pid), pid)
    }
}
