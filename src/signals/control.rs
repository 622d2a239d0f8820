/*!
 * OS Signal Delivery
 * SIGSTOP/SIGCONT delivery via nix
 */

use super::traits::ProcessControl;
use crate::core::errors::SignalError;
use crate::core::types::Pid;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid as UnixPid;

/// Production `ProcessControl` backed by real UNIX signals
#[derive(Debug, Clone, Copy, Default)]
pub struct OsControl;

impl OsControl {
    pub fn new() -> Self {
        Self
    }

    fn send(&self, pid: Pid, signal: Signal) -> Result<(), SignalError> {
        match kill(UnixPid::from_raw(pid as i32), signal) {
            Ok(()) => Ok(()),
            // ESRCH is the one expected failure: the target is gone
            Err(Errno::ESRCH) => Err(SignalError::ProcessGone(pid)),
            Err(errno) => Err(SignalError::Delivery {
                pid,
                detail: errno.desc().to_string(),
            }),
        }
    }
}

impl ProcessControl for OsControl {
    fn pause(&self, pid: Pid) -> Result<(), SignalError> {
        self.send(pid, Signal::SIGSTOP)
    }

    fn resume(&self, pid: Pid) -> Result<(), SignalError> {
        self.send(pid, Signal::SIGCONT)
    }
}
