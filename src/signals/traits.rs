/*!
 * Process Control Trait
 * The seam between the hobble loops and OS signal delivery
 */

use crate::core::errors::SignalError;
use crate::core::types::Pid;

/// Suspend/resume primitives applied to a process by id.
///
/// Both operations must stay safe to call for a pid that no longer exists,
/// however often: implementations report that as
/// `SignalError::ProcessGone`, which callers treat as informational. Any
/// other failure is a real delivery problem and must be surfaced, not
/// swallowed.
pub trait ProcessControl {
    /// Ask the OS to suspend execution of `pid`
    fn pause(&self, pid: Pid) -> Result<(), SignalError>;

    /// Ask the OS to resume execution of `pid`
    fn resume(&self, pid: Pid) -> Result<(), SignalError>;
}
