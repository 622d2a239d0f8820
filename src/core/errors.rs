/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signal-delivery errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SignalError {
    /// The target exited between polls. Expected and informational: callers
    /// log it and carry on, and the next membership poll drops the pid.
    #[error("hobbled process {0} no longer exists")]
    #[diagnostic(
        code(signals::process_gone),
        help("The process exited between membership polls. Nothing to do.")
    )]
    ProcessGone(Pid),

    #[error("signal delivery to pid {pid} failed: {detail}")]
    #[diagnostic(
        code(signals::delivery_failed),
        help("Check that the hobbler has permission to signal the target process.")
    )]
    Delivery { pid: Pid, detail: String },
}

/// Membership-poll errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum PollError {
    #[error("cannot read task list {path}: {detail}")]
    #[diagnostic(
        code(tarpit::unreadable),
        help("The tarpit directory must contain a readable `tasks` file.")
    )]
    Read { path: String, detail: String },
}

/// The announcement channel closed with no producer left.
///
/// Only possible once the poller task is gone, which is already fatal to
/// the daemon as a whole.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[error("announcement channel closed before a pid set arrived")]
#[diagnostic(
    code(channel::closed),
    help("The membership poller terminated. Check its error for the cause.")
)]
pub struct RecvError;

/// Top-level error for the hobbler daemon
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum HobblerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Poll(#[from] PollError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Channel(#[from] RecvError),
}
