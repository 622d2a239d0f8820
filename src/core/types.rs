/*!
 * Core Types
 * Common types used across the hobbler
 */

use std::collections::BTreeSet;

/// Process ID type, as read from the tarpit task list
pub type Pid = u32;

/// Immutable snapshot of the pids targeted by one hobble cycle.
///
/// Uniqueness is enforced by the set; ordering carries no meaning (the
/// BTreeSet only keeps log output deterministic). A fresh snapshot is
/// produced on every poll and replaces, never merges with, the previous
/// one.
pub type PidSet = BTreeSet<Pid>;

/// Common result type for hobbler operations
pub type HobblerResult<T> = Result<T, super::errors::HobblerError>;
