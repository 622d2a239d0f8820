/*!
 * Hobbler Library
 * Duty-cycle process throttling exposed as a library
 */

pub mod core;
pub mod hobble;
pub mod monitoring;
pub mod proctree;
pub mod signals;
pub mod tarpit;

// Re-exports
pub use self::core::config::Cadence;
pub use self::core::errors::{HobblerError, PollError, RecvError, SignalError};
pub use self::core::sync::{channel, Publisher, Subscriber};
pub use self::core::types::{HobblerResult, Pid, PidSet};
pub use self::hobble::{hobble_forever, hobble_processes};
pub use self::monitoring::init_tracing;
pub use self::proctree::{
    hobble_trees_forever, stop_and_restart, top_level_processes, TopLevelProcess,
};
pub use self::signals::{OsControl, ProcessControl};
pub use self::tarpit::{poll_and_publish, poll_forever, read_members, TASKS_FILE};
