/*!
 * Tarpit Module
 * Membership discovery: which pids are currently subject to hobbling
 */

pub mod membership;
pub mod poller;

pub use membership::{read_members, TASKS_FILE};
pub use poller::{poll_and_publish, poll_forever};
