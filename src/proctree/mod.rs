/*!
 * Process Tree Module
 * Deep-mode hobbling: whole process trees, parent stopped first
 */

pub mod discovery;
pub mod worker;

pub use discovery::{top_level_processes, TopLevelProcess};
pub use worker::{hobble_trees_forever, stop_and_restart};
