/*!
 * Membership Source
 * Reads the tarpit task list into a pid set
 */

use crate::core::errors::PollError;
use crate::core::types::{Pid, PidSet};
use std::path::Path;

/// File inside the tarpit directory listing one pid per line.
///
/// Matches the cgroup convention; the directory does not have to be a real
/// cgroup as long as this file is present.
pub const TASKS_FILE: &str = "tasks";

/// Read the current membership of the tarpit.
///
/// Blank and non-numeric lines are skipped, never reported; the file may
/// be rewritten wholesale between reads and may be momentarily empty,
/// which yields an empty set ("hobble nothing"). A missing or unreadable
/// file is an error: the directory's lifecycle belongs to whoever created
/// it, and losing it is fatal to the poll loop.
pub async fn read_members(dir: &Path) -> Result<PidSet, PollError> {
    let path = dir.join(TASKS_FILE);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| PollError::Read {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
    Ok(parse_members(&raw))
}

/// Every whitespace-trimmed line that parses as a positive integer joins
/// the set. Pid 0 is dropped: signaling it would address our own process
/// group.
fn parse_members(raw: &str) -> PidSet {
    raw.lines()
        .filter_map(|line| line.trim().parse::<Pid>().ok())
        .filter(|&pid| pid != 0)
        .collect()
}
