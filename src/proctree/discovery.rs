/*!
 * Process Tree Discovery
 * Groups tarpit members into top-level processes with their descendants
 */

use crate::core::types::{Pid, PidSet};
use std::collections::HashMap;
use std::fs;

/// A tarpit member plus every live descendant, depth-first.
///
/// Children need not be tarpit members themselves: hobbling a parent means
/// hobbling everything it forked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelProcess {
    pub pid: Pid,
    pub children: Vec<Pid>,
}

/// Group the tarpit membership into top-level process trees.
///
/// A member whose ancestor is also a member is folded into that ancestor's
/// tree rather than emitted as its own entry, so no pid is ever signaled
/// twice in one pass.
pub fn top_level_processes(members: &PidSet) -> Vec<TopLevelProcess> {
    group_members(members, &process_parents())
}

/// Snapshot of every live process's parent pid, read from /proc.
///
/// Processes that vanish mid-scan are skipped.
pub fn process_parents() -> HashMap<Pid, Pid> {
    let mut parents = HashMap::new();
    let Ok(entries) = fs::read_dir("/proc") else {
        return parents;
    };
    for entry in entries.flatten() {
        let Some(pid) = entry
            .file_name()
            .to_str()
            .and_then(|name| name.parse::<Pid>().ok())
        else {
            continue;
        };
        if let Some(ppid) = read_ppid(pid) {
            parents.insert(pid, ppid);
        }
    }
    parents
}

/// Parse the ppid out of /proc/<pid>/stat.
///
/// The command name (field 2) may contain spaces and parentheses, so
/// fields are counted from the last ')' rather than split naively.
fn read_ppid(pid: Pid) -> Option<Pid> {
    let stat = fs::read_to_string(format!("/proc/{pid}/stat")).ok()?;
    let rest = &stat[stat.rfind(')')? + 1..];
    let mut fields = rest.split_whitespace();
    let _state = fields.next()?;
    fields.next()?.parse().ok()
}

fn group_members(members: &PidSet, parents: &HashMap<Pid, Pid>) -> Vec<TopLevelProcess> {
    let mut children_of: HashMap<Pid, Vec<Pid>> = HashMap::new();
    for (&pid, &ppid) in parents {
        children_of.entry(ppid).or_default().push(pid);
    }
    // /proc scan order is arbitrary; sort for deterministic traversal
    for kids in children_of.values_mut() {
        kids.sort_unstable();
    }

    members
        .iter()
        .filter(|&&pid| !has_member_ancestor(pid, members, parents))
        .map(|&pid| TopLevelProcess {
            pid,
            children: descendants(pid, &children_of),
        })
        .collect()
}

fn has_member_ancestor(pid: Pid, members: &PidSet, parents: &HashMap<Pid, Pid>) -> bool {
    let mut current = pid;
    // Hop cap guards against ppid cycles from pid reuse during the scan
    for _ in 0..1024 {
        let Some(&ppid) = parents.get(&current) else {
            return false;
        };
        if ppid == 0 || ppid == current {
            return false;
        }
        if members.contains(&ppid) {
            return true;
        }
        current = ppid;
    }
    false
}

/// Depth-first preorder over the live descendants of `pid`
fn descendants(pid: Pid, children_of: &HashMap<Pid, Vec<Pid>>) -> Vec<Pid> {
    let mut out = Vec::new();
    let mut seen = PidSet::from([pid]);
    let mut stack: Vec<Pid> = children_of
        .get(&pid)
        .map(|kids| kids.iter().rev().copied().collect())
        .unwrap_or_default();

    while let Some(next) = stack.pop() {
        if !seen.insert(next) {
            continue;
        }
        out.push(next);
        if let Some(kids) = children_of.get(&next) {
            stack.extend(kids.iter().rev().copied());
        }
    }
    out
}
