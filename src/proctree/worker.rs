/*!
 * Process Tree Worker
 * Duty cycle over whole trees: parent stopped first, resumed last
 */

use super::discovery::{top_level_processes, TopLevelProcess};
use crate::core::config::Cadence;
use crate::core::errors::SignalError;
use crate::core::sync::Subscriber;
use crate::core::types::{HobblerResult, PidSet};
use crate::signals::ProcessControl;
use tracing::{debug, info};

/// Run one duty cycle over a process tree.
///
/// Stop order is parent first, then children in discovery order, so a
/// parent can never observe a stopped child and react to it. Resume order
/// is the strict reverse: children last-to-first, then the parent. The
/// same partial-failure rules as the flat worker apply: a vanished pid is
/// reported once and skipped, anything else aborts the cycle.
pub async fn stop_and_restart<C: ProcessControl>(
    control: &C,
    top: &TopLevelProcess,
    cadence: &Cadence,
) -> Result<(), SignalError> {
    let mut gone = PidSet::new();

    note_or_raise(control.pause(top.pid), &mut gone)?;
    for &child in &top.children {
        note_or_raise(control.pause(child), &mut gone)?;
    }

    tokio::time::sleep(cadence.stopped_hold).await;

    for &child in top.children.iter().rev() {
        if gone.contains(&child) {
            continue;
        }
        note_or_raise(control.resume(child), &mut gone)?;
    }
    if !gone.contains(&top.pid) {
        note_or_raise(control.resume(top.pid), &mut gone)?;
    }

    tokio::time::sleep(cadence.running_hold).await;

    Ok(())
}

/// Report a vanished pid once per cycle; let every other failure through
fn note_or_raise(
    result: Result<(), SignalError>,
    gone: &mut PidSet,
) -> Result<(), SignalError> {
    match result {
        Err(SignalError::ProcessGone(pid)) => {
            if gone.insert(pid) {
                info!(pid, "hobbled process no longer exists");
            }
            Ok(())
        }
        other => other,
    }
}

/// Deep-mode worker loop: identical channel discipline to the flat
/// worker, but each cycle regroups the working set into trees and hobbles
/// each tree in turn.
pub async fn hobble_trees_forever<C: ProcessControl>(
    mut subscriber: Subscriber<PidSet>,
    control: C,
    cadence: Cadence,
) -> HobblerResult<()> {
    let mut working = subscriber.recv().await?;
    info!(pids = ?working, "first pid set received, hobbling trees");

    loop {
        if let Some(newest) = subscriber.try_latest() {
            debug!(pids = ?newest, "working set replaced");
            working = newest;
        }

        let tops = top_level_processes(&working);
        if tops.is_empty() {
            // Nothing to hobble; still honor the cycle cadence
            tokio::time::sleep(cadence.cycle()).await;
            continue;
        }
        for top in &tops {
            stop_and_restart(&control, top, &cadence).await?;
        }
    }
}
