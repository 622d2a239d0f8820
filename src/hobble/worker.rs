/*!
 * Hobbling Worker
 * Applies the stop/continue duty cycle to the latest announced pid set
 */

use crate::core::config::Cadence;
use crate::core::errors::SignalError;
use crate::core::sync::Subscriber;
use crate::core::types::{HobblerResult, PidSet};
use crate::signals::ProcessControl;
use tracing::{debug, info};

/// Run one duty cycle over `pids`: pause every pid, hold, resume every
/// pid, hold briefly.
///
/// Every pause strictly precedes every resume; within each pass no
/// ordering is guaranteed. A pid that no longer exists is reported once
/// for the cycle and the cycle continues for the rest of the set; the
/// pid is not dropped here, only a fresh announcement from the poller can
/// drop it. Any other delivery failure aborts the cycle: swallowing it
/// would leave the daemon alive while hobbling nothing.
pub async fn hobble_processes<C: ProcessControl>(
    control: &C,
    pids: &PidSet,
    cadence: &Cadence,
) -> Result<(), SignalError> {
    let mut gone = PidSet::new();

    for &pid in pids {
        if let Err(err) = control.pause(pid) {
            match err {
                SignalError::ProcessGone(pid) => {
                    info!(pid, "hobbled process no longer exists");
                    gone.insert(pid);
                }
                fatal => return Err(fatal),
            }
        }
    }

    tokio::time::sleep(cadence.stopped_hold).await;

    for &pid in pids {
        // Already reported gone this cycle; there is nothing to resume
        if gone.contains(&pid) {
            continue;
        }
        if let Err(err) = control.resume(pid) {
            match err {
                SignalError::ProcessGone(pid) => {
                    info!(pid, "hobbled process no longer exists");
                }
                fatal => return Err(fatal),
            }
        }
    }

    tokio::time::sleep(cadence.running_hold).await;

    Ok(())
}

/// Consume announced pid sets and hobble them until the daemon dies.
///
/// Blocks exactly once, for the first announcement; no signaling happens
/// before it. After that every cycle starts from whatever set is newest,
/// sticking with the previous one when the poller has published nothing
/// fresh.
pub async fn hobble_forever<C: ProcessControl>(
    mut subscriber: Subscriber<PidSet>,
    control: C,
    cadence: Cadence,
) -> HobblerResult<()> {
    let mut working = subscriber.recv().await?;
    info!(pids = ?working, "first pid set received, hobbling begins");

    loop {
        if let Some(newest) = subscriber.try_latest() {
            debug!(pids = ?newest, "working set replaced");
            working = newest;
        }
        hobble_processes(&control, &working, &cadence).await?;
    }
}
