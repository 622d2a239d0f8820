/*!
 * Membership Poller
 * Publishes the newest tarpit membership on a fixed cadence
 */

use super::membership::read_members;
use crate::core::errors::PollError;
use crate::core::sync::Publisher;
use crate::core::types::PidSet;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Read the membership once and publish it.
///
/// Publishes unconditionally: an empty set and a set identical to the
/// previous one are both real announcements the worker must observe. Any
/// undelivered previous announcement is overwritten, not queued behind.
pub async fn poll_and_publish(
    dir: &Path,
    publisher: &Publisher<PidSet>,
) -> Result<(), PollError> {
    let pids = read_members(dir).await?;
    info!(?pids, "hobbling pids");
    publisher.publish(pids);
    Ok(())
}

/// Poll until the task is cancelled or the source becomes unreadable.
///
/// No retry, no backoff: the tarpit directory's lifecycle belongs to
/// whoever created it, so a read failure propagates and ends the loop.
pub async fn poll_forever(
    dir: &Path,
    publisher: &Publisher<PidSet>,
    interval: Duration,
) -> Result<(), PollError> {
    loop {
        poll_and_publish(dir, publisher).await?;
        tokio::time::sleep(interval).await;
    }
}
