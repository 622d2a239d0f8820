/*!
 * Hobbler - Main Entry Point
 *
 * Duty-cycle process throttler:
 * - Polls a tarpit directory's task list for target pids
 * - Stops and continues every target so it runs a sliver of wall-clock time
 * - Optional deep mode hobbles whole process trees
 */

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

use hobbler::{
    channel, hobble_forever, hobble_trees_forever, init_tracing, poll_forever, Cadence,
    OsControl, TASKS_FILE,
};

/// Throttle every process listed in a tarpit directory's task list
#[derive(Parser, Debug)]
#[command(name = "hobbler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing a `tasks` file with one pid per line
    /// (typically a cgroup directory, but any directory works)
    tarpit_dir: PathBuf,

    /// Testing mode: faster poll and hobble cadence, timing only
    #[arg(long)]
    testing: bool,

    /// Hobble whole process trees: parents stopped first, resumed last
    #[arg(long)]
    deep: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let cli = Cli::parse();

    let tasks = cli.tarpit_dir.join(TASKS_FILE);
    if !tasks.exists() {
        return Err(format!("no task list at {}", tasks.display()).into());
    }

    let cadence = Cadence::for_mode(cli.testing);
    info!(
        tarpit = %cli.tarpit_dir.display(),
        testing = cli.testing,
        deep = cli.deep,
        "Process hobbler starting"
    );

    let (publisher, subscriber) = channel();

    let dir = cli.tarpit_dir.clone();
    let poll_interval = cadence.poll_interval;
    let poller = tokio::spawn(async move { poll_forever(&dir, &publisher, poll_interval).await });

    let worker = if cli.deep {
        tokio::spawn(hobble_trees_forever(subscriber, OsControl::new(), cadence))
    } else {
        tokio::spawn(hobble_forever(subscriber, OsControl::new(), cadence))
    };

    // Both loops run until the daemon is stopped externally; the first
    // fatal error in either one takes the whole daemon down.
    tokio::select! {
        res = poller => res??,
        res = worker => res??,
    }

    Ok(())
}
