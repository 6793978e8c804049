// # poll_lookup
//
// Fetch one poll and print its tally.
//
// ```bash
// STRAWPOLL_POLL_ID=1 cargo run -p strawpoll-demos --bin poll_lookup
// ```
//
// Environment:
// - `STRAWPOLL_POLL_ID` (required): poll identifier
// - `STRAWPOLL_ENDPOINT`: base endpoint (default: strawpoll.me v2)
// - `STRAWPOLL_TIMEOUT_SECS`: request timeout, 0 disables it (default: 30)
// - `STRAWPOLL_LOG_LEVEL`: trace, debug, info, warn, error (default: info)

mod common;

use anyhow::{Context, Result};
use std::env;
use strawpoll_core::PollQuery;

fn main() -> Result<()> {
    common::init_logging();

    let id: u64 = env::var("STRAWPOLL_POLL_ID")
        .context("STRAWPOLL_POLL_ID environment variable is required")?
        .parse()
        .context("STRAWPOLL_POLL_ID must be a positive integer")?;

    let client = common::client_from_env()?;
    let poll = client
        .fetch_poll(&PollQuery::new(id))
        .with_context(|| format!("Failed to fetch poll {}", id))?;

    println!("{} (#{})", poll.title, poll.id);
    for (option, votes) in poll.tally() {
        println!("  {:>6}  {}", votes, option);
    }
    println!("  {:>6}  total", poll.total_votes());
    println!(
        "multi={} dupcheck={} captcha={}",
        poll.multi,
        if poll.dupcheck.is_empty() { "-" } else { poll.dupcheck.as_str() },
        poll.captcha
    );

    Ok(())
}
