// # poll_create
//
// Create a poll and print where it lives.
//
// ```bash
// STRAWPOLL_TITLE="Lunch?" STRAWPOLL_OPTIONS="Pizza,Sushi,Tacos" \
//     cargo run -p strawpoll-demos --bin poll_create
// ```
//
// Environment:
// - `STRAWPOLL_TITLE` (required): poll question
// - `STRAWPOLL_OPTIONS` (required): comma-separated option labels
// - `STRAWPOLL_MULTI`, `STRAWPOLL_CAPTCHA`: true/false (default: false)
// - `STRAWPOLL_DUPCHECK`: normal, permissive or disabled (default: service default)
// - `STRAWPOLL_ENDPOINT`, `STRAWPOLL_TIMEOUT_SECS`, `STRAWPOLL_LOG_LEVEL`: as for poll_lookup

mod common;

use anyhow::{Context, Result};
use std::env;
use strawpoll_core::PollCreation;

fn main() -> Result<()> {
    common::init_logging();

    let title = env::var("STRAWPOLL_TITLE").context("STRAWPOLL_TITLE environment variable is required")?;
    let options: Vec<String> = env::var("STRAWPOLL_OPTIONS")
        .context("STRAWPOLL_OPTIONS environment variable is required")?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let creation = PollCreation::new(title, options)
        .with_multi(common::flag("STRAWPOLL_MULTI")?)
        .with_captcha(common::flag("STRAWPOLL_CAPTCHA")?)
        .with_dupcheck(env::var("STRAWPOLL_DUPCHECK").unwrap_or_default());

    let client = common::client_from_env()?;
    let created = client
        .create_poll(&creation)
        .context("Failed to create poll")?;

    println!("Created poll #{}: {}", created.id, created.title);
    println!("{}", client.poll_url(created.id));

    Ok(())
}
