//! Interactive WOPR terminal over stdin/stdout.
//!
//! Logs go to stderr (`RUST_LOG`, default `wopr_engine=info`); settings come
//! from `WOPR_*` variables, optionally loaded from a `.env` file.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use wopr_engine::display::Animation;
use wopr_engine::narrative::{narrate_with_timeout, CannedNarrator, NarrativeAdapter};
use wopr_engine::{Session, WoprConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wopr_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = WoprConfig::from_env().context("reading WOPR_* settings")?;
    let timeout = config.narrative_timeout;
    let narrator: Box<dyn NarrativeAdapter> = Box::new(CannedNarrator);
    let mut session = Session::new(config);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_block(&mut stdout, &Session::banner()).await?;
    write_block(&mut stdout, "\nGREETINGS, PROFESSOR FALKEN.\nSHALL WE PLAY A GAME?").await?;

    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut response = session.handle(&line);

        for animation in &response.animations {
            play(&mut stdout, *animation).await?;
        }

        if let Some(context) = response.needs_narration.take() {
            let narration = narrate_with_timeout(narrator.as_ref(), &context, timeout).await;
            session.apply_narration(&narration);
            if !narration.text.is_empty() {
                if context.scenario.is_some() {
                    response.text.push_str("\n\n");
                    response.text.push_str(&narration.text);
                } else {
                    response.text = narration.text;
                }
            }
        }

        if !response.text.is_empty() {
            write_block(&mut stdout, &response.text).await?;
        }
        if response.exit {
            break;
        }
    }

    Ok(())
}

async fn write_block(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

async fn play(stdout: &mut tokio::io::Stdout, animation: Animation) -> Result<()> {
    let delay = Duration::from_millis(animation.frame_delay_ms());
    for frame in animation.frames() {
        write_block(stdout, frame).await?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
