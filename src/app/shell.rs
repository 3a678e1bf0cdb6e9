//! Line-oriented console front-end over a [`SiteSession`].
//!
//! Every command is applied synchronously and the affected component is
//! rendered right away. `ask` only starts the advisory call: the call runs on
//! its own task and its result comes back through a channel, so gallery and
//! price commands keep working while the advisor is loading.

use crate::app::session::SiteSession;
use crate::core::advisory::{AdviceResolution, AdvisoryStatus, PendingAdvice};
use crate::core::gallery::GalleryCursor;
use crate::core::Displayable;
use crate::utils::error::Result;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

pub const HELP: &str = "\
Commands (numbers start at 1):
  gallery open N | next | prev | close   portfolio lightbox
  prices toggle N                        expand/collapse a price category
  preview open | next | prev | close     example image of the open category
  ask <text>                             ask the style advisor
  status                                 show everything
  help                                   this text
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    Open(usize),
    Next,
    Prev,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Gallery(CursorAction),
    TogglePrice(usize),
    /// `open` on the preview always targets the expanded category.
    Preview(CursorAction),
    Ask(String),
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for the list")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line. Indices are typed 1-based and returned 0-based.
/// The text after `ask ` is kept exactly as typed.
pub fn parse_command(line: &str) -> std::result::Result<Command, CommandError> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("ask") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            let query = rest.strip_prefix(' ').unwrap_or(rest);
            return Ok(Command::Ask(query.to_string()));
        }
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    match words.as_slice() {
        ["gallery", rest @ ..] => parse_cursor_action(rest, true, "gallery open N | next | prev | close")
            .map(Command::Gallery),
        ["preview", rest @ ..] => parse_cursor_action(rest, false, "preview open | next | prev | close")
            .map(Command::Preview),
        ["prices", "toggle", n] => parse_position(n, "prices toggle N").map(Command::TogglePrice),
        ["prices", ..] => Err(CommandError::Usage("prices toggle N")),
        ["status"] => Ok(Command::Status),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        [] => Ok(Command::Status),
        [other, ..] => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_cursor_action(
    words: &[&str],
    open_takes_index: bool,
    usage: &'static str,
) -> std::result::Result<CursorAction, CommandError> {
    match words {
        ["open", n] if open_takes_index => parse_position(n, usage).map(CursorAction::Open),
        ["open"] if !open_takes_index => Ok(CursorAction::Open(0)),
        ["next"] => Ok(CursorAction::Next),
        ["prev"] => Ok(CursorAction::Prev),
        ["close"] => Ok(CursorAction::Close),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn parse_position(word: &str, usage: &'static str) -> std::result::Result<usize, CommandError> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Applies one command and renders its effect. Returns the advisory call to
/// drive when the command started one.
pub fn execute<W: Write>(
    session: &mut SiteSession,
    command: Command,
    out: &mut W,
) -> Result<Option<PendingAdvice>> {
    match command {
        Command::Gallery(action) => {
            match action {
                CursorAction::Open(index) => {
                    if let Err(e) = session.portfolio.try_open(index) {
                        writeln!(out, "❌ {}", e.user_friendly_message())?;
                        return Ok(None);
                    }
                }
                CursorAction::Next => session.portfolio.next(),
                CursorAction::Prev => session.portfolio.prev(),
                CursorAction::Close => session.portfolio.close(),
            }
            render_lightbox(out, "Portfolio", &session.portfolio)?;
        }
        Command::Preview(action) => {
            match action {
                CursorAction::Open(_) => {
                    if !session.open_preview() {
                        writeln!(out, "Open a price category first")?;
                        return Ok(None);
                    }
                }
                CursorAction::Next => session.preview.next(),
                CursorAction::Prev => session.preview.prev(),
                CursorAction::Close => session.preview.close(),
            }
            render_lightbox(out, "Voorbeeld", &session.preview)?;
        }
        Command::TogglePrice(index) => {
            if let Err(e) = session.prices.try_toggle(index) {
                writeln!(out, "❌ {}", e.user_friendly_message())?;
                return Ok(None);
            }
            render_prices(out, session)?;
        }
        Command::Ask(query) => {
            let pending = session.advisor.submit(&query);
            if pending.is_some() {
                render_advisor(out, session)?;
            }
            return Ok(pending);
        }
        Command::Status => {
            render_lightbox(out, "Portfolio", &session.portfolio)?;
            render_prices(out, session)?;
            render_lightbox(out, "Voorbeeld", &session.preview)?;
            render_advisor(out, session)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(None)
}

fn render_lightbox<W: Write, T: Displayable>(
    out: &mut W,
    name: &str,
    cursor: &GalleryCursor<T>,
) -> Result<()> {
    match (cursor.current(), cursor.position()) {
        (Some(item), Some((position, total))) => {
            let label = item.label().map(|l| format!("{} - ", l)).unwrap_or_default();
            let arrows = if cursor.can_navigate() { "  ‹ ›" } else { "" };
            writeln!(
                out,
                "[{}] {}{} ({}) {}/{}{}",
                name,
                label,
                item.title(),
                item.image(),
                position,
                total,
                arrows
            )?;
        }
        _ => writeln!(out, "[{}] closed ({} images)", name, cursor.len())?,
    }
    Ok(())
}

fn render_prices<W: Write>(out: &mut W, session: &SiteSession) -> Result<()> {
    writeln!(out, "[Prijslijst]")?;
    for (i, category) in session.prices.categories().iter().enumerate() {
        let open = session.prices.is_open(i);
        writeln!(out, "  {} {}. {}", if open { "▾" } else { "▸" }, i + 1, category.title)?;
        if open {
            for service in &category.items {
                writeln!(out, "      {} .... {}", service.name, service.price)?;
                if let Some(description) = &service.description {
                    writeln!(out, "        {}", description)?;
                }
            }
        }
    }
    if let Some(image) = session.prices.current_preview_image() {
        writeln!(out, "  Voorbeeld: {}", image)?;
    }
    Ok(())
}

fn render_advisor<W: Write>(out: &mut W, session: &SiteSession) -> Result<()> {
    match session.advisor.status() {
        AdvisoryStatus::Idle => writeln!(out, "[Stijl Assistent] ready")?,
        AdvisoryStatus::Loading => writeln!(
            out,
            "[Stijl Assistent] ⏳ thinking about \"{}\"...",
            session.advisor.query()
        )?,
        AdvisoryStatus::Success(text) | AdvisoryStatus::Failure(text) => {
            writeln!(out, "[Stijl Assistent] \"{}\"", text)?
        }
    }
    Ok(())
}

/// Reads commands until `quit` or end of input, then waits for an advisory
/// call that is still outstanding.
pub async fn run<R, W>(session: &mut SiteSession, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<AdviceResolution>();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Some(pending) = execute(session, command, out)? {
                            spawn_advice(pending, tx.clone());
                        }
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                }
                out.flush()?;
            }
            Some(resolution) = rx.recv() => {
                if session.advisor.resolve(resolution) {
                    render_advisor(out, session)?;
                    out.flush()?;
                }
            }
        }
    }

    drop(tx);
    while session.advisor.is_loading() {
        match rx.recv().await {
            Some(resolution) => {
                if session.advisor.resolve(resolution) {
                    render_advisor(out, session)?;
                }
            }
            None => break,
        }
    }
    out.flush()?;
    Ok(())
}

fn spawn_advice(pending: PendingAdvice, tx: mpsc::UnboundedSender<AdviceResolution>) {
    tokio::spawn(async move {
        let resolution = pending.run().await;
        if tx.send(resolution).is_err() {
            tracing::debug!("Shell closed before advisory response arrived");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gallery_commands() {
        assert_eq!(
            parse_command("gallery open 3"),
            Ok(Command::Gallery(CursorAction::Open(2)))
        );
        assert_eq!(parse_command("gallery next"), Ok(Command::Gallery(CursorAction::Next)));
        assert_eq!(parse_command("  gallery prev"), Ok(Command::Gallery(CursorAction::Prev)));
        assert_eq!(parse_command("gallery close"), Ok(Command::Gallery(CursorAction::Close)));
        assert!(matches!(parse_command("gallery open 0"), Err(CommandError::Usage(_))));
        assert!(matches!(parse_command("gallery open x"), Err(CommandError::Usage(_))));
        assert!(matches!(parse_command("gallery open"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_parse_preview_and_prices() {
        assert_eq!(parse_command("preview open"), Ok(Command::Preview(CursorAction::Open(0))));
        assert!(matches!(parse_command("preview open 2"), Err(CommandError::Usage(_))));
        assert_eq!(parse_command("prices toggle 1"), Ok(Command::TogglePrice(0)));
        assert!(matches!(parse_command("prices"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_parse_ask_keeps_exact_text() {
        assert_eq!(
            parse_command("ask 4C protective style  for vacation "),
            Ok(Command::Ask("4C protective style  for vacation ".to_string()))
        );
        assert_eq!(parse_command("ask"), Ok(Command::Ask(String::new())));
        assert_eq!(parse_command("ask    "), Ok(Command::Ask("   ".to_string())));
        assert!(matches!(parse_command("asking"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("status"), Ok(Command::Status));
        assert_eq!(parse_command(""), Ok(Command::Status));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
