//! Interactive terminal session.
//!
//! Reads one line at a time and turns it into a screen event. Plain text is
//! a search; lines starting with `:` are commands:
//!
//! | Input | Event |
//! |-------|-------|
//! | `rust language` | search for the text as typed |
//! | `:search [text]` | search for `text`, or re-run the current query |
//! | `:more`, `:m` | load the next page |
//! | `:open N`, `:o N` | open card `N` in the browser |
//! | `:query` | print the current query |
//! | `:help` | list commands |
//! | `:quit`, `:exit`, `:q` | leave |
//!
//! Blank lines are ignored; `:search` with no text submits the current
//! query, empty or not.

use crate::api::NewsSource;
use crate::outputs::{json, text};
use crate::screen::{SearchScreen, SearchState, UrlOpener};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const PROMPT: &str = "search> ";

const HELP: &str = "\
Type words to search news from the past week.
  :search [text]  search again (current query if no text)
  :more, :m       show 10 more results
  :open N, :o N   open result N in the browser
  :query          show the current query
  :quit, :exit    leave (also :q)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Resubmit,
    More,
    Open(usize),
    ShowQuery,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        if line.trim().is_empty() {
            return Command::Blank;
        }
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Command::Search(line.to_string());
        };

        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (rest.trim_end(), None),
        };
        match (name, arg) {
            ("search" | "s", None) => Command::Resubmit,
            ("search" | "s", Some(text)) => Command::Search(text.to_string()),
            ("more" | "m", _) => Command::More,
            ("open" | "o", Some(n)) => match n.trim().parse::<usize>() {
                Ok(n) if n >= 1 => Command::Open(n),
                _ => Command::Unknown(line.to_string()),
            },
            ("query", _) => Command::ShowQuery,
            ("help" | "h" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", _) => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Render what the screen currently shows, as cards or as JSON.
///
/// # Arguments
///
/// * `state` - Screen state to render
/// * `as_json` - Emit the visible cards as a JSON array instead of text
/// * `offer_more` - Whether the reader can act on a load-more hint; a
///   one-shot run exits after printing, so it passes `false`
pub fn render_page(
    state: &SearchState,
    as_json: bool,
    offer_more: bool,
) -> Result<String, serde_json::Error> {
    if as_json {
        let mut out = json::render_visible(state.visible())?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text::render_cards(
            state.visible(),
            state.results().len(),
            offer_more && state.can_load_more(),
        ))
    }
}

async fn write_page<W>(state: &SearchState, out: &mut W, as_json: bool) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let page = render_page(state, as_json, true).map_err(io::Error::other)?;
    out.write_all(page.as_bytes()).await
}

/// Drive `screen` from `input` until end of input or `:quit`.
pub async fn run<S, O, R, W>(
    screen: &mut SearchScreen<S, O>,
    input: R,
    mut out: W,
    as_json: bool,
) -> io::Result<()>
where
    S: NewsSource,
    O: UrlOpener,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    out.write_all(HELP.as_bytes()).await?;
    out.write_all(PROMPT.as_bytes()).await?;
    out.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line);
        debug!(?command, "Session command");
        match command {
            Command::Quit => break,
            Command::Blank => {}
            Command::Search(query) => {
                screen.on_submit(&query).await;
                write_page(screen.state(), &mut out, as_json).await?;
            }
            Command::Resubmit => {
                let query = screen.state().query().to_string();
                screen.on_submit(&query).await;
                write_page(screen.state(), &mut out, as_json).await?;
            }
            Command::More if !screen.can_load_more() => {
                out.write_all(b"No more results.\n").await?;
            }
            Command::More => {
                screen.on_load_more();
                write_page(screen.state(), &mut out, as_json).await?;
            }
            Command::Open(n) => {
                let url = screen.visible().get(n - 1).map(|a| a.url.clone());
                match url {
                    Some(url) => match screen.on_open_article(&url) {
                        Ok(()) => out.write_all(format!("Opened {url}\n").as_bytes()).await?,
                        Err(e) => out.write_all(format!("{e}\n").as_bytes()).await?,
                    },
                    None => {
                        let shown = screen.visible().len();
                        out.write_all(format!("No result {n}; {shown} shown.\n").as_bytes())
                            .await?
                    }
                }
            }
            Command::ShowQuery => {
                let query = screen.state().query();
                out.write_all(format!("Current query: {query:?}\n").as_bytes()).await?;
            }
            Command::Help => out.write_all(HELP.as_bytes()).await?,
            Command::Unknown(line) => {
                out.write_all(format!("Unknown command {line:?}\n").as_bytes()).await?;
                out.write_all(HELP.as_bytes()).await?;
            }
        }
        out.write_all(PROMPT.as_bytes()).await?;
        out.flush().await?;
    }
    Ok(())
}
