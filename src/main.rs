use {
  acquisition::{Acquisition, sort_by_score},
  anyhow::Context,
  app::App,
  arguments::Arguments,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  error::Error,
  event::Event,
  futures::future::try_join_all,
  help_view::HelpView,
  item::Item,
  list_entry::ListEntry,
  load_state::LoadState,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
  },
  reqwest::StatusCode,
  serde::{Deserialize, de::DeserializeOwned},
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
  },
  story::Story,
  story_list::StoryList,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt,
  },
  transient_message::TransientMessage,
  user::User,
  utils::{format_age, format_points, truncate, unix_now},
};

mod acquisition;
mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod error;
mod event;
mod help_view;
mod item;
mod list_entry;
mod load_state;
mod logging;
mod report;
mod state;
mod story;
mod story_list;
mod transient_message;
mod user;
mod utils;

const DEFAULT_BATCH_SIZE: usize = 10;
const DEFAULT_TARGET_COUNT: usize = 10;

const HEADER_TITLE: &str = "Top stories";

const LIST_STATUS: &str = "↑/k up • ↓/j down • o open link • c discussion • r reload • q/esc quit • ? help";

const FAILED_STATUS: &str = "r reload • q/esc quit • ? help";

const LOADING_STORIES_STATUS: &str = "Loading top stories...";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Actions:
  o       open the selected story in your browser
  enter   same as o
  c       open the discussion page of the selected story
  r       reload the top stories
  q       quit hn-top
  esc     close help or quit
  ?       toggle this help

Stories are sorted by score, lowest first.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let _guard = logging::initialize(arguments.log_file.clone())
    .context("could not initialize logging")?;

  tracing::info!(?arguments, "Starting hn-top");

  let result = start(arguments).await;

  if let Err(error) = &result {
    tracing::error!(error = format!("{error:#}"), "hn-top failed");
  }

  result
}

async fn run_plain(client: &Client, acquisition: Acquisition) -> Result {
  let stories = client
    .load_top_stories(acquisition)
    .await
    .context("could not load top stories")?;

  print!("{}", report::render(&stories, unix_now()));

  Ok(())
}

async fn start(arguments: Arguments) -> Result {
  let client = Client::new(&arguments.base_url);

  if arguments.plain || !io::stdout().is_terminal() {
    return run_plain(&client, arguments.acquisition()).await;
  }

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, arguments.acquisition(), !arguments.no_karma);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
