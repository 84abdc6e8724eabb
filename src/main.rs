use {
  crate::{
    app::App,
    arguments::Arguments,
    key::{Command, Key},
    keyboard::{Cap, Highlight, ROWS},
    session::{Classification, Cue, Session},
    statistics::Statistics,
  },
  anyhow::{Context, anyhow, bail},
  clap::Parser,
  crossterm::{
    cursor::{Hide, MoveTo, MoveToColumn, MoveToNextLine, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, ModifierKeyCode},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
    str::FromStr,
    time::{Duration, Instant},
  },
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod app;
mod arguments;
mod key;
mod keyboard;
mod replay;
mod session;
mod statistics;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
