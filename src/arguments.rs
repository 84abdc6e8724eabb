use super::*;

#[derive(Debug, Parser)]
#[command(about = "Type a fixed sentence and see your speed and accuracy")]
pub(crate) struct Arguments {
  #[arg(long, help = "Do not draw the on-screen keyboard")]
  hide_keyboard: bool,
  #[arg(
    long,
    default_value = "200",
    requires = "replay",
    help = "Milliseconds between replayed keystrokes"
  )]
  interval_ms: u64,
  #[arg(long, short, help = "Do not ring the terminal bell on mistakes")]
  quiet: bool,
  #[arg(
    long,
    value_name = "PATH",
    help = "Play back key names from a file, one per line, instead of reading the keyboard"
  )]
  replay: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    if let Some(path) = &self.replay {
      return replay::run(path, Duration::from_millis(self.interval_ms));
    }

    if let Some(statistics) = App::new(self.hide_keyboard, self.quiet).run()? {
      println!("{statistics}");
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, clap::CommandFactory};

  #[test]
  fn command_definition() {
    Arguments::command().debug_assert();
  }

  #[test]
  fn defaults() {
    let arguments = Arguments::try_parse_from(["typecue"]).unwrap();

    assert!(!arguments.hide_keyboard);
    assert!(!arguments.quiet);
    assert_eq!(arguments.interval_ms, 200);
    assert_eq!(arguments.replay, None);
  }

  #[test]
  fn replay_with_interval() {
    let arguments =
      Arguments::try_parse_from(["typecue", "--replay", "keys.txt", "--interval-ms", "50"])
        .unwrap();

    assert_eq!(arguments.replay, Some(PathBuf::from("keys.txt")));
    assert_eq!(arguments.interval_ms, 50);
  }

  #[test]
  fn interval_requires_replay() {
    assert!(Arguments::try_parse_from(["typecue", "--interval-ms", "50"]).is_err());
  }

  #[test]
  fn quiet_short_flag() {
    assert!(Arguments::try_parse_from(["typecue", "-q"]).unwrap().quiet);
  }
}
