use super::*;

/// A recorded sequence of keystrokes played back at a fixed pace.
#[derive(Clone, Debug)]
pub(crate) struct Replay {
  interval: Duration,
  keys: Vec<Key>,
}

impl Replay {
  pub(crate) fn load(path: &Path, interval: Duration) -> Result<Self> {
    let input = fs::read_to_string(path)
      .with_context(|| format!("failed to read replay file `{}`", path.display()))?;

    Self::parse(&input, interval)
  }

  /// One key name per line. Blank lines are skipped; a line holding a
  /// single space is the space bar.
  pub(crate) fn parse(input: &str, interval: Duration) -> Result<Self> {
    let keys = input
      .lines()
      .enumerate()
      .filter(|(_, line)| !line.is_empty())
      .map(|(i, line)| {
        line
          .parse::<Key>()
          .with_context(|| format!("invalid key on line {}", i + 1))
      })
      .collect::<Result<Vec<Key>>>()?;

    Ok(Self { interval, keys })
  }

  pub(crate) fn play(&self, session: &mut Session) -> Option<Statistics> {
    let mut now = Instant::now();

    for &key in &self.keys {
      now += self.interval;
      session.handle_key(key, now);
    }

    log::info!(
      "replayed {} keys: {} of {} counted keystrokes correct",
      self.keys.len(),
      session.correct(),
      session.total()
    );

    session.latest_statistics()
  }
}

fn markers(session: &Session) -> String {
  session
    .classifications()
    .map(|(_, classification)| match classification {
      Classification::Correct => '+',
      Classification::Expected => '^',
      Classification::Incorrect => 'x',
      Classification::Pending => '.',
    })
    .collect()
}

pub(crate) fn report(session: &Session, statistics: Option<&Statistics>) -> String {
  let mut report = format!(
    "{}\n{}\n",
    session.target().iter().collect::<String>(),
    markers(session)
  );

  match statistics {
    Some(statistics) => report.push_str(&statistics.to_string()),
    None => report.push_str("No keystrokes recorded"),
  }

  report
}

pub(crate) fn run(path: &Path, interval: Duration) -> Result {
  let replay = Replay::load(path, interval)?;

  let mut session = Session::default();

  let statistics = replay.play(&mut session);

  println!("{}", report(&session, statistics.as_ref()));

  Ok(())
}

#[cfg(test)]
mod tests {
  use {super::*, crate::key::Modifier, approx::assert_abs_diff_eq, tempfile::TempDir};

  const INTERVAL: Duration = Duration::from_millis(200);

  #[test]
  fn parse_key_names() {
    let replay = Replay::parse("Shift\nH\ni\n \nBackspace\n\n!\n", INTERVAL).unwrap();

    assert_eq!(
      replay.keys,
      [
        Key::Modifier(Modifier::Shift),
        Key::Char('H'),
        Key::Char('i'),
        Key::Char(' '),
        Key::Backspace,
        Key::Char('!'),
      ]
    );
  }

  #[test]
  fn parse_reports_line_number() {
    let error = Replay::parse("a\nb\nEnter\n", INTERVAL).unwrap_err();

    assert_eq!(error.to_string(), "invalid key on line 3");
    assert_eq!(error.root_cause().to_string(), "unknown key `Enter`");
  }

  #[test]
  fn play_paces_keystrokes() {
    let replay = Replay::parse("c\na\nt\n", Duration::from_secs(30)).unwrap();

    let mut session = Session::new("cat");

    let statistics = replay.play(&mut session).unwrap();

    assert_eq!(statistics.elapsed_time, Duration::from_secs(60));
    assert_abs_diff_eq!(statistics.wpm.unwrap(), 0.6, epsilon = 0.001);
    assert_eq!(statistics.rounded_accuracy(), Some(100));
    assert!(session.is_complete());
  }

  #[test]
  fn play_only_modifiers() {
    let replay = Replay::parse("Shift\nControl\n", INTERVAL).unwrap();

    let mut session = Session::new("cat");

    assert!(replay.play(&mut session).is_none());
    assert_eq!(
      report(&session, None),
      "cat\n^..\nNo keystrokes recorded"
    );
  }

  #[test]
  fn report_marks_each_position() {
    let replay = Replay::parse("c\nx\n", Duration::from_secs(6)).unwrap();

    let mut session = Session::new("cat");

    let statistics = replay.play(&mut session);

    assert_eq!(
      report(&session, statistics.as_ref()),
      "cat\n+x^\nWPM: 2 | Accuracy: 50% | Correct: 1/2 | Elapsed Time: 6.00s"
    );
  }

  #[test]
  fn load_from_file() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("keys.txt");

    fs::write(&path, "T\nh\ne\n").unwrap();

    let replay = Replay::load(&path, INTERVAL).unwrap();

    let mut session = Session::default();

    replay.play(&mut session);

    assert_eq!(session.typed(), "The");
    assert_eq!(session.correct(), 3);
  }

  #[test]
  fn load_missing_file() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("missing.txt");

    assert_eq!(
      Replay::load(&path, INTERVAL).unwrap_err().to_string(),
      format!("failed to read replay file `{}`", path.display())
    );
  }
}
