use super::*;

const BELL: char = '\x07';

const FLASH: Duration = Duration::from_millis(250);

const TICK: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
  Continuing(Option<Cue>),
  Quit,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct App {
  completed: bool,
  flash: Option<(Cue, Instant)>,
  hide_keyboard: bool,
  quiet: bool,
  session: Session,
}

impl App {
  pub(crate) fn new(hide_keyboard: bool, quiet: bool) -> Self {
    Self {
      hide_keyboard,
      quiet,
      ..Default::default()
    }
  }

  fn display(&self, now: Instant) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    for (c, classification) in self.session.classifications() {
      let (foreground, background) = match classification {
        Classification::Correct => (Color::Green, Color::Reset),
        Classification::Incorrect => (Color::Red, Color::Reset),
        Classification::Expected => (Color::Black, Color::Yellow),
        Classification::Pending => (Color::White, Color::Reset),
      };

      command!(
        SetForegroundColor(foreground),
        SetBackgroundColor(background),
        Print(c)
      )?;
    }

    let overflow = self
      .session
      .typed()
      .chars()
      .skip(self.session.target().len())
      .collect::<String>();

    if !overflow.is_empty() {
      command!(
        SetForegroundColor(Color::Red),
        SetBackgroundColor(Color::Reset),
        Print(overflow)
      )?;
    }

    command!(ResetColor, MoveToNextLine(2))?;

    if !self.hide_keyboard {
      self.display_keyboard()?;
    }

    let statistics = match self.session.latest_statistics() {
      Some(statistics) => statistics.to_string(),
      None => "Start typing to begin".into(),
    };

    match self.flash(now) {
      Some(Cue::Correct) => command!(
        SetForegroundColor(Color::Black),
        SetBackgroundColor(Color::Green)
      )?,
      Some(Cue::Incorrect) => command!(
        SetForegroundColor(Color::Black),
        SetBackgroundColor(Color::Red)
      )?,
      None => {}
    }

    command!(Print(statistics), ResetColor, MoveToNextLine(2))?;

    if self.session.is_complete() {
      command!(Print("Complete! Press Esc to quit."))?;
    } else {
      command!(Print("Press Esc to quit."))?;
    }

    command!(MoveToColumn(0))?;

    stdout().flush()?;

    Ok(())
  }

  fn display_cap(&self, cap: Cap, width: usize) -> Result {
    let lit = self
      .session
      .highlight()
      .is_some_and(|highlight| highlight.lights(cap));

    if lit {
      command!(
        SetForegroundColor(Color::Black),
        SetBackgroundColor(Color::Yellow)
      )?;
    }

    command!(Print(format!("[{cap:^width$}]")), ResetColor)?;

    Ok(())
  }

  fn display_keyboard(&self) -> Result {
    for (i, row) in ROWS.iter().enumerate() {
      command!(Print(" ".repeat(i * 2)))?;

      let shift_row = i == ROWS.len() - 1;

      if shift_row {
        self.display_cap(Cap::Shift, 5)?;
      }

      for c in row.chars() {
        self.display_cap(Cap::Char(c), 1)?;
      }

      if shift_row {
        self.display_cap(Cap::Shift, 5)?;
      }

      command!(MoveToNextLine(1))?;
    }

    command!(Print(" ".repeat(12)))?;

    self.display_cap(Cap::Space, 17)?;

    command!(MoveToNextLine(2))?;

    Ok(())
  }

  fn event_loop(&mut self) -> Result {
    loop {
      self.display(Instant::now())?;

      if !event::poll(TICK)? {
        continue;
      }

      match self.handle_event(&event::read()?, Instant::now()) {
        State::Quit => return Ok(()),
        State::Continuing(Some(Cue::Incorrect)) if !self.quiet => command!(Print(BELL))?,
        State::Continuing(_) => {}
      }
    }
  }

  /// The cue still showing on the status line at `now`, if any.
  fn flash(&self, now: Instant) -> Option<Cue> {
    self
      .flash
      .filter(|&(_, at)| now.saturating_duration_since(at) < FLASH)
      .map(|(cue, _)| cue)
  }

  fn handle_event(&mut self, event: &Event, now: Instant) -> State {
    if Command::from_event(event) == Some(Command::Quit) {
      log::info!("quit after {} keystrokes", self.session.total());
      return State::Quit;
    }

    let Some(key) = Key::from_event(event) else {
      return State::Continuing(None);
    };

    let cue = self.session.handle_key(key, now).cue();

    if let Some(cue) = cue {
      log::debug!("cue: {cue:?}");
      self.flash = Some((cue, now));
    }

    if self.session.is_complete() && !self.completed {
      self.completed = true;
      log::info!(
        "sentence complete: {} of {} keystrokes correct",
        self.session.correct(),
        self.session.total()
      );
    }

    State::Continuing(cue)
  }

  pub(crate) fn run(&mut self) -> Result<Option<Statistics>> {
    terminal::enable_raw_mode()?;

    command!(Hide)?;

    let result = self.event_loop();

    let restored = command!(ResetColor, Clear(ClearType::All), MoveTo(0, 0), Show)
      .and_then(|()| terminal::disable_raw_mode());

    result?;
    restored?;

    Ok(self.session.latest_statistics())
  }
}
