use super::*;

pub(crate) const SENTENCE: &str = "The quick brown fox jumps over the lazy dog! Can you type it?";

/// Signal for the audible/visual cue played after a keystroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Cue {
  Correct,
  Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Outcome {
  Correct,
  Deleted,
  Ignored,
  Incorrect,
  /// A space typed where something else was expected.
  Space,
}

impl Outcome {
  pub(crate) fn cue(self) -> Option<Cue> {
    match self {
      Self::Correct => Some(Cue::Correct),
      Self::Incorrect => Some(Cue::Incorrect),
      Self::Deleted | Self::Ignored | Self::Space => None,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Classification {
  Correct,
  Expected,
  Incorrect,
  Pending,
}

/// A single pass over a fixed target text.
///
/// Counters only ever grow: deleting a character shrinks the typed buffer
/// but leaves `correct` and `total` untouched, so a corrected mistake still
/// counts against accuracy. Typing past the end of the target keeps
/// appending and counting.
///
/// The clock only advances with keystrokes: statistics are measured at the
/// last handled key, so idling after the final key does not dilute them.
#[derive(Clone, Debug)]
pub(crate) struct Session {
  correct: usize,
  last_keystroke: Option<Instant>,
  started_at: Option<Instant>,
  target: Vec<char>,
  total: usize,
  typed: Vec<char>,
}

impl Default for Session {
  fn default() -> Self {
    Self::new(SENTENCE)
  }
}

impl Session {
  pub(crate) fn new(target: &str) -> Self {
    Self {
      correct: 0,
      last_keystroke: None,
      started_at: None,
      target: target.chars().collect(),
      total: 0,
      typed: Vec::new(),
    }
  }

  pub(crate) fn classification(&self, index: usize) -> Classification {
    match self.typed.get(index) {
      Some(typed) if self.target.get(index) == Some(typed) => Classification::Correct,
      Some(_) => Classification::Incorrect,
      None if index == self.typed.len() => Classification::Expected,
      None => Classification::Pending,
    }
  }

  pub(crate) fn classifications(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
    self
      .target
      .iter()
      .enumerate()
      .map(|(index, &c)| (c, self.classification(index)))
  }

  pub(crate) fn correct(&self) -> usize {
    self.correct
  }

  pub(crate) fn handle_key(&mut self, key: Key, now: Instant) -> Outcome {
    let expected = self.next_expected();

    let outcome = match key {
      Key::Modifier(_) => return Outcome::Ignored,
      Key::Backspace => {
        self.typed.pop();
        Outcome::Deleted
      }
      Key::Char(c) if Some(c) == expected => {
        self.typed.push(c);
        self.correct += 1;
        self.total += 1;
        Outcome::Correct
      }
      Key::Char(' ') => {
        self.typed.push(' ');
        if expected == Some(' ') {
          self.correct += 1;
        }
        self.total += 1;
        Outcome::Space
      }
      Key::Char(c) => {
        self.typed.push(c);
        self.total += 1;
        Outcome::Incorrect
      }
    };

    if self.started_at.is_none() {
      log::trace!("starting clock on {key:?}");
      self.started_at = Some(now);
    }

    self.last_keystroke = Some(now);

    log::trace!(
      "{key:?} -> {outcome:?} (typed {}/{}, correct {}, total {})",
      self.typed.len(),
      self.target.len(),
      self.correct,
      self.total
    );

    outcome
  }

  pub(crate) fn highlight(&self) -> Option<Highlight> {
    self.next_expected().map(Highlight::for_char)
  }

  pub(crate) fn is_complete(&self) -> bool {
    self.typed.len() >= self.target.len()
  }

  pub(crate) fn next_expected(&self) -> Option<char> {
    self.target.get(self.typed.len()).copied()
  }

  /// Statistics as of the most recent non-ignored keystroke.
  pub(crate) fn latest_statistics(&self) -> Option<Statistics> {
    self.statistics(self.last_keystroke?)
  }

  #[cfg(test)]
  pub(crate) fn started_at(&self) -> Option<Instant> {
    self.started_at
  }

  pub(crate) fn statistics(&self, now: Instant) -> Option<Statistics> {
    self
      .started_at
      .map(|started_at| Statistics::compute(self.correct, self.total, started_at, now))
  }

  pub(crate) fn target(&self) -> &[char] {
    &self.target
  }

  pub(crate) fn total(&self) -> usize {
    self.total
  }

  pub(crate) fn typed(&self) -> String {
    self.typed.iter().collect()
  }
}
