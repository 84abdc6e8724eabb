use super::*;

/// Shortest elapsed time for which a typing speed is reported.
pub(crate) const MIN_ELAPSED: Duration = Duration::from_secs(1);

const CHARACTERS_PER_WORD: f64 = 5.0;

#[derive(Debug, Clone)]
pub(crate) struct Statistics {
  pub(crate) accuracy: Option<f64>,
  pub(crate) correct: usize,
  pub(crate) elapsed_time: Duration,
  pub(crate) total: usize,
  pub(crate) wpm: Option<f64>,
}

impl Statistics {
  pub(crate) fn compute(correct: usize, total: usize, started_at: Instant, now: Instant) -> Self {
    let elapsed_time = now.saturating_duration_since(started_at);

    let wpm = (elapsed_time >= MIN_ELAPSED).then(|| {
      (correct as f64 / CHARACTERS_PER_WORD) / (elapsed_time.as_secs_f64() / 60.0)
    });

    let accuracy = (total > 0).then(|| (correct as f64 / total as f64) * 100.0);

    Self {
      accuracy: accuracy.filter(|accuracy| accuracy.is_finite()),
      correct,
      elapsed_time,
      total,
      wpm: wpm.filter(|wpm| wpm.is_finite()),
    }
  }

  pub(crate) fn rounded_accuracy(&self) -> Option<u64> {
    self.accuracy.map(|accuracy| accuracy.round() as u64)
  }

  pub(crate) fn rounded_wpm(&self) -> Option<u64> {
    self.wpm.map(|wpm| wpm.round() as u64)
  }
}

struct Available(Option<u64>);

impl Display for Available {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(value) => write!(f, "{value}"),
      None => write!(f, "--"),
    }
  }
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {} | Accuracy: {}% | Correct: {}/{} | Elapsed Time: {:.2}s",
      Available(self.rounded_wpm()),
      Available(self.rounded_accuracy()),
      self.correct,
      self.total,
      self.elapsed_time.as_secs_f64()
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, approx::assert_abs_diff_eq};

  #[test]
  fn one_minute_of_typing() {
    let now = Instant::now();

    let statistics = Statistics::compute(50, 60, now - Duration::from_secs(60), now);

    assert_abs_diff_eq!(statistics.wpm.unwrap(), 10.0, epsilon = 0.01);
    assert_abs_diff_eq!(statistics.accuracy.unwrap(), 83.33, epsilon = 0.01);
    assert_eq!(statistics.rounded_wpm(), Some(10));
    assert_eq!(statistics.rounded_accuracy(), Some(83));
  }

  #[test]
  fn half_a_minute_doubles_speed() {
    let now = Instant::now();

    let statistics = Statistics::compute(50, 50, now - Duration::from_secs(30), now);

    assert_abs_diff_eq!(statistics.wpm.unwrap(), 20.0, epsilon = 0.01);
    assert_eq!(statistics.rounded_accuracy(), Some(100));
  }

  #[test]
  fn accuracy_rounds_to_nearest_percent() {
    let now = Instant::now();

    let statistics = Statistics::compute(2, 3, now - Duration::from_secs(10), now);

    assert_eq!(statistics.rounded_accuracy(), Some(67));

    let statistics = Statistics::compute(1, 8, now - Duration::from_secs(10), now);

    assert_abs_diff_eq!(statistics.accuracy.unwrap(), 12.5, epsilon = 0.001);
    assert_eq!(statistics.rounded_accuracy(), Some(13));
  }

  #[test]
  fn no_keystrokes_has_no_accuracy() {
    let now = Instant::now();

    let statistics = Statistics::compute(0, 0, now - Duration::from_secs(5), now);

    assert_eq!(statistics.accuracy, None);
    assert_eq!(statistics.rounded_accuracy(), None);
    assert_eq!(statistics.rounded_wpm(), Some(0));
  }

  #[test]
  fn too_little_time_has_no_speed() {
    let now = Instant::now();

    let statistics = Statistics::compute(3, 3, now, now);

    assert_eq!(statistics.wpm, None);
    assert_eq!(statistics.rounded_accuracy(), Some(100));

    let statistics = Statistics::compute(3, 3, now - MIN_ELAPSED / 2, now);

    assert_eq!(statistics.wpm, None);
  }

  #[test]
  fn clock_running_backwards_is_treated_as_no_time() {
    let now = Instant::now();

    let statistics = Statistics::compute(3, 3, now + Duration::from_secs(5), now);

    assert_eq!(statistics.elapsed_time, Duration::ZERO);
    assert_eq!(statistics.wpm, None);
  }

  #[test]
  fn display_unavailable_values() {
    let now = Instant::now();

    assert_eq!(
      Statistics::compute(0, 0, now, now).to_string(),
      "WPM: -- | Accuracy: --% | Correct: 0/0 | Elapsed Time: 0.00s"
    );
  }

  #[test]
  fn display_available_values() {
    let now = Instant::now();

    assert_eq!(
      Statistics::compute(2, 3, now - Duration::from_secs(12), now).to_string(),
      "WPM: 2 | Accuracy: 67% | Correct: 2/3 | Elapsed Time: 12.00s"
    );
  }
}
