use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Modifier {
  Alt,
  CapsLock,
  Control,
  Shift,
}

/// A keystroke as seen by a typing session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Key {
  Backspace,
  Char(char),
  Modifier(Modifier),
}

impl Key {
  pub(crate) fn from_event(event: &Event) -> Option<Self> {
    let Event::Key(key) = event else {
      return None;
    };

    if key.kind == KeyEventKind::Release {
      return None;
    }

    match key.code {
      KeyCode::Backspace => Some(Self::Backspace),
      KeyCode::CapsLock => Some(Self::Modifier(Modifier::CapsLock)),
      KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
      KeyCode::Char(c) => Some(Self::Char(c)),
      KeyCode::Modifier(modifier) => match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => {
          Some(Self::Modifier(Modifier::Shift))
        }
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => {
          Some(Self::Modifier(Modifier::Control))
        }
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => {
          Some(Self::Modifier(Modifier::Alt))
        }
        _ => None,
      },
      _ => None,
    }
  }
}

impl FromStr for Key {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Backspace" => Ok(Self::Backspace),
      "Shift" => Ok(Self::Modifier(Modifier::Shift)),
      "CapsLock" => Ok(Self::Modifier(Modifier::CapsLock)),
      "Alt" => Ok(Self::Modifier(Modifier::Alt)),
      "Control" => Ok(Self::Modifier(Modifier::Control)),
      _ => {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
          (Some(c), None) if !c.is_control() => Ok(Self::Char(c)),
          (None, _) => bail!("empty key name"),
          _ => Err(anyhow!("unknown key `{s}`")),
        }
      }
    }
  }
}

/// Keys that drive the program rather than the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Command {
  Quit,
}

impl Command {
  pub(crate) fn from_event(event: &Event) -> Option<Self> {
    let Event::Key(key) = event else {
      return None;
    };

    if key.kind == KeyEventKind::Release {
      return None;
    }

    match key.code {
      KeyCode::Esc => Some(Self::Quit),
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
      _ => None,
    }
  }
}
