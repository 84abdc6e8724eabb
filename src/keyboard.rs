use super::*;

/// Symbols typed with shift held, paired with their unshifted key.
pub(crate) const SHIFTED: &[(char, char)] = &[
  ('~', '`'),
  ('!', '1'),
  ('@', '2'),
  ('#', '3'),
  ('$', '4'),
  ('%', '5'),
  ('^', '6'),
  ('&', '7'),
  ('*', '8'),
  ('(', '9'),
  (')', '0'),
  ('_', '-'),
  ('+', '='),
  ('{', '['),
  ('}', ']'),
  ('|', '\\'),
  (':', ';'),
  ('"', '\''),
  ('<', ','),
  ('>', '.'),
  ('?', '/'),
];

/// US QWERTY character rows, unshifted.
pub(crate) const ROWS: [&str; 4] = [
  "`1234567890-=",
  "qwertyuiop[]\\",
  "asdfghjkl;'",
  "zxcvbnm,./",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Cap {
  Char(char),
  Shift,
  Space,
}

impl Display for Cap {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Char(c) => f.pad(c.encode_utf8(&mut [0; 4])),
      Self::Shift => f.pad("shift"),
      Self::Space => f.pad("space"),
    }
  }
}

/// Which caps to light up for the next expected character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Highlight {
  pub(crate) cap: Cap,
  pub(crate) shift: bool,
}

impl Highlight {
  pub(crate) fn for_char(c: char) -> Self {
    if c == ' ' {
      return Self {
        cap: Cap::Space,
        shift: false,
      };
    }

    if let Some(&(_, base)) = SHIFTED.iter().find(|(symbol, _)| *symbol == c) {
      return Self {
        cap: Cap::Char(base),
        shift: true,
      };
    }

    Self {
      cap: Cap::Char(c.to_lowercase().next().unwrap_or(c)),
      shift: c.is_uppercase(),
    }
  }

  pub(crate) fn lights(&self, cap: Cap) -> bool {
    cap == self.cap || (cap == Cap::Shift && self.shift)
  }
}
