//! Self-delimiting base-15 codes and the numeral stepper.
//!
//! A code is zero or more continuation digits `f` followed by exactly one
//! terminal digit in `0-9a-e`. Codes enumerate in the total order
//!
//! ```text
//! 0 1 .. 9 a .. e   f0 f1 .. fe   ff0 ff1 .. ffe   fff0 ..
//! ```
//!
//! so the `n`-th code (its *rank*) has `n / 15` continuation digits and the
//! terminal digit with value `n % 15`.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Marks that more nibbles follow in the same code.
pub const CONTINUATION: char = 'f';

/// Number of distinct terminal digits (`0-9a-e`).
pub const RADIX: usize = 15;

const TERMINAL_DIGITS: [char; RADIX] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e',
];

/// Returns true for the digits that may close a code.
#[inline]
pub fn is_terminal_digit(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='e')
}

/// A single variable-length code, e.g. `"3"`, `"f0"`, `"ffe"`.
///
/// The derived ordering on the digit string coincides with rank order: a
/// shorter continuation prefix meets a terminal digit where a longer one
/// still has `f`, and terminal digits sort `0 < .. < 9 < a < .. < e`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    /// The first code in the order, `0`, assigned to the most frequent symbol.
    pub fn zero() -> Self {
        Code(String::from("0"))
    }

    /// Build a code from its continuation count and terminal digit.
    ///
    /// Callers guarantee `terminal` is in `0-9a-e`.
    pub(crate) fn from_parts(continuations: usize, terminal: char) -> Self {
        debug_assert!(is_terminal_digit(terminal));
        let mut s = String::with_capacity(continuations + 1);
        s.extend(std::iter::repeat(CONTINUATION).take(continuations));
        s.push(terminal);
        Code(s)
    }

    /// The code at position `rank` in the total order.
    pub fn from_rank(rank: usize) -> Self {
        Self::from_parts(rank / RADIX, TERMINAL_DIGITS[rank % RADIX])
    }

    /// Position of this code in the total order.
    pub fn rank(&self) -> usize {
        let value = self.terminal().to_digit(16).unwrap_or(0) as usize;
        self.continuations() * RADIX + value
    }

    /// The next code in the total order.
    ///
    /// Only the terminal digit is rewritten. `e` steps to `f0`, which opens
    /// a new nibble; every earlier digit is already `f` and carries through
    /// untouched.
    pub fn successor(&self) -> Code {
        let body = &self.as_str()[..self.continuations()];
        let mut next = String::with_capacity(self.nibbles() + 1);
        next.push_str(body);
        next.push_str(successor_digit(self.terminal()));
        Code(next)
    }

    /// Number of leading `f` digits.
    pub fn continuations(&self) -> usize {
        self.nibbles() - 1
    }

    /// The closing digit.
    pub fn terminal(&self) -> char {
        self.0.chars().next_back().unwrap_or('0')
    }

    /// Number of nibbles (digits) in the code, always at least one.
    pub fn nibbles(&self) -> usize {
        self.0.len()
    }

    /// The digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Step `code` to its successor. Equivalent to [`Code::successor`].
pub fn increment(code: &Code) -> Code {
    code.successor()
}

fn successor_digit(terminal: char) -> &'static str {
    match terminal {
        '0' => "1",
        '1' => "2",
        '2' => "3",
        '3' => "4",
        '4' => "5",
        '5' => "6",
        '6' => "7",
        '7' => "8",
        '8' => "9",
        '9' => "a",
        'a' => "b",
        'b' => "c",
        'c' => "d",
        'd' => "e",
        'e' => "f0",
        _ => unreachable!("terminal digit outside 0-e"),
    }
}

fn validate(s: &str) -> Result<()> {
    let mut digits = s.chars();
    let well_formed = match digits.next_back() {
        Some(last) => is_terminal_digit(last) && digits.all(|c| c == CONTINUATION),
        None => false,
    };
    if well_formed {
        Ok(())
    } else {
        Err(Error::InvalidCode(s.to_owned()))
    }
}

impl Default for Code {
    fn default() -> Self {
        Code::zero()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate(s)?;
        Ok(Code(s.to_owned()))
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        validate(&s)?;
        Ok(Code(s))
    }
}

impl TryFrom<&str> for Code {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> String {
        code.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Code;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Code {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Code {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Code::try_from(s).map_err(de::Error::custom)
        }
    }
}
