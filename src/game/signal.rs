//! Abstract input signals
//!
//! Front ends reduce raw key presses and button clicks to a `Signal` before
//! handing them to the controller.

/// One unit of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Letter(char),
    Backspace,
    Submit,
    NextRound,
}

impl Signal {
    /// Map a key name to a signal
    ///
    /// A single ASCII letter becomes `Letter`; `"Backspace"` and `"Enter"`
    /// (any case) become `Backspace` and `Submit`. Anything else is `None`.
    ///
    /// # Examples
    /// ```
    /// use sedle::game::Signal;
    ///
    /// assert_eq!(Signal::from_key("Q"), Some(Signal::Letter('Q')));
    /// assert_eq!(Signal::from_key("Enter"), Some(Signal::Submit));
    /// assert_eq!(Signal::from_key("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return ch.is_ascii_alphabetic().then_some(Self::Letter(ch));
        }

        if key.eq_ignore_ascii_case("backspace") {
            Some(Self::Backspace)
        } else if key.eq_ignore_ascii_case("enter") {
            Some(Self::Submit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(Signal::from_key("a"), Some(Signal::Letter('a')));
        assert_eq!(Signal::from_key("Z"), Some(Signal::Letter('Z')));
    }

    #[test]
    fn named_keys_case_insensitive() {
        assert_eq!(Signal::from_key("backspace"), Some(Signal::Backspace));
        assert_eq!(Signal::from_key("BACKSPACE"), Some(Signal::Backspace));
        assert_eq!(Signal::from_key("enter"), Some(Signal::Submit));
    }

    #[test]
    fn other_keys_ignored() {
        for key in ["", "1", " ", "ab", "Tab", "ArrowLeft", "é"] {
            assert_eq!(Signal::from_key(key), None, "{key:?}");
        }
    }
}
