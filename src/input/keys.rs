use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key name: '{0}'")]
pub struct UnknownKey(pub String);

macro_rules! keys {
    ($($variant:ident),* $(,)?) => {
        /// A physical key or mouse button, named the way preferences store it
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every key, in declaration order
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Canonical name written to preferences
            pub fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

keys! {
    Alpha0, Alpha1, Alpha2, Alpha3, Alpha4, Alpha5, Alpha6, Alpha7, Alpha8, Alpha9,
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    LeftShift, RightShift, LeftControl, RightControl, LeftAlt, RightAlt,
    Space, Return, Escape, Tab, Backspace,
    UpArrow, DownArrow, LeftArrow, RightArrow,
    Mouse0, Mouse1, Mouse2, Mouse3, Mouse4, Mouse5, Mouse6,
}

impl Key {
    /// Top-row digit key for 0-9
    pub fn digit(n: u8) -> Option<Key> {
        const DIGITS: [Key; 10] = [
            Key::Alpha0,
            Key::Alpha1,
            Key::Alpha2,
            Key::Alpha3,
            Key::Alpha4,
            Key::Alpha5,
            Key::Alpha6,
            Key::Alpha7,
            Key::Alpha8,
            Key::Alpha9,
        ];
        DIGITS.get(n as usize).copied()
    }

    pub fn is_mouse_button(self) -> bool {
        self.name().starts_with("Mouse")
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a stored key name
///
/// Names match case-insensitively, and a bare digit is read as the
/// matching top-row key ("1" is `Alpha1`).
impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        if let [digit @ b'0'..=b'9'] = name.as_bytes() {
            if let Some(key) = Key::digit(digit - b'0') {
                return Ok(key);
            }
        }

        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("G".parse::<Key>(), Ok(Key::G));
        assert_eq!("Alpha1".parse::<Key>(), Ok(Key::Alpha1));
        assert_eq!("LeftShift".parse::<Key>(), Ok(Key::LeftShift));
        assert_eq!("Mouse0".parse::<Key>(), Ok(Key::Mouse0));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("leftshift".parse::<Key>(), Ok(Key::LeftShift));
        assert_eq!(" g ".parse::<Key>(), Ok(Key::G));
    }

    #[test]
    fn test_parse_digit_alias() {
        assert_eq!("1".parse::<Key>(), Ok(Key::Alpha1));
        assert_eq!("0".parse::<Key>(), Ok(Key::Alpha0));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("Banana".parse::<Key>(), Err(UnknownKey("Banana".into())));
        assert!("".parse::<Key>().is_err());
        assert!("12".parse::<Key>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for key in Key::ALL {
            assert_eq!(key.name().parse::<Key>(), Ok(*key));
        }
    }

    #[test]
    fn test_mouse_buttons() {
        assert!(Key::Mouse0.is_mouse_button());
        assert!(!Key::M.is_mouse_button());
    }
}
