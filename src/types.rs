//! Core input types: Modifiers and KeyPress, plus chord encoding

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const ALT: Modifiers = Modifiers(0b0010);
    pub const META: Modifiers = Modifiers(0b0100); // Cmd on macOS, Win on Windows
    pub const SHIFT: Modifiers = Modifiers(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, alt: bool, meta: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if alt {
            bits |= 0b0010;
        }
        if meta {
            bits |= 0b0100;
        }
        if shift {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if meta (cmd/win) is held
    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Control");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        if self.shift() {
            parts.push("Shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// One keypress event as delivered by the host: modifier flags plus a key
/// identifier string in `KeyboardEvent.key` style (`"k"`, `"K"`, `"Enter"`,
/// `"ArrowUp"`).
///
/// `consumed` marks a press that some other handler already acted on; the
/// matcher ignores such presses without touching its state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub mods: Modifiers,
    pub key: String,
    pub consumed: bool,
}

impl KeyPress {
    /// Create a keypress with modifiers
    pub fn new(key: impl Into<String>, mods: Modifiers) -> Self {
        Self {
            mods,
            key: key.into(),
            consumed: false,
        }
    }

    /// Create a keypress with no modifiers
    pub fn key(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Mark this press as already handled elsewhere (builder style)
    pub fn mark_consumed(mut self) -> Self {
        self.consumed = true;
        self
    }

    /// Encode this press as a canonical chord string.
    ///
    /// Token order is fixed: `Control+`, `Alt+`, `Meta+`, `Shift+`, then the
    /// key identifier. `Shift+` is emitted only when the key's upper-cased
    /// form differs from the key itself: `"K"` and `"?"` already carry their
    /// shift state in the symbol, while named keys like `"Enter"` do not, so
    /// shift+enter encodes as `"Shift+Enter"` but shift+k encodes as `"K"`.
    pub fn chord(&self) -> String {
        let mut out = String::new();
        if self.mods.ctrl() {
            out.push_str("Control+");
        }
        if self.mods.alt() {
            out.push_str("Alt+");
        }
        if self.mods.meta() {
            out.push_str("Meta+");
        }
        if self.mods.shift() && self.key.to_uppercase() != self.key {
            out.push_str("Shift+");
        }
        out.push_str(&self.key);
        out
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chord())
    }
}
