//! Adapter to convert winit key events to our KeyPress type

use winit::keyboard::{Key, NamedKey};

use crate::types::{KeyPress, Modifiers};

/// Convert winit key event data to our KeyPress type.
///
/// Character keys pass through with the case winit produced, which is what
/// the chord encoder's shift rule relies on. Named keys map to their
/// `KeyboardEvent.key` names (`"Enter"`, `"ArrowUp"`), except space, which
/// becomes `"Space"` so it survives the space-separated binding grammar.
///
/// Returns None if the key cannot be mapped (e.g., dead keys, bare
/// modifier presses)
pub fn keypress_from_winit(
    logical_key: &Key,
    ctrl: bool,
    alt: bool,
    logo: bool, // logo = meta = cmd on macOS
    shift: bool,
) -> Option<KeyPress> {
    let mods = Modifiers::new(ctrl, alt, logo, shift);

    let key = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some("Enter"),
            NamedKey::Escape => Some("Escape"),
            NamedKey::Tab => Some("Tab"),
            NamedKey::Backspace => Some("Backspace"),
            NamedKey::Delete => Some("Delete"),
            NamedKey::Space => Some("Space"),

            // Arrows
            NamedKey::ArrowUp => Some("ArrowUp"),
            NamedKey::ArrowDown => Some("ArrowDown"),
            NamedKey::ArrowLeft => Some("ArrowLeft"),
            NamedKey::ArrowRight => Some("ArrowRight"),

            // Navigation
            NamedKey::Home => Some("Home"),
            NamedKey::End => Some("End"),
            NamedKey::PageUp => Some("PageUp"),
            NamedKey::PageDown => Some("PageDown"),
            NamedKey::Insert => Some("Insert"),

            // Function keys
            NamedKey::F1 => Some("F1"),
            NamedKey::F2 => Some("F2"),
            NamedKey::F3 => Some("F3"),
            NamedKey::F4 => Some("F4"),
            NamedKey::F5 => Some("F5"),
            NamedKey::F6 => Some("F6"),
            NamedKey::F7 => Some("F7"),
            NamedKey::F8 => Some("F8"),
            NamedKey::F9 => Some("F9"),
            NamedKey::F10 => Some("F10"),
            NamedKey::F11 => Some("F11"),
            NamedKey::F12 => Some("F12"),

            _ => None,
        }
        .map(str::to_owned),

        Key::Character(s) => Some(s.to_string()),

        _ => None,
    };

    key.map(|key| KeyPress::new(key, mods))
}
