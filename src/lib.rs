//! Sequence-aware keyboard shortcut dispatch
//!
//! This crate matches streams of keypress events against registered
//! shortcut bindings and performs an action on the bound target when a
//! full sequence is typed within a sliding inactivity window. It supports:
//! - Single-chord shortcuts (`"Control+K"`)
//! - Multi-chord sequences (`"g i"`: press `g` then `i`)
//! - Comma-separated alternatives per binding (`"Control+K,g i"`)
//!
//! # Architecture
//!
//! ```text
//! KeyPress → chord string → HotkeyMap cursor walk over SequenceTree → KeyOutcome
//! ```
//!
//! The host owns one [`HotkeyMap`] instance, registers targets under
//! binding strings, and routes every keypress through
//! [`HotkeyMap::on_key`]. A [`KeyOutcome::Fired`] result means the bound
//! target's action was performed and the press's default behavior should
//! be suppressed; every other outcome leaves the press alone.
//!
//! # Registering bindings
//!
//! ```
//! use hotkeymap::{HotkeyMap, KeyPress, KeyOutcome, Target};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct ButtonId(&'static str);
//!
//! impl Target for ButtonId {
//!     fn is_text_input(&self) -> bool { false }
//!     fn focus(&self) {}
//!     fn activate(&self) { println!("clicked {}", self.0); }
//! }
//!
//! let mut hotkeys = HotkeyMap::new();
//! hotkeys.register(ButtonId("issues"), "g i");
//!
//! assert_eq!(hotkeys.on_key(&KeyPress::key("g"), None), KeyOutcome::Pending);
//! assert_eq!(
//!     hotkeys.on_key(&KeyPress::key("i"), None),
//!     KeyOutcome::Fired(ButtonId("issues")),
//! );
//! ```

pub mod binding;
pub mod config;
pub mod engine;
pub mod target;
pub mod trie;
pub mod types;
#[cfg(feature = "winit")]
pub mod winit_adapter;

// Re-export commonly used types
pub use binding::{expand_binding, Sequence};
pub use config::{load_bindings_file, parse_bindings_yaml, BindingEntry, ConfigError, HotkeyConfig};
pub use engine::{
    FeedChange, HotkeyMap, KeyOutcome, MatchConfig, TargetPreference, DEFAULT_IDLE_TIMEOUT,
};
pub use target::{fire, Target};
pub use trie::{NodeId, SequenceTree};
pub use types::{KeyPress, Modifiers};
#[cfg(feature = "winit")]
pub use winit_adapter::keypress_from_winit;
