//! HotkeyMap: the matching cursor and binding registry over a SequenceTree

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::binding::expand_binding;
use crate::target::{fire, Target};
use crate::trie::{NodeId, SequenceTree};
use crate::types::KeyPress;

/// How long a partially matched sequence stays alive without further input
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(1500);

/// Which target fires when several share one sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetPreference {
    /// Later registrations reflect the most current UI state
    #[default]
    LastRegistered,
    FirstRegistered,
}

/// Tunable matching policy
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Sliding inactivity window; the cursor resets to the root when this
    /// much time passes between chords of a sequence
    pub idle_timeout: Duration,
    pub preference: TargetPreference,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            preference: TargetPreference::default(),
        }
    }
}

/// Result of feeding one keypress to [`HotkeyMap::on_key`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome<T> {
    /// The press was consumed elsewhere or a text field has focus; no state
    /// changed and the press's default behavior stands
    Ignored,
    /// No registered sequence continues with this chord; the cursor reset
    /// and the press's default behavior stands
    NoMatch,
    /// The chord advanced a partial sequence; await more input
    Pending,
    /// A full sequence completed: the target's action was performed and the
    /// host should suppress the press's default behavior
    Fired(T),
}

/// What the host should do with its keypress feed after a registration
/// change. The feed is attached once when the first binding appears and
/// detached when the last one goes away, never per binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedChange {
    /// First binding registered: start delivering keypresses
    Attach,
    /// Last binding removed: stop delivering keypresses
    Detach,
    Unchanged,
}

/// Sequence-aware shortcut dispatch: a chord trie, a reverse registry for
/// clean removal, and a single match cursor with a sliding idle deadline.
///
/// One instance owns all matching state; the host routes every keypress
/// through it. Operations are synchronous and the type is single-threaded;
/// a multi-threaded host must serialize delivery.
#[derive(Debug)]
pub struct HotkeyMap<T> {
    tree: SequenceTree<T>,
    /// Target identity → terminals it was inserted into, for removal only
    bound: HashMap<T, Vec<NodeId>>,
    cursor: NodeId,
    deadline: Option<Instant>,
    config: MatchConfig,
}

impl<T: Target + Clone + Eq + Hash> HotkeyMap<T> {
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        let tree = SequenceTree::new();
        let cursor = tree.root();
        Self {
            tree,
            bound: HashMap::new(),
            cursor,
            deadline: None,
            config,
        }
    }

    /// Register a target under a binding string such as `"Control+K,g i"`.
    ///
    /// Each comma-separated alternative becomes one sequence in the trie
    /// with `target` appended to its terminal. A binding that expands to no
    /// sequences is a no-op. Registering the same target again adds the new
    /// terminals alongside the old ones.
    ///
    /// Inserting a sequence whose prefix collides with an existing complete
    /// binding replaces that binding's terminal, silently dropping its
    /// targets (and vice versa for a shorter sequence through an existing
    /// prefix). See [`SequenceTree::insert`].
    pub fn register(&mut self, target: T, binding: &str) -> FeedChange {
        let was_empty = self.tree.is_empty();
        let mut leaves = Vec::new();
        for sequence in expand_binding(binding) {
            if let Some(leaf) = self.tree.insert(&sequence) {
                self.tree.push_target(leaf, target.clone());
                leaves.push(leaf);
            }
        }
        if leaves.is_empty() {
            return FeedChange::Unchanged;
        }
        tracing::debug!(binding, sequences = leaves.len(), "registered binding");
        self.bound.entry(target).or_default().extend(leaves);
        if was_empty {
            FeedChange::Attach
        } else {
            FeedChange::Unchanged
        }
    }

    /// Remove every binding previously registered for `target`.
    ///
    /// Terminals the target no longer appears in (for example after a
    /// prefix collision replaced them) are skipped. Unregistering an
    /// unknown target is a no-op. An in-flight partial match is not
    /// cancelled; it simply fails its next lookup and resets.
    pub fn unregister(&mut self, target: &T) -> FeedChange {
        let Some(leaves) = self.bound.remove(target) else {
            return FeedChange::Unchanged;
        };
        let had_bindings = !self.tree.is_empty();
        for leaf in leaves {
            self.tree.remove_target(leaf, target);
        }
        tracing::debug!("unregistered target");
        if had_bindings && self.tree.is_empty() {
            FeedChange::Detach
        } else {
            FeedChange::Unchanged
        }
    }

    /// Feed one keypress, stamped with the current time
    pub fn on_key(&mut self, press: &KeyPress, focus: Option<&T>) -> KeyOutcome<T> {
        self.on_key_at(press, focus, Instant::now())
    }

    /// Feed one keypress with an explicit timestamp.
    ///
    /// `focus` is the target that currently holds input focus, if the host
    /// tracks one; a focused text-editing field makes the press invisible
    /// to matching so shortcuts never interfere with typing.
    ///
    /// Timeout handling is lazy: an expired deadline resets the cursor to
    /// the root before this press is processed, which is equivalent to a
    /// timer having fired in between. Hosts with a real timer queue can
    /// instead schedule [`Self::reset`] at [`Self::deadline`].
    pub fn on_key_at(&mut self, press: &KeyPress, focus: Option<&T>, now: Instant) -> KeyOutcome<T> {
        if press.consumed {
            return KeyOutcome::Ignored;
        }
        if focus.is_some_and(Target::is_text_input) {
            return KeyOutcome::Ignored;
        }

        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.reset();
        }
        self.deadline = Some(now + self.config.idle_timeout);

        let chord = press.chord();
        let Some(next) = self.tree.lookup(self.cursor, &chord) else {
            tracing::trace!(chord = %chord, "no edge, cursor reset");
            self.reset();
            return KeyOutcome::NoMatch;
        };
        self.cursor = next;

        if !self.tree.is_terminal(next) {
            tracing::trace!(chord = %chord, "partial match pending");
            return KeyOutcome::Pending;
        }

        let targets = self.tree.targets(next);
        let matched = match self.config.preference {
            TargetPreference::LastRegistered => targets.last(),
            TargetPreference::FirstRegistered => targets.first(),
        }
        .cloned();
        self.reset();
        match matched {
            Some(target) => {
                tracing::trace!(chord = %chord, "sequence completed, firing");
                fire(&target);
                KeyOutcome::Fired(target)
            }
            None => KeyOutcome::NoMatch,
        }
    }

    /// Force the cursor back to the root and disarm the idle deadline
    pub fn reset(&mut self) {
        self.cursor = self.tree.root();
        self.deadline = None;
    }

    /// Whether a partial sequence is currently awaiting more input
    pub fn is_pending(&self) -> bool {
        self.cursor != self.tree.root()
    }

    /// When the current partial match expires, if one is in flight
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether any binding is registered
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T: Target + Clone + Eq + Hash> Default for HotkeyMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
