//! The bound-target collaborator: what a matched shortcut acts on
//!
//! The matching engine never inspects what a target renders as; it only
//! asks whether the target is a text-editing field and, on a completed
//! sequence, performs the target's determined action. Implementations are
//! expected to be cheap handles (widget ids, element references): the
//! engine stores clones of them, so a target must not own the thing it
//! points at.

/// A handle the engine can gate on and act upon
pub trait Target {
    /// Whether this target is a text-editing field (input box, text area,
    /// editable region). Shortcuts never fire while such a field has focus,
    /// and a matched text field is focused rather than activated.
    fn is_text_input(&self) -> bool;

    /// Give the target input focus
    fn focus(&self);

    /// Perform the target's primary activation (click, invoke)
    fn activate(&self);
}

/// Perform the determined action for a matched target: focus it if it is a
/// text-editing field, otherwise activate it.
pub fn fire<T: Target>(target: &T) {
    if target.is_text_input() {
        target.focus();
    } else {
        target.activate();
    }
}
