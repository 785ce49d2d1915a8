//! Binding-string grammar: comma-separated alternatives of space-separated chords

/// One alternative way to trigger a binding: an ordered list of chord strings
pub type Sequence = Vec<String>;

/// Expand a binding string into its alternative chord sequences.
///
/// Grammar: `binding := alt (',' alt)*`, `alt := chord (' ' chord)*`,
/// `chord := [modifier '+']* key`. Chord strings are taken verbatim; they
/// match a keypress when they equal its canonical [`chord`] encoding.
///
/// Empty chord tokens (stray spaces) are dropped and alternatives with no
/// chords are skipped, so a malformed or empty binding degenerates to zero
/// sequences rather than an error.
///
/// [`chord`]: crate::KeyPress::chord
///
/// ```
/// use hotkeymap::expand_binding;
///
/// let sequences = expand_binding("Control+K,g i");
/// assert_eq!(sequences, vec![vec!["Control+K"], vec!["g", "i"]]);
/// ```
pub fn expand_binding(binding: &str) -> Vec<Sequence> {
    binding
        .split(',')
        .map(|alt| {
            alt.split(' ')
                .filter(|chord| !chord.is_empty())
                .map(str::to_owned)
                .collect::<Sequence>()
        })
        .filter(|seq| !seq.is_empty())
        .collect()
}
