//! Shared test target: a cheap widget handle with observable actions

use std::cell::Cell;
use std::rc::Rc;

use hotkeymap::Target;

/// Opt-in log output for debugging failures: run with RUST_LOG=trace
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Identity is the id; action counters are shared across clones so tests
/// can observe fires through the handles they kept.
#[derive(Clone, Debug)]
pub struct Widget {
    pub id: &'static str,
    pub text_input: bool,
    pub activations: Rc<Cell<usize>>,
    pub focuses: Rc<Cell<usize>>,
}

impl Widget {
    pub fn button(id: &'static str) -> Self {
        Self {
            id,
            text_input: false,
            activations: Rc::new(Cell::new(0)),
            focuses: Rc::new(Cell::new(0)),
        }
    }

    #[allow(dead_code)]
    pub fn text_field(id: &'static str) -> Self {
        Self {
            text_input: true,
            ..Self::button(id)
        }
    }
}

impl PartialEq for Widget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Widget {}

impl std::hash::Hash for Widget {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Target for Widget {
    fn is_text_input(&self) -> bool {
        self.text_input
    }

    fn focus(&self) {
        self.focuses.set(self.focuses.get() + 1);
    }

    fn activate(&self) {
        self.activations.set(self.activations.get() + 1);
    }
}
