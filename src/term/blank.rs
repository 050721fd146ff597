//! Blank node representation
//!
//! Fresh blank nodes back the existential-witness rule: ids come from a
//! process-wide atomic counter, so a witness synthesized for one store can
//! never collide with a parsed anonymous node or a witness in another store.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique blank node IDs
static BLANK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A blank node (anonymous node)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BlankNode {
    /// Internal ID for the blank node
    id: u64,
    /// Optional label (for round-tripping parsed `_:label` nodes)
    label: Option<String>,
}

impl BlankNode {
    /// Create a fresh blank node with a unique ID
    pub fn fresh() -> Self {
        BlankNode {
            id: BLANK_COUNTER.fetch_add(1, Ordering::SeqCst),
            label: None,
        }
    }

    /// Create a blank node with a label
    pub fn labeled(label: String) -> Self {
        BlankNode {
            id: BLANK_COUNTER.fetch_add(1, Ordering::SeqCst),
            label: Some(label),
        }
    }

    /// Get the internal ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the label if present
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// A serialization-safe identifier for this node
    pub fn unique_id(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("b{}", self.id),
        }
    }
}

impl fmt::Debug for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.unique_id())
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.unique_id())
    }
}
