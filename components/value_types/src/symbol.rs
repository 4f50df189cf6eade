//! Unique symbol values.
//!
//! Symbols are unique, immutable values usable as property keys. Each
//! symbol has a process-unique id and an optional description. The
//! well-known iterator symbol keys the iteration-protocol slot on objects.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// The well-known iterator symbol
static ITERATOR_SYMBOL: LazyLock<SymbolValue> =
    LazyLock::new(|| SymbolValue::with_description("Symbol.iterator"));

/// A unique symbol value.
///
/// Two symbols are the same symbol only if they share an id; descriptions
/// are purely for debugging.
///
/// # Examples
///
/// ```
/// use value_types::SymbolValue;
///
/// let a = SymbolValue::with_description("token");
/// let b = SymbolValue::with_description("token");
/// assert_ne!(a.id(), b.id());
/// assert_eq!(a.description(), Some("token"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol without a description.
    pub fn new() -> Self {
        SymbolValue {
            id: SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// Create a new unique symbol with a description.
    pub fn with_description(description: impl Into<String>) -> Self {
        SymbolValue {
            id: SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed),
            description: Some(description.into()),
        }
    }

    /// The well-known iterator symbol.
    pub fn iterator() -> &'static SymbolValue {
        &ITERATOR_SYMBOL
    }

    /// The unique id of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The symbol's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for SymbolValue {
    fn default() -> Self {
        SymbolValue::new()
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
