//! Function payloads.
//!
//! A function value carries its declared name, its kind (ordinary,
//! generator, async), and its source text. The source text is load-bearing:
//! class constructors are not distinguishable from ordinary functions by
//! kind alone, so classification pattern-matches the textual form of the
//! declaration.

use std::fmt;

/// The kind of a function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Ordinary function (including class constructors).
    Normal,
    /// Generator function (`function*`).
    Generator,
    /// Async function.
    Async,
    /// Async generator function.
    AsyncGenerator,
}

impl FunctionKind {
    /// The built-in tag stamped on functions of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            FunctionKind::Normal => "Function",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
        }
    }
}

/// Internal function data.
///
/// # Examples
///
/// ```
/// use value_types::{FunctionData, FunctionKind};
///
/// let f = FunctionData::native("run");
/// assert_eq!(f.name(), "run");
/// assert_eq!(f.tag(), "Function");
/// assert!(f.source().starts_with("function"));
///
/// let c = FunctionData::class_declaration("Point");
/// assert!(c.source().starts_with("class "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionData {
    name: String,
    kind: FunctionKind,
    source: String,
}

impl FunctionData {
    /// Create function data with explicit name, kind and source text.
    pub fn new(name: impl Into<String>, kind: FunctionKind, source: impl Into<String>) -> Self {
        FunctionData {
            name: name.into(),
            kind,
            source: source.into(),
        }
    }

    /// Create an ordinary native function.
    pub fn native(name: impl Into<String>) -> Self {
        let name = name.into();
        let source = format!("function {}() {{ [native code] }}", name);
        FunctionData::new(name, FunctionKind::Normal, source)
    }

    /// Create a generator function.
    pub fn generator(name: impl Into<String>) -> Self {
        let name = name.into();
        let source = format!("function* {}() {{ [native code] }}", name);
        FunctionData::new(name, FunctionKind::Generator, source)
    }

    /// Create an async function.
    pub fn async_fn(name: impl Into<String>) -> Self {
        let name = name.into();
        let source = format!("async function {}() {{ [native code] }}", name);
        FunctionData::new(name, FunctionKind::Async, source)
    }

    /// Create a class constructor. Its source text begins with the
    /// `class` keyword, which is what classification keys on.
    pub fn class_declaration(name: impl Into<String>) -> Self {
        let name = name.into();
        let source = format!("class {} {{ }}", name);
        FunctionData::new(name, FunctionKind::Normal, source)
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The function kind.
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// The source text of the declaration.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The built-in tag stamped on this function.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }
}

impl fmt::Display for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
