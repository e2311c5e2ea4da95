use std::{collections::BTreeMap, fmt};

/// The kind of block that opened a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The program's outermost frame. Never popped.
    Global,
    /// The body of an `if` or `else`.
    If,
    /// The body of a `while` loop.
    While,
    /// The body of a `for` loop; also holds the iterator.
    For,
}

impl FrameKind {
    /// Returns `true` for the frames `break` and `continue` can target.
    #[must_use]
    pub const fn is_loop(self) -> bool {
        matches!(self, Self::While | Self::For)
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Global => "global",
            Self::If => "if",
            Self::While => "while",
            Self::For => "for",
        };
        write!(f, "{name}")
    }
}

/// One named frame of bindings.
#[derive(Debug, Clone)]
pub struct Frame<T> {
    kind:     FrameKind,
    bindings: BTreeMap<String, T>,
}

impl<T> Frame<T> {
    const fn new(kind: FrameKind) -> Self {
        Self { kind,
               bindings: BTreeMap::new() }
    }

    /// The block kind that opened this frame.
    #[must_use]
    pub const fn kind(&self) -> FrameKind {
        self.kind
    }

    /// The bindings of this frame, in name order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &T)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Prints `kind {name: value, ...}`.
impl<T: fmt::Display> fmt::Display for Frame<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.kind)?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// A stack of named frames with lexical lookup.
///
/// Lookups walk from the innermost frame outwards. The global frame is
/// created with the chain and can never be popped, so the chain is never
/// empty. The type checker keeps symbols in one of these and the interpreter
/// keeps values in another.
///
/// ```
/// use matlang::interpreter::scope::{FrameKind, ScopeChain};
///
/// let mut scopes = ScopeChain::new();
/// scopes.assign("x", 1);
/// scopes.push(FrameKind::While);
/// assert!(scopes.is_inside_loop());
/// scopes.assign("x", 2);
/// scopes.assign("y", 3);
/// scopes.pop();
/// assert_eq!(scopes.lookup("x"), Some(&2));
/// assert_eq!(scopes.lookup("y"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ScopeChain<T> {
    frames: Vec<Frame<T>>,
}

impl<T> Default for ScopeChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScopeChain<T> {
    /// Creates a chain holding only the global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::new(FrameKind::Global)] }
    }

    /// Opens a new innermost frame.
    pub fn push(&mut self, kind: FrameKind) {
        self.frames.push(Frame::new(kind));
    }

    /// Closes the innermost frame and returns it. The global frame stays.
    pub fn pop(&mut self) -> Option<Frame<T>> {
        if self.frames.len() > 1 { self.frames.pop() } else { None }
    }

    /// The number of open frames, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the binding visible under `name`, searching outwards.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.bindings.get(name))
    }

    /// Mutable counterpart of [`ScopeChain::lookup`].
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut T> {
        self.frames.iter_mut().rev().find_map(|frame| frame.bindings.get_mut(name))
    }

    /// Binds `name` in the innermost frame.
    ///
    /// # Errors
    /// Returns the value back if the innermost frame already binds `name`.
    pub fn define(&mut self, name: &str, value: T) -> Result<(), T> {
        let frame = self.innermost_mut();
        if frame.bindings.contains_key(name) {
            return Err(value);
        }
        frame.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Binds `name` in the innermost frame, replacing any binding there.
    pub fn bind_local(&mut self, name: &str, value: T) {
        self.innermost_mut().bindings.insert(name.to_string(), value);
    }

    /// Overwrites the nearest existing binding of `name`, or binds it in the
    /// innermost frame when no frame has it.
    pub fn assign(&mut self, name: &str, value: T) {
        if let Some(slot) = self.lookup_mut(name) {
            *slot = value;
        } else {
            self.bind_local(name, value);
        }
    }

    /// Returns `true` when any open frame belongs to a `while` or `for` loop.
    #[must_use]
    pub fn is_inside_loop(&self) -> bool {
        self.frames.iter().any(|frame| frame.kind.is_loop())
    }

    /// Iterates the frames from the global one inwards.
    pub fn frames(&self) -> impl Iterator<Item = &Frame<T>> {
        self.frames.iter()
    }

    fn innermost_mut(&mut self) -> &mut Frame<T> {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}
