//! Runtime values.
//!
//! `Object` is the closed set of values the evaluator produces. Two variants
//! are control-flow signals rather than user-visible values: `ReturnValue`
//! carries a `return` out of nested blocks, and `Error` short-circuits every
//! enclosing evaluation up to the top level.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, FunctionLiteral, Identifier};
use monkey_stack::ensure_sufficient_stack;

use crate::{Builtin, Environment};


/// Type tag of an object, as shown in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    String,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
    Builtin,
    Array,
}

impl ObjectType {
    /// Upper-case tag name, as printed in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::String => "STRING",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::ReturnValue => "RETURN_VALUE",
            ObjectType::Error => "ERROR",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Array => "ARRAY",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime value.
///
/// `Display` is the inspect rendering used for all printed output.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    String(Rc<str>),
    Boolean(bool),
    Null,
    /// A `return` travelling outward to the enclosing function or program.
    ReturnValue(Box<Object>),
    /// A runtime error travelling outward to the top level.
    Error(String),
    Function(Rc<FunctionObject>),
    Builtin(Builtin),
    Array(ArrayObject),
}

impl Object {
    /// Canonical `true`.
    pub const TRUE: Object = Object::Boolean(true);
    /// Canonical `false`.
    pub const FALSE: Object = Object::Boolean(false);
    /// What `let` yields, and an `if` whose condition fails with no `else`.
    pub const NULL: Object = Object::Null;

    /// `Object::TRUE` or `Object::FALSE`.
    #[inline]
    pub fn from_bool(value: bool) -> Object {
        if value {
            Object::TRUE
        } else {
            Object::FALSE
        }
    }

    pub fn string(value: impl Into<Rc<str>>) -> Object {
        Object::String(value.into())
    }

    /// A new array owning `elements`.
    pub fn array(elements: Vec<Object>) -> Object {
        Object::Array(ArrayObject::new(elements))
    }

    /// The tag used in type-mismatch and unknown-operator messages.
    pub fn type_tag(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::String(_) => ObjectType::String,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Null => ObjectType::Null,
            Object::ReturnValue(_) => ObjectType::ReturnValue,
            Object::Error(_) => ObjectType::Error,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Array(_) => ObjectType::Array,
        }
    }

    /// Only `null` and `false` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// `Error` or `ReturnValue`: a signal that stops every enclosing
    /// evaluation until a function call (for `return`) or the program root
    /// takes it.
    #[inline]
    pub fn is_unwinding(&self) -> bool {
        matches!(self, Object::Error(_) | Object::ReturnValue(_))
    }

    /// The human-readable rendering.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::String(value) => f.write_str(value),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
            Object::Function(function) => write!(f, "{function}"),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Array(array) => write!(f, "{array}"),
        }
    }
}

/// Structural equality, for tests and assertions.
///
/// The language's own `==` lives in `operators` and compares functions and
/// arrays by identity instead.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            (Object::Array(a), Object::Array(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::from_bool(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::string(value)
    }
}

/// A user function: the literal it was created from plus the environment
/// it closed over.
pub struct FunctionObject {
    literal: Rc<FunctionLiteral>,
    env: Environment,
}

impl FunctionObject {
    /// Close `literal` over `env`. The literal is shared with the AST, not
    /// copied.
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionObject { literal, env }
    }

    #[inline]
    pub fn parameters(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    #[inline]
    pub fn body(&self) -> &BlockStatement {
        &self.literal.body
    }

    /// The defining environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

// The captured environment usually contains the function itself.
impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("literal", &self.literal)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.parameters().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body())
    }
}

/// A shared, mutable array.
///
/// Clones share storage: `push` through one handle is visible through all.
#[derive(Clone, Default)]
pub struct ArrayObject(Rc<RefCell<Vec<Object>>>);

impl ArrayObject {
    /// Fresh storage; no other handle sees it yet.
    pub fn new(elements: Vec<Object>) -> Self {
        ArrayObject(Rc::new(RefCell::new(elements)))
    }

    /// Read access to the elements.
    ///
    /// Drop the guard before calling anything that may push or pop through
    /// another handle to the same array.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Vec<Object>> {
        self.0.borrow()
    }

    /// Current element count.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Clone of the element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Object> {
        self.0.borrow().get(index).cloned()
    }

    /// Append `value`, returning the new length.
    pub fn push(&self, value: Object) -> usize {
        let mut elements = self.0.borrow_mut();
        elements.push(value);
        elements.len()
    }

    /// Remove and return the last element; `None` when empty.
    pub fn pop(&self) -> Option<Object> {
        self.0.borrow_mut().pop()
    }

    /// Whether both handles share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &ArrayObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Storage identity of an array, used to spot cycles while rendering.
type ArrayId = *const RefCell<Vec<Object>>;

impl ArrayObject {
    /// Render elements, writing `[...]` for any array already being
    /// rendered further out (`push(a, a)` makes `a` contain itself).
    fn fmt_guarded(&self, f: &mut fmt::Formatter<'_>, open: &mut Vec<ArrayId>) -> fmt::Result {
        let id = Rc::as_ptr(&self.0);
        if open.contains(&id) {
            return f.write_str("[...]");
        }

        open.push(id);
        f.write_str("[")?;
        for (i, element) in self.0.borrow().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match element {
                Object::Array(inner) => {
                    ensure_sufficient_stack(|| inner.fmt_guarded(f, open))?;
                }
                other => write!(f, "{other}")?,
            }
        }
        open.pop();
        f.write_str("]")
    }
}

impl fmt::Display for ArrayObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_guarded(f, &mut Vec::new())
    }
}

// Derived `Debug` would follow a self-containing array forever.
impl fmt::Debug for ArrayObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayObject({self})")
    }
}
