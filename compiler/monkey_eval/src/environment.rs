//! Lexical environments.
//!
//! An `Environment` is a handle to one scope in a chain of scopes. Function
//! values keep a handle to the scope they were defined in, and every call
//! runs in a fresh child of that captured scope, so closures see their
//! defining bindings even after the defining call has returned.
//!
//! Children only ever point outward, so the chain itself is acyclic. A
//! function stored in the scope it captured does form an `Rc` cycle; that
//! memory lives until the process exits.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Object;


/// A single-threaded shared cell.
///
/// Wraps `Rc<RefCell<T>>` so scopes are only ever created through
/// `LocalScope::new`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Wrap `value` in fresh shared storage.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// A single scope containing variable bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    /// Enclosing scope (for lexical scoping).
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// An empty scope whose misses fall through to `parent`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Define or overwrite a binding in this scope.
    #[inline]
    pub fn define(&mut self, name: String, value: Object) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable, walking outward through parent scopes.
    pub fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }
}

/// Handle to the innermost scope of an environment chain.
///
/// Cloning the handle shares the scope; it does not copy bindings.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A child scope whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(outer.scope.clone())),
        }
    }

    /// Look `name` up here, then in each enclosing scope outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this scope. Outer scopes are never written.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.scope.borrow_mut().define(name.into(), value);
    }

    /// Whether `self` and `other` are handles to the same scope.
    pub fn same_scope(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

// Bindings may hold functions whose captured scope is this one, so only
// the local names are shown.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<_> = scope.bindings.keys().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
