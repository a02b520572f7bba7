//! Shared objects with a dynamic member table.
//!
//! An [`Object`] is a reference-counted, string-keyed table of [`Value`]s.
//! Members can be added, replaced, and removed at any time through any clone
//! of the handle, which is what [`attach`](crate::combinators::attach) needs
//! to install bound methods on an existing instance.
//!
//! Locks are released before a member function runs, so methods may freely
//! read or modify the object they are called on.
//!
//! # Examples
//!
//! ```rust
//! use fntools::value::{Object, Value};
//!
//! let account = Object::new();
//! account.set("balance", 100);
//!
//! let alias = account.clone();
//! alias.set("balance", 150);
//!
//! assert_eq!(account.get("balance"), Some(Value::Integer(150)));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::Value;
use crate::error::FunctionError;
use crate::function::Arguments;

type Members = RwLock<HashMap<String, Value>>;

/// A shared handle to a mutable member table.
///
/// Cloning the handle shares the table; equality is identity.
#[derive(Clone, Default)]
pub struct Object {
    members: Arc<Members>,
}

impl Object {
    /// Creates an object with no members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone of the member stored under `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.members.read().get(name).cloned()
    }

    /// Stores `value` under `name`, returning the previous member.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.members.write().insert(name.into(), value.into())
    }

    /// Removes the member stored under `name`.
    pub fn remove(&self, name: &str) -> Option<Value> {
        self.members.write().remove(name)
    }

    /// Returns `true` if a member named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.members.read().contains_key(name)
    }

    /// Returns the member names in no particular order.
    pub fn member_names(&self) -> Vec<String> {
        self.members.read().keys().cloned().collect()
    }

    /// Calls the function stored under `name` with `arguments`.
    ///
    /// Methods installed with [`attach`](crate::combinators::attach) already
    /// carry their receiver, so `arguments` holds only the remaining ones.
    ///
    /// # Errors
    ///
    /// - [`FunctionError::MemberNotFound`] if there is no such member
    /// - [`FunctionError::NotCallable`] if the member is not a function
    /// - any error raised by the member itself
    pub fn call_method(
        &self,
        name: &str,
        arguments: impl Into<Arguments>,
    ) -> Result<Value, FunctionError> {
        let member = self.get(name).ok_or_else(|| FunctionError::MemberNotFound {
            member: name.to_owned(),
        })?;

        match member {
            Value::Function(function) => function.call(arguments),
            other => Err(FunctionError::NotCallable {
                actual: other.kind(),
            }),
        }
    }

    /// Returns `true` if both handles share the same table.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.members, &other.members)
    }

    /// Creates a non-owning handle to this object.
    pub fn downgrade(&self) -> WeakObject {
        WeakObject {
            members: Arc::downgrade(&self.members),
        }
    }
}

impl std::fmt::Debug for Object {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.member_names();
        names.sort_unstable();
        formatter
            .debug_struct("Object")
            .field("members", &names)
            .finish()
    }
}

/// A non-owning handle to an [`Object`].
///
/// Methods stored on an object hold their receiver weakly so that the object
/// and its own methods do not keep each other alive.
#[derive(Clone, Debug, Default)]
pub struct WeakObject {
    members: Weak<Members>,
}

impl WeakObject {
    /// Returns the object if it is still alive.
    pub fn upgrade(&self) -> Option<Object> {
        self.members.upgrade().map(|members| Object { members })
    }
}
