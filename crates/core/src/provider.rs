// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred values.
//!
//! A [`Provider`] is a handle to a computation that runs when the value is
//! needed, not when the handle is created. Instructions hold providers for
//! arguments that are only known late in configuration (a main class read
//! from the project, a placeholder filled in by a later block).
//!
//! A [`Property`] is a shared settable cell. Providers derived from it see
//! every later `set`.

use crate::error::ResolveError;
use parking_lot::Mutex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

type Compute<T> = dyn Fn() -> Result<T, ResolveError> + Send + Sync;

/// Handle to a value computed on demand.
pub struct Provider<T> {
    description: Arc<str>,
    compute: Arc<Compute<T>>,
}

impl<T: 'static> Provider<T> {
    /// Provider backed by a computation that may have no value yet.
    ///
    /// `description` names the value in the error raised when `f` returns `None`.
    pub fn from_fn<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        let description: Arc<str> = description.into().into();
        let what = Arc::clone(&description);
        Self {
            description,
            compute: Arc::new(move || f().ok_or_else(|| ResolveError::unresolved(&*what))),
        }
    }

    /// Provider backed by a fallible computation.
    pub fn from_result<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Result<T, ResolveError> + Send + Sync + 'static,
    {
        Self { description: description.into().into(), compute: Arc::new(f) }
    }

    /// Run the computation.
    pub fn get(&self) -> Result<T, ResolveError> {
        (self.compute)()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Derive a provider that transforms this one's value when resolved.
    pub fn map<U, F>(&self, f: F) -> Provider<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        let inner = self.clone();
        Provider {
            description: Arc::clone(&self.description),
            compute: Arc::new(move || inner.get().map(&f)),
        }
    }

    /// Derive a provider whose transformation can itself fail.
    pub fn and_then<U, F>(&self, f: F) -> Provider<U>
    where
        F: Fn(T) -> Result<U, ResolveError> + Send + Sync + 'static,
        U: 'static,
    {
        let inner = self.clone();
        Provider {
            description: Arc::clone(&self.description),
            compute: Arc::new(move || inner.get().and_then(&f)),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Provider<T> {
    /// Provider that always yields `value`.
    pub fn of(value: T) -> Self {
        Self { description: "constant".into(), compute: Arc::new(move || Ok(value.clone())) }
    }
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self { description: Arc::clone(&self.description), compute: Arc::clone(&self.compute) }
    }
}

/// Two providers are equal when they share the same computation.
impl<T> PartialEq for Provider<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.compute, &other.compute)
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Provider").field(&&*self.description).finish()
    }
}

/// Shared cell whose value may be set after providers have been handed out.
pub struct Property<T> {
    description: Arc<str>,
    value: Arc<Mutex<Option<T>>>,
}

impl<T> Property<T> {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into().into(), value: Arc::new(Mutex::new(None)) }
    }

    /// Last write wins; every clone of this property observes it.
    pub fn set(&self, value: impl Into<T>) {
        *self.value.lock() = Some(value.into());
    }

    pub fn is_present(&self) -> bool {
        self.value.lock().is_some()
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T: Clone> Property<T> {
    pub fn get(&self) -> Option<T> {
        self.value.lock().clone()
    }
}

impl<T: Clone + Send + 'static> Property<T> {
    /// Provider that reads the cell when resolved.
    pub fn provider(&self) -> Provider<T> {
        let cell = Arc::clone(&self.value);
        Provider::from_fn(self.description.to_string(), move || cell.lock().clone())
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self { description: Arc::clone(&self.description), value: Arc::clone(&self.value) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("description", &&*self.description)
            .field("value", &*self.value.lock())
            .finish()
    }
}

impl<T: Serialize> Serialize for Property<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.lock().serialize(serializer)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
