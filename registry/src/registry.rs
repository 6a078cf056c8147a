//! The ClassRegistry - memoized auxiliary class creation.

use crate::ClassKey;
use clado_core::{AuxiliaryClass, ClassId, Expression, ParentKind, Specifier};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when creating an auxiliary class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(
        "Cannot create an auxiliary class from {internal} internal and {external} external specifiers"
    )]
    InsufficientSpecifiers { internal: usize, external: usize },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Auxiliary classes created while synthesizing one phyloreference.
#[derive(Debug)]
pub struct ClassRegistry {
    /// Id of the owning phyloreference; prefixes every class id.
    owner: String,
    /// Keys in allocation order; the class with index `n` has key
    /// `allocated[n - 1]`.
    allocated: Vec<ClassKey>,
    /// Class id by key. Keys are reserved before their body is built.
    by_key: HashMap<ClassKey, ClassId>,
    /// Completed classes, in completion order.
    classes: Vec<AuxiliaryClass>,
}

impl ClassRegistry {
    /// Create an empty registry for the phyloreference `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            allocated: Vec::new(),
            by_key: HashMap::new(),
            classes: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Return a reference to the auxiliary class for `(internals, externals)`,
    /// creating it with `build` if it does not exist yet.
    ///
    /// On a cache hit `build` is not called. Otherwise a fresh id is allocated
    /// first and `build` runs with the registry, so it may recursively create
    /// further classes. If `build` fails nothing is registered: neither the
    /// class nor any class created during the failed build, and their ids
    /// are handed out again.
    pub fn get_or_create<F, E>(
        &mut self,
        internals: &[Specifier],
        externals: &[Specifier],
        build: F,
    ) -> Result<Expression, E>
    where
        F: FnOnce(&mut Self) -> Result<Vec<Expression>, E>,
        E: From<RegistryError>,
    {
        if internals.is_empty() || (internals.len() == 1 && externals.is_empty()) {
            return Err(RegistryError::InsufficientSpecifiers {
                internal: internals.len(),
                external: externals.len(),
            }
            .into());
        }

        let key = ClassKey::new(internals, externals);
        if let Some(id) = self.by_key.get(&key) {
            debug!(owner = %self.owner, label = %key, id = %id, "auxiliary class cache hit");
            return Ok(Expression::reference(id.clone()));
        }

        let checkpoint = (self.allocated.len(), self.classes.len());
        self.allocated.push(key.clone());
        let id = ClassId::additional(&self.owner, self.allocated.len());
        debug!(owner = %self.owner, label = %key, id = %id, "creating auxiliary class");
        self.by_key.insert(key.clone(), id.clone());

        let body = match build(self) {
            Ok(body) => body,
            Err(e) => {
                debug!(owner = %self.owner, label = %key, id = %id, "auxiliary class build failed");
                self.rollback(checkpoint);
                return Err(e);
            }
        };

        self.classes.push(AuxiliaryClass {
            id: id.clone(),
            label: key.label(),
            parent_kind: ParentKind::for_externals(externals.len()),
            body,
        });

        Ok(Expression::reference(id))
    }

    /// Forget every key allocated and every class completed since `checkpoint`.
    fn rollback(&mut self, (allocated, completed): (usize, usize)) {
        for key in self.allocated.drain(allocated..) {
            self.by_key.remove(&key);
        }
        self.classes.truncate(completed);
    }

    /// Id of the class registered for `key`, if any.
    pub fn lookup(&self, key: &ClassKey) -> Option<&ClassId> {
        self.by_key.get(key)
    }

    /// Get a completed class by id.
    pub fn get(&self, id: &ClassId) -> Option<&AuxiliaryClass> {
        self.classes.iter().find(|c| &c.id == id)
    }

    /// All completed classes.
    pub fn classes(&self) -> impl Iterator<Item = &AuxiliaryClass> {
        self.classes.iter()
    }

    /// Get the number of completed classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Consume the registry, yielding its classes.
    pub fn into_classes(self) -> Vec<AuxiliaryClass> {
        self.classes
    }
}
