// src/services/contacts.rs

//! Contact method index.

use std::collections::BTreeMap;

use crate::models::{ContactMethod, MethodType};

/// A user's contact method ids grouped by method type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactIndex {
    by_type: BTreeMap<MethodType, Vec<String>>,
}

impl ContactIndex {
    /// Index raw contact methods. Unrecognized types are skipped; every
    /// method of a recognized type is kept once, in remote order.
    pub fn from_methods(methods: &[ContactMethod]) -> Self {
        let mut by_type: BTreeMap<MethodType, Vec<String>> = BTreeMap::new();

        for method in methods {
            let Some(kind) = method.method_type() else {
                log::debug!("Ignoring contact method {} of type {}", method.id, method.kind);
                continue;
            };
            let ids = by_type.entry(kind).or_default();
            if !ids.contains(&method.id) {
                ids.push(method.id.clone());
            }
        }

        Self { by_type }
    }

    /// Contact method ids of a type; empty if the user has none.
    pub fn ids(&self, method: MethodType) -> &[String] {
        self.by_type.get(&method).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, method: MethodType) -> bool {
        !self.ids(method).is_empty()
    }

    /// Method types present, in menu order.
    pub fn method_types(&self) -> impl Iterator<Item = MethodType> + '_ {
        self.by_type.keys().copied()
    }
}
