// src/models/rule_config.rs

//! Rule configuration shared by every user in a run.

use std::collections::{BTreeMap, HashMap};

use super::{MethodType, Urgency};

/// An (urgency, method type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    pub urgency: Urgency,
    pub method: MethodType,
}

impl RuleKey {
    pub fn new(urgency: Urgency, method: MethodType) -> Self {
        Self { urgency, method }
    }
}

/// Which method types to notify per urgency, and after what delay.
///
/// Built once through [`RuleConfigurationBuilder`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfiguration {
    methods: BTreeMap<Urgency, Vec<MethodType>>,
    delays: HashMap<RuleKey, u32>,
}

impl RuleConfiguration {
    pub fn builder() -> RuleConfigurationBuilder {
        RuleConfigurationBuilder::default()
    }

    /// Method types selected for an urgency, in selection order.
    pub fn methods(&self, urgency: Urgency) -> &[MethodType] {
        self.methods.get(&urgency).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Delay for a pair. Pairs without a recorded delay fire immediately.
    pub fn delay(&self, key: RuleKey) -> u32 {
        self.delays.get(&key).copied().unwrap_or(0)
    }

    /// Every configured pair with its delay, high urgency first.
    pub fn entries(&self) -> impl Iterator<Item = (RuleKey, u32)> + '_ {
        Urgency::ALL.into_iter().flat_map(move |urgency| {
            self.methods(urgency).iter().map(move |&method| {
                let key = RuleKey::new(urgency, method);
                (key, self.delay(key))
            })
        })
    }

    pub fn is_empty(&self) -> bool {
        self.methods.values().all(Vec::is_empty)
    }
}

/// Accumulates selections before freezing them into a [`RuleConfiguration`].
#[derive(Debug, Default)]
pub struct RuleConfigurationBuilder {
    inner: RuleConfiguration,
}

impl RuleConfigurationBuilder {
    /// Replace the method selection for an urgency. Repeated types are dropped.
    pub fn select(mut self, urgency: Urgency, methods: &[MethodType]) -> Self {
        let mut selected = Vec::with_capacity(methods.len());
        for &method in methods {
            if !selected.contains(&method) {
                selected.push(method);
            }
        }
        self.inner.methods.insert(urgency, selected);
        self
    }

    pub fn delay(mut self, urgency: Urgency, method: MethodType, minutes: u32) -> Self {
        self.inner.delays.insert(RuleKey::new(urgency, method), minutes);
        self
    }

    pub fn build(self) -> RuleConfiguration {
        self.inner
    }
}
