//! Ordered step registry.

use indexmap::IndexMap;

use super::Step;

/// Ordered mapping from step name to step. Insertion order is significant:
/// it defines execution order for both the initial and the run phase.
/// Inserting under an existing name replaces the step in place, keeping its
/// position.
#[derive(Debug, Default)]
pub struct StepRegistry {
    steps: IndexMap<String, Step>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, step: Step) {
        self.steps.insert(name.into(), step);
    }

    pub fn get(&self, name: &str) -> Option<&Step> {
        self.steps.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Step)> {
        self.steps.iter().map(|(name, step)| (name.as_str(), step))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Step)> {
        self.steps.iter_mut().map(|(name, step)| (name.as_str(), step))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(|name| name.as_str())
    }
}
