//! Explicit algorithm registry, built at startup from a fixed list of
//! factories rather than by scanning a plugin directory.

use std::collections::HashMap;

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::model::ElevatorAlgorithm;

type Factory = Box<dyn Fn() -> Box<dyn ElevatorAlgorithm> + Send + Sync>;

/// Maps stable policy names to constructors.
///
/// Registering two policies under the same name is a fatal error at
/// registry-build time, never silently resolved at lookup time.
#[derive(Default)]
pub struct AlgorithmRegistry {
    factories: HashMap<String, Factory>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self { factories: HashMap::new() }
    }

    pub fn register<F>(&mut self, name: &str, factory: F) -> AlgorithmResult<()>
    where
        F: Fn() -> Box<dyn ElevatorAlgorithm> + Send + Sync + 'static,
    {
        if self.factories.contains_key(name) {
            return Err(AlgorithmError::DuplicateName(name.to_string()));
        }
        self.factories.insert(name.to_string(), Box::new(factory));
        Ok(())
    }

    pub fn build(&self, name: &str) -> AlgorithmResult<Box<dyn ElevatorAlgorithm>> {
        self.factories
            .get(name)
            .map(|f| f())
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}
