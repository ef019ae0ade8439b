// Algorithm Registry - dispatch pipeline steps by algorithm name

use crate::application::hotnet::HotNet;
use crate::config::ContainerSettings;
use crate::error::{AppError, Result};
use crate::port::{ContainerRunner, PathwayAlgorithm};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Default)]
pub struct AlgorithmRegistry {
    algorithms: BTreeMap<&'static str, Arc<dyn PathwayAlgorithm>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every bundled adapter sharing one runner
    pub fn with_defaults(runner: Arc<dyn ContainerRunner>, settings: ContainerSettings) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HotNet::new(runner, settings)));
        registry
    }

    /// Register an adapter, replacing any previous one with the same name
    pub fn register(&mut self, algorithm: Arc<dyn PathwayAlgorithm>) {
        self.algorithms.insert(algorithm.name(), algorithm);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn PathwayAlgorithm>> {
        self.algorithms
            .get(name.trim().to_ascii_lowercase().as_str())
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Unknown algorithm '{}' (available: {})",
                    name,
                    self.names().join(", ")
                ))
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.algorithms.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::container_runner::mocks::MockContainerRunner;

    fn registry() -> AlgorithmRegistry {
        AlgorithmRegistry::with_defaults(
            Arc::new(MockContainerRunner::new_writing("")),
            ContainerSettings::default(),
        )
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = registry();
        let hhn = registry.get("HHN").unwrap();

        assert_eq!(hhn.name(), "hhn");
        assert_eq!(hhn.required_inputs(), &["scores", "edge_list", "index"]);
        assert_eq!(registry.names(), vec!["hhn"]);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = registry().get("pathlinker").err().unwrap();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("available: hhn"));
    }
}
