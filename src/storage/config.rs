//! Store Configuration

/// Store configuration
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Number of entries to pre-allocate room for (0 = grow on demand)
    pub initial_capacity: usize,
}

impl StoreConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the map for roughly `capacity` keys
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(StoreConfig::default().initial_capacity, 0);
    }

    #[test]
    fn test_builder_chaining() {
        let config = StoreConfig::new().with_initial_capacity(1024);
        assert_eq!(config.initial_capacity, 1024);
    }
}
