use crate::domain::MAINNET_PORT;
use crate::ports::NetworkParameters;

// ============================================================================
// StaticNetworkParameters - Fixed port
// ============================================================================

/// Network parameters with a fixed P2P port.
///
/// Hosts with a richer chain-parameters object implement
/// `NetworkParameters` on it directly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticNetworkParameters {
    port: u16,
}

impl StaticNetworkParameters {
    /// Parameters with the given port.
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Goldcoin mainnet parameters.
    #[must_use]
    pub fn mainnet() -> Self {
        Self::new(MAINNET_PORT)
    }
}

impl Default for StaticNetworkParameters {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl NetworkParameters for StaticNetworkParameters {
    fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mainnet_port() {
        assert_eq!(StaticNetworkParameters::default().port(), 8121);
        assert_eq!(StaticNetworkParameters::new(18121).port(), 18121);
    }
}
