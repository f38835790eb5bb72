use serde::{Deserialize, Serialize};

/// Top-level chat engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Simulated "backend" latency before a reply starts streaming
    pub latency: LatencyConfig,
    pub stream: StreamConfig,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            stream: StreamConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 2000,
        }
    }
}

/// Timing for the token-by-token reveal. The inter-token delay scales with
/// token length and is clamped to [min_ms, max_ms], so short words appear
/// faster than long ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    pub per_char_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            per_char_ms: 20,
            min_ms: 50,
            max_ms: 150,
        }
    }
}

impl StreamConfig {
    pub fn delay_for(&self, token: &str) -> u64 {
        (token.len() as u64 * self.per_char_ms).clamp(self.min_ms, self.max_ms)
    }
}
