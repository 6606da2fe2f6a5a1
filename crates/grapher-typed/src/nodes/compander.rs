//! Combined compressor and expander.

use super::compressor::{DetectionMode, KneeMode};
use crate::plugin_node;

plugin_node! {
    /// Compresses above one threshold and expands below another, with shared
    /// timing.
    pub struct CompanderNode {
        kind: "com.nativeformat.plugin.compressor.compander",
        config: CompanderConfig {
            /// Level detection strategy.
            detection_mode: DetectionMode => "detectionMode" = DetectionMode::Max,
            /// Knee shape.
            knee_mode: KneeMode => "kneeMode" = KneeMode::Hard,
            /// Crossover frequencies in Hz for multiband operation.
            cutoffs: Vec<f64> => "cutoffs" = Vec::new(),
        },
        params {
            /// Compression threshold in dB.
            compressor_threshold_db => "compressorThresholdDb" = -24.0,
            /// Compression knee width in dB.
            compressor_knee_db => "compressorKneeDb" = 30.0,
            /// Compression ratio in dB.
            compressor_ratio_db => "compressorRatioDb" = 12.0,
            /// Expansion threshold in dB.
            expander_threshold_db => "expanderThresholdDb" = -24.0,
            /// Expansion knee width in dB.
            expander_knee_db => "expanderKneeDb" = 30.0,
            /// Expansion ratio in dB.
            expander_ratio_db => "expanderRatioDb" = 12.0,
            /// Attack time in seconds.
            attack => "attack" = 0.0003,
            /// Release time in seconds.
            release => "release" = 0.25,
        },
        inputs: ["audio": Audio, "sidechain": Audio],
        outputs: ["audio": Audio],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plugin, TypedNode};

    #[test]
    fn param_names() {
        let schema = CompanderNode::schema();
        let names: Vec<&str> = schema.params.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"expanderRatioDb"));

        let node = CompanderNode::create(CompanderConfig::default()).unwrap().to_node();
        assert_eq!(node.params.len(), 8);
    }
}
