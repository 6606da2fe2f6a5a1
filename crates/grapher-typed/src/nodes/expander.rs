//! Downward expander.

use super::compressor::{DetectionMode, KneeMode};
use crate::plugin_node;

plugin_node! {
    /// Attenuates signal below a threshold.
    ///
    /// Shares its configuration and parameter layout with
    /// [`CompressorNode`](super::CompressorNode).
    pub struct ExpanderNode {
        kind: "com.nativeformat.plugin.compressor.expander",
        config: ExpanderConfig {
            /// Level detection strategy.
            detection_mode: DetectionMode => "detectionMode" = DetectionMode::Max,
            /// Knee shape.
            knee_mode: KneeMode => "kneeMode" = KneeMode::Hard,
            /// Crossover frequencies in Hz for multiband operation.
            cutoffs: Vec<f64> => "cutoffs" = Vec::new(),
        },
        params {
            /// Level in dB below which expansion applies.
            threshold_db => "thresholdDb" = -24.0,
            /// Width of the soft knee in dB.
            knee_db => "kneeDb" = 30.0,
            /// Expansion ratio in dB.
            ratio_db => "ratioDb" = 12.0,
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
    use grapher_core::Node;

    #[test]
    fn reads_its_own_kind_only() {
        let node = Node::new("x", "com.nativeformat.plugin.compressor.compressor");
        assert!(ExpanderNode::from_node(&node).is_err());

        let node = Node::new("x", ExpanderNode::KIND).with_config("detectionMode", "rms");
        let expander = ExpanderNode::from_node(&node).unwrap();
        assert_eq!(*expander.detection_mode(), DetectionMode::Rms);
        assert_eq!(expander.id(), "x");
    }
}
