//! Dynamic range compressor.

use crate::{plugin_enum, plugin_node};

plugin_enum! {
    /// How a dynamics processor measures the input level.
    pub enum DetectionMode {
        /// Peak level.
        Max => "max",
        /// Root-mean-square level.
        Rms => "rms",
    }
}

plugin_enum! {
    /// Shape of the transition around the threshold.
    pub enum KneeMode {
        /// Abrupt transition.
        Hard => "hard",
        /// Gradual transition over `kneeDb`.
        Soft => "soft",
    }
}

plugin_node! {
    /// Reduces the level of signal above a threshold.
    ///
    /// The optional `sidechain` input drives level detection in place of the
    /// main input. A non-empty `cutoffs` list splits the signal into bands at
    /// those frequencies and compresses each band independently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grapher_typed::nodes::{CompressorConfig, CompressorNode, DetectionMode};
    /// use grapher_typed::{TypedNode, TypedParam};
    ///
    /// let comp = CompressorNode::create(
    ///     CompressorConfig::default().detection_mode(DetectionMode::Rms),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(comp.to_node().config["detectionMode"], "rms");
    /// assert_eq!(*comp.threshold_db.initial_value(), -24.0);
    /// ```
    pub struct CompressorNode {
        kind: "com.nativeformat.plugin.compressor.compressor",
        config: CompressorConfig {
            /// Level detection strategy.
            detection_mode: DetectionMode => "detectionMode" = DetectionMode::Max,
            /// Knee shape.
            knee_mode: KneeMode => "kneeMode" = KneeMode::Hard,
            /// Crossover frequencies in Hz for multiband operation.
            cutoffs: Vec<f64> => "cutoffs" = Vec::new(),
        },
        params {
            /// Level in dB above which compression applies.
            threshold_db => "thresholdDb" = -24.0,
            /// Width of the soft knee in dB.
            knee_db => "kneeDb" = 30.0,
            /// Input/output ratio in dB.
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
