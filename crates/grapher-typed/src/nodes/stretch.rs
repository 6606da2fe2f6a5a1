use crate::plugin_node;

plugin_node! {
    /// Time stretching and pitch shifting.
    pub struct StretchNode {
        kind: "com.nativeformat.plugin.time.stretch",
        config: StretchConfig {},
        params {
            /// Pitch multiplier.
            pitch_ratio => "pitchRatio" = 1.0,
            /// Duration multiplier.
            stretch => "stretch" = 1.0,
            /// Formant multiplier.
            formant_ratio => "formantRatio" = 1.0,
        },
        inputs: ["audio": Audio],
        outputs: ["audio": Audio],
    }
}
