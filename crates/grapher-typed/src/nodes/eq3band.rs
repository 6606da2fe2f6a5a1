use crate::plugin_node;

plugin_node! {
    /// Three-band equalizer.
    pub struct Eq3bandNode {
        kind: "com.nativeformat.plugin.eq.eq3band",
        config: Eq3bandConfig {},
        params {
            /// Low shelf corner in Hz.
            low_cutoff => "lowCutoff" = 264.0,
            /// Center of the mid band in Hz.
            mid_frequency => "midFrequency" = 1000.0,
            /// High shelf corner in Hz.
            high_cutoff => "highCutoff" = 3300.0,
            /// Low band gain in dB.
            low_gain => "lowGain" = 0.0,
            /// Mid band gain in dB.
            mid_gain => "midGain" = 0.0,
            /// High band gain in dB.
            high_gain => "highGain" = 0.0,
        },
        inputs: ["audio": Audio],
        outputs: ["audio": Audio],
    }
}
