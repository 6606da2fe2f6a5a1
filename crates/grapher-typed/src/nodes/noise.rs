use grapher_core::Time;

use crate::plugin_node;

plugin_node! {
    /// White noise source.
    pub struct NoiseNode {
        kind: "com.nativeformat.plugin.noise.noise",
        config: NoiseConfig {
            /// Start on the graph timeline.
            when: Time => "when" = Time::ZERO,
            /// Length of the noise.
            duration: Time => "duration" = Time::ZERO,
        },
        params {},
        inputs: [],
        outputs: ["audio": Audio],
    }
}
