use grapher_core::Time;

use crate::plugin_node;

plugin_node! {
    /// Silent source, used to pad a timeline.
    pub struct SilenceNode {
        kind: "com.nativeformat.plugin.noise.silence",
        config: SilenceConfig {
            /// Start on the graph timeline.
            when: Time => "when" = Time::ZERO,
            /// Length of the silence.
            duration: Time => "duration" = Time::ZERO,
        },
        params {},
        inputs: [],
        outputs: ["audio": Audio],
    }
}
