use grapher_core::Time;

use crate::plugin_node;

plugin_node! {
    /// Repeats a window of its input.
    pub struct LoopNode {
        kind: "com.nativeformat.plugin.time.loop",
        config: LoopConfig {
            /// Start of the looped window.
            when: Time => "when",
            /// Length of the looped window.
            duration: Time => "duration",
            /// Number of repetitions; negative loops forever.
            loop_count: i64 => "loopCount" = -1,
        },
        params {},
        inputs: ["audio": Audio],
        outputs: ["audio": Audio],
    }
}
