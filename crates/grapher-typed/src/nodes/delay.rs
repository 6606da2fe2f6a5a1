use crate::plugin_node;

plugin_node! {
    /// Delays its input by a variable amount.
    pub struct DelayNode {
        kind: "com.nativeformat.plugin.waa.delay",
        config: DelayConfig {},
        params {
            /// Delay in seconds.
            delay_time => "delayTime" = 0.0,
        },
        inputs: ["audio": Audio],
        outputs: ["audio": Audio],
    }
}
