use grapher_core::Time;

use crate::plugin_node;

plugin_node! {
    /// Sine wave source.
    pub struct SineNode {
        kind: "com.nativeformat.plugin.wave.sine",
        config: SineConfig {
            /// Frequency in Hz.
            frequency: f64 => "frequency" = 0.0,
            /// Start on the graph timeline.
            when: Time => "when" = Time::ZERO,
            /// Length of the tone.
            duration: Time => "duration" = Time::ZERO,
        },
        params {},
        inputs: [],
        outputs: ["audio": Audio],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plugin, TypedNode};
    use grapher_core::Node;

    #[test]
    fn integral_frequency_widens() {
        let node = Node::new("s", SineNode::KIND).with_config("frequency", 440);
        let sine = SineNode::from_node(&node).unwrap();
        assert_eq!(*sine.frequency(), 440.0);
        assert!(sine.inputs().is_empty());
    }
}
