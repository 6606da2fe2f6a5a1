use crate::plugin_node;

plugin_node! {
    /// Scales its input.
    pub struct GainNode {
        kind: "com.nativeformat.plugin.waa.gain",
        config: GainConfig {},
        params {
            /// Linear amplitude multiplier.
            gain => "gain" = 1.0,
        },
        inputs: ["audio": Audio],
        outputs: ["audio": Audio],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plugin, TypedNode, TypedParam};
    use grapher_core::{LoadingPolicy, Time};

    #[test]
    fn automation_survives_round_trip() {
        let mut gain = GainNode::create_with_policy(LoadingPolicy::SomeContentPlaythrough, GainConfig::default())
            .unwrap()
            .with_label("fade in");
        gain.gain
            .set_value_at_time(0.0, Time::ZERO)
            .unwrap()
            .linear_ramp_to_value_at_time(1.0, Time::from_seconds(3.0))
            .unwrap();

        let node = gain.to_node();
        assert_eq!(node.label.as_deref(), Some("fade in"));
        assert!(node.config.is_empty());

        let back = GainNode::from_node(&node).unwrap();
        assert_eq!(back, gain);
        assert_eq!(back.loading_policy(), LoadingPolicy::SomeContentPlaythrough);
        assert_eq!(back.gain.commands().len(), 2);
    }
}
