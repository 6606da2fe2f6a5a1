//! Property-based tests for grapher-core primitives.
//!
//! Tests time conversion truncation and codec round trips using proptest for
//! randomized input generation. Float values are dyadic so that they survive
//! text encoding exactly.

use grapher_core::{Command, Converter, Edge, Graph, Node, Score, Time};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Seconds scale by 1e9 and truncate toward zero.
    #[test]
    fn from_seconds_truncates(seconds in -1.0e6f64..1.0e6f64) {
        let time = Time::from_seconds(seconds);
        let exact = seconds * 1e9;
        prop_assert_eq!(time.as_nanos(), exact.trunc() as i64);
        prop_assert!((time.as_nanos() as f64).abs() <= exact.abs());
    }

    /// Milliseconds and minutes use the same rule.
    #[test]
    fn from_millis_and_minutes_truncate(value in -1.0e4f64..1.0e4f64) {
        prop_assert_eq!(Time::from_millis(value).as_nanos(), (value * 1e6) as i64);
        prop_assert_eq!(Time::from_minutes(value).as_nanos(), (value * 6e10) as i64);
    }

    /// Ordering and equality follow the nanosecond count.
    #[test]
    fn time_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Time::from_nanos(a).cmp(&Time::from_nanos(b)), a.cmp(&b));
    }

    /// Arbitrary graphs survive the JSON codec unchanged.
    #[test]
    fn score_round_trip(
        ids in prop::collection::btree_set("[a-z]{1,8}", 1..8),
        values in prop::collection::vec((-1024i32..1024).prop_map(|n| f64::from(n) / 1024.0), 0..4),
        nanos in any::<i64>(),
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let commands: Vec<Command> = values
            .iter()
            .map(|&value| {
                Command::new("setValueAtTime")
                    .with_arg("value", value)
                    .with_arg("startTime", Time::from_nanos(nanos))
            })
            .collect();
        let mut graph = Graph::new("g");
        for id in &ids {
            graph.add_node(
                Node::new(id.clone(), "k")
                    .with_param("gain", commands.clone())
                    .with_config("when", Time::from_nanos(nanos)),
            );
        }
        for pair in ids.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            graph.add_edge(Edge::new(format!("{from}-{to}"), from.clone(), to.clone()));
        }

        let score = Score::new(graph);
        let converter = Converter::default();
        let json = converter.to_json_string(&score).unwrap();
        prop_assert_eq!(converter.from_json_str(&json).unwrap(), score);
    }
}
