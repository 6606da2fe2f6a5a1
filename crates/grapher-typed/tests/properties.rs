//! Property-based tests for grapher-typed mappers and nodes.
//!
//! Checks that written values of every kind read back unchanged, that list
//! kinds validate every element, and that automation logs survive node
//! conversion.

use grapher_core::{Config, Time, Value};
use grapher_typed::nodes::{GainConfig, GainNode, LoopConfig, LoopNode};
use grapher_typed::{ArgMapper, MappingError, Plugin, TypedNode, TypedParam, plugin_enum};
use proptest::prelude::*;

plugin_enum! {
    /// Oscillator shape.
    pub enum Waveform {
        /// Pure tone.
        Sine => "sine",
        /// Sawtooth.
        Saw => "saw",
        /// Square.
        Square => "square",
    }
}

fn waveform() -> impl Strategy<Value = Waveform> {
    prop::sample::select(vec![Waveform::Sine, Waveform::Saw, Waveform::Square])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any string written to a config map reads back unchanged.
    #[test]
    fn string_arg_round_trip(value in ".*") {
        let mapper: ArgMapper<String> = ArgMapper::required("file");
        let mut config = Config::new();
        mapper.write_to(&value, &mut config).unwrap();
        prop_assert_eq!(mapper.read_config(&config).unwrap(), value);
    }

    /// Any integer reads back unchanged, both as `int` and as `time`.
    #[test]
    fn integral_arg_round_trip(value in any::<i64>()) {
        let count: ArgMapper<i64> = ArgMapper::with_default("loopCount", -1);
        prop_assert_eq!(count.read(Some(&count.write(&value).unwrap())).unwrap(), value);

        let when: ArgMapper<Time> = ArgMapper::required("when");
        let time = Time::from_nanos(value);
        prop_assert_eq!(when.read(Some(&when.write(&time).unwrap())).unwrap(), time);
    }

    /// Finite floats read back bit-for-bit.
    #[test]
    fn float_arg_round_trip(value in -1.0e12f64..1.0e12f64) {
        let mapper: ArgMapper<f64> = ArgMapper::with_default("frequency", 0.0);
        let read = mapper.read(Some(&mapper.write(&value).unwrap())).unwrap();
        prop_assert_eq!(read.to_bits(), value.to_bits());
    }

    /// Float lists keep their length and order.
    #[test]
    fn float_list_round_trip(values in prop::collection::vec(-20000.0f64..20000.0, 0..16)) {
        let mapper: ArgMapper<Vec<f64>> = ArgMapper::with_default("cutoffs", Vec::new());
        prop_assert_eq!(mapper.read(Some(&mapper.write(&values).unwrap())).unwrap(), values);
    }

    /// Booleans read back unchanged whatever the default.
    #[test]
    fn bool_arg_round_trip(value in any::<bool>(), default in any::<bool>()) {
        let mapper: ArgMapper<bool> = ArgMapper::with_default("normalize", default);
        prop_assert_eq!(mapper.read(Some(&mapper.write(&value).unwrap())).unwrap(), value);
    }

    /// Enum variants travel as their wire names and read back unchanged.
    #[test]
    fn enum_arg_round_trip(value in waveform()) {
        let mapper: ArgMapper<Waveform> = ArgMapper::required("shape");
        let written = mapper.write(&value).unwrap();
        prop_assert_eq!(&written, &Value::from(value.as_str()));
        prop_assert_eq!(mapper.read(Some(&written)).unwrap(), value);
    }

    /// Integer lists keep their length and order.
    #[test]
    fn int_list_round_trip(values in prop::collection::vec(any::<i64>(), 0..16)) {
        let mapper: ArgMapper<Vec<i64>> = ArgMapper::required("counts");
        prop_assert_eq!(mapper.read(Some(&mapper.write(&values).unwrap())).unwrap(), values);
    }

    /// Boolean lists keep their length and order.
    #[test]
    fn bool_list_round_trip(values in prop::collection::vec(any::<bool>(), 0..16)) {
        let mapper: ArgMapper<Vec<bool>> = ArgMapper::with_default("mutes", Vec::new());
        prop_assert_eq!(mapper.read(Some(&mapper.write(&values).unwrap())).unwrap(), values);
    }

    /// Time lists keep their length and order.
    #[test]
    fn time_list_round_trip(nanos in prop::collection::vec(any::<i64>(), 0..16)) {
        let values: Vec<Time> = nanos.into_iter().map(Time::from_nanos).collect();
        let mapper: ArgMapper<Vec<Time>> = ArgMapper::required("markers");
        prop_assert_eq!(mapper.read(Some(&mapper.write(&values).unwrap())).unwrap(), values);
    }

    /// String lists keep their length and order.
    #[test]
    fn string_list_round_trip(values in prop::collection::vec(".*", 0..8)) {
        let mapper: ArgMapper<Vec<String>> = ArgMapper::required("files");
        prop_assert_eq!(mapper.read(Some(&mapper.write(&values).unwrap())).unwrap(), values);
    }

    /// Enum lists keep their length and order.
    #[test]
    fn enum_list_round_trip(values in prop::collection::vec(waveform(), 0..8)) {
        let mapper: ArgMapper<Vec<Waveform>> = ArgMapper::required("shapes");
        prop_assert_eq!(mapper.read(Some(&mapper.write(&values).unwrap())).unwrap(), values);
    }

    /// One unknown name anywhere in an enum list fails the whole field.
    #[test]
    fn enum_list_rejects_unknown_name(
        values in prop::collection::vec(waveform(), 0..8),
        position in 0usize..8,
    ) {
        let mapper: ArgMapper<Vec<Waveform>> = ArgMapper::required("shapes");
        let mut items: Vec<Value> = values.iter().map(|v| Value::from(v.as_str())).collect();
        items.insert(position.min(items.len()), Value::from("triangle"));
        let is_unrecognized = matches!(
            mapper.read(Some(&Value::Array(items))),
            Err(MappingError::UnrecognizedEnumValue { ref field, .. }) if field == "shapes"
        );
        prop_assert!(is_unrecognized);
    }

    /// A single string element anywhere spoils a numeric list.
    #[test]
    fn list_rejects_foreign_element(
        values in prop::collection::vec(-1000.0f64..1000.0, 0..8),
        position in 0usize..8,
    ) {
        let mapper: ArgMapper<Vec<f64>> = ArgMapper::required("cutoffs");
        let mut items: Vec<Value> = values.iter().copied().map(Value::from).collect();
        items.insert(position.min(items.len()), Value::from("x"));
        let is_mismatch = matches!(
            mapper.read(Some(&Value::Array(items))),
            Err(MappingError::KindMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Every automation call survives conversion in order.
    #[test]
    fn gain_automation_round_trip(
        events in prop::collection::vec((0.0f64..2.0, 0i64..10_000_000_000), 0..12),
    ) {
        let mut gain = GainNode::create(GainConfig::default()).unwrap();
        for &(value, nanos) in &events {
            gain.gain.set_value_at_time(value, Time::from_nanos(nanos)).unwrap();
        }
        let back = GainNode::from_node(&gain.to_node()).unwrap();
        prop_assert_eq!(back.gain.commands().len(), events.len());
        prop_assert_eq!(back, gain);
    }

    /// Loop nodes rebuild with the same configuration they were created with.
    #[test]
    fn loop_config_round_trip(
        when in 0i64..1_000_000_000_000,
        duration in 1i64..1_000_000_000_000,
        count in -1i64..64,
    ) {
        let looped = LoopNode::create(
            LoopConfig::default()
                .when(Time::from_nanos(when))
                .duration(Time::from_nanos(duration))
                .loop_count(count),
        )
        .unwrap();
        let back = LoopNode::from_node(&looped.to_node()).unwrap();
        prop_assert_eq!(back.config(), looped.config());
        prop_assert_eq!(*back.loop_count(), count);
    }
}
