//! Enumerations with a fixed string representation on the wire.
//!
//! Every enum in a score document (the loading policy, port content types and
//! the plugin-specific configuration enums) is declared through [`wire_enum!`],
//! which pairs each variant with its exact wire string and derives the string
//! conversions and serde impls from that single table. Decoding an unknown
//! string fails with [`UnrecognizedEnumValue`](crate::UnrecognizedEnumValue).

/// Declare an enum whose variants map one-to-one onto wire strings.
///
/// The generated type is `Copy + Eq + Hash`, implements `Display`, `FromStr`,
/// `Serialize` and `Deserialize`, and provides `as_str`, `from_wire` and an
/// `ALL` table.
///
/// # Example
///
/// ```rust
/// grapher_core::wire_enum! {
///     /// Shape of an oscillator.
///     pub enum Waveform {
///         /// A pure tone.
///         Sine => "sine",
///         /// A sawtooth.
///         Saw => "saw",
///     }
/// }
///
/// assert_eq!(Waveform::Saw.as_str(), "saw");
/// assert_eq!("sine".parse::<Waveform>().unwrap(), Waveform::Sine);
/// assert!(Waveform::from_wire("square").is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire string for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Parse a wire string.
            pub fn from_wire(
                value: &str,
            ) -> ::core::result::Result<Self, $crate::UnrecognizedEnumValue> {
                match value {
                    $( $wire => Ok($name::$variant), )+
                    other => Err($crate::UnrecognizedEnumValue::new(stringify!($name), other)),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnrecognizedEnumValue;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::from_wire(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                Self::from_wire(&raw).map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

wire_enum! {
    /// How much content the engine must load before playback may start.
    pub enum LoadingPolicy {
        /// Playback may begin once some content is available.
        SomeContentPlaythrough => "someContentPlaythrough",
        /// Playback waits until all content is available.
        AllContentPlaythrough => "allContentPlaythrough",
    }
}

impl Default for LoadingPolicy {
    fn default() -> Self {
        LoadingPolicy::AllContentPlaythrough
    }
}

wire_enum! {
    /// The kind of data a port produces or accepts.
    pub enum ContentType {
        /// Audio samples.
        Audio => "audio",
        /// Control-rate signal.
        Control => "control",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnrecognizedEnumValue;

    #[test]
    fn loading_policy_wire_strings() {
        assert_eq!(
            LoadingPolicy::SomeContentPlaythrough.as_str(),
            "someContentPlaythrough"
        );
        assert_eq!(
            LoadingPolicy::AllContentPlaythrough.to_string(),
            "allContentPlaythrough"
        );
    }

    #[test]
    fn from_wire_round_trips_all_variants() {
        for policy in LoadingPolicy::ALL {
            assert_eq!(LoadingPolicy::from_wire(policy.as_str()), Ok(*policy));
        }
    }

    #[test]
    fn unknown_string_is_rejected() {
        assert_eq!(
            "AllContentPlaythrough".parse::<LoadingPolicy>(),
            Err(UnrecognizedEnumValue::new(
                "LoadingPolicy",
                "AllContentPlaythrough"
            ))
        );
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&LoadingPolicy::SomeContentPlaythrough).unwrap();
        assert_eq!(json, "\"someContentPlaythrough\"");
        let back: LoadingPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LoadingPolicy::SomeContentPlaythrough);
    }

    #[test]
    fn serde_rejects_unknown_strings() {
        let err = serde_json::from_str::<ContentType>("\"video\"").unwrap_err();
        assert!(err.to_string().contains("unrecognized ContentType value 'video'"));
    }

    #[test]
    fn default_loading_policy() {
        assert_eq!(LoadingPolicy::default(), LoadingPolicy::AllContentPlaythrough);
    }
}
