//! Declarative macros for plugin nodes and their enums.

/// Declare a wire enum usable as a config field.
///
/// Expands to [`wire_enum!`](grapher_core::wire_enum) plus
/// [`impl_enum_arg!`](crate::impl_enum_arg).
///
/// # Example
///
/// ```rust
/// use grapher_typed::{ArgMapper, plugin_enum};
/// use serde_json::json;
///
/// plugin_enum! {
///     /// Oscillator shape.
///     pub enum Waveform {
///         /// Pure tone.
///         Sine => "sine",
///         /// Sawtooth.
///         Saw => "saw",
///     }
/// }
///
/// let shape: ArgMapper<Waveform> = ArgMapper::with_default("shape", Waveform::Sine);
/// assert_eq!(shape.read(Some(&json!("saw"))).unwrap(), Waveform::Saw);
/// assert!(shape.read(Some(&json!("square"))).is_err());
/// ```
#[macro_export]
macro_rules! plugin_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($body:tt)* }
    ) => {
        $crate::wire_enum! {
            $(#[$meta])*
            $vis enum $name { $($body)* }
        }

        $crate::impl_enum_arg!($name);
    };
}

/// Declare a strongly-typed plugin node.
///
/// Generates the node struct, a companion config struct of optional fields,
/// constructors, `with_label`, and implementations of
/// [`TypedNode`](crate::TypedNode) and [`Plugin`](crate::Plugin). Config fields
/// without a `= default` are required. Every parameter is an
/// [`AudioParam`](crate::AudioParam) with the given initial value.
///
/// # Example
///
/// ```rust
/// use grapher_core::Time;
/// use grapher_typed::{Plugin, TypedNode, plugin_node};
///
/// plugin_node! {
///     /// A test tone.
///     pub struct ToneNode {
///         kind: "com.example.tone",
///         config: ToneConfig {
///             /// Tone length.
///             duration: Time => "duration",
///             /// Tone pitch in Hz.
///             frequency: f64 => "frequency" = 440.0,
///         },
///         params {
///             /// Output level.
///             level => "level" = 1.0,
///         },
///         inputs: [],
///         outputs: ["audio": Audio],
///     }
/// }
///
/// let mut tone = ToneNode::create(ToneConfig::default().duration(Time::from_seconds(1.0))).unwrap();
/// tone.level.set_value_at_time(0.5, Time::ZERO).unwrap();
///
/// let node = tone.to_node();
/// assert_eq!(node.config["frequency"], 440.0);
/// assert_eq!(ToneNode::from_node(&node).unwrap(), tone);
/// assert!(ToneNode::create(ToneConfig::default()).is_err());
/// ```
#[macro_export]
macro_rules! plugin_node {
    (@arg $ty:ty, $wire:literal) => {
        $crate::ArgMapper::<$ty>::required($wire)
    };
    (@arg $ty:ty, $wire:literal, $default:expr) => {
        $crate::ArgMapper::<$ty>::with_default($wire, $default)
    };
    (@param $wire:literal, $initial:expr) => {
        $crate::ParamMapper::<$crate::AudioParam>::new($wire, $initial)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            kind: $kind:literal,
            config: $config:ident {
                $(
                    $(#[$cmeta:meta])*
                    $cfield:ident : $cty:ty => $cwire:literal $(= $cdefault:expr)?
                ),* $(,)?
            },
            params {
                $(
                    $(#[$pmeta:meta])*
                    $pfield:ident => $pwire:literal = $pinit:expr
                ),* $(,)?
            },
            inputs: [$($iname:literal : $itype:ident),* $(,)?],
            outputs: [$($oname:literal : $otype:ident),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            header: $crate::NodeHeader,
            $( $cfield: $cty, )*
            $( $(#[$pmeta])* pub $pfield: $crate::AudioParam, )*
        }

        #[doc = concat!("Construction-time config for [`", stringify!($name), "`]. Unset fields take their defaults.")]
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $config {
            $( $(#[$cmeta])* pub $cfield: Option<$cty>, )*
        }

        impl $config {
            $(
                $(#[$cmeta])*
                #[must_use]
                pub fn $cfield(mut self, value: $cty) -> Self {
                    self.$cfield = Some(value);
                    self
                }
            )*
        }

        impl $name {
            /// Declared inputs.
            pub const INPUTS: &'static [$crate::PortSpec] = &[
                $( $crate::PortSpec::new($iname, $crate::ContentType::$itype) ),*
            ];

            /// Declared outputs.
            pub const OUTPUTS: &'static [$crate::PortSpec] = &[
                $( $crate::PortSpec::new($oname, $crate::ContentType::$otype) ),*
            ];

            /// Create a node with a fresh id and the default loading policy.
            ///
            /// # Errors
            ///
            /// `MappingError::MissingRequiredArgument` if a required field is unset,
            /// `MappingError::NonFiniteValue` if a float field is infinite or NaN.
            pub fn create(config: $config) -> $crate::MappingResult<Self> {
                Self::create_with(None, $crate::LoadingPolicy::default(), config)
            }

            /// Create a node with a fresh id and the given loading policy.
            ///
            /// # Errors
            ///
            /// Same as [`create`](Self::create).
            pub fn create_with_policy(
                loading_policy: $crate::LoadingPolicy,
                config: $config,
            ) -> $crate::MappingResult<Self> {
                Self::create_with(None, loading_policy, config)
            }

            /// Create a node with an explicit id (or a fresh one) and policy.
            ///
            /// # Errors
            ///
            /// Same as [`create`](Self::create).
            pub fn create_with(
                id: Option<String>,
                loading_policy: $crate::LoadingPolicy,
                config: $config,
            ) -> $crate::MappingResult<Self> {
                let $config { $( $cfield ),* } = config;
                let node = Self {
                    header: $crate::NodeHeader::new(id, loading_policy),
                    $( $cfield: $crate::plugin_node!(@arg $cty, $cwire $(, $cdefault)?).value_or_default($cfield)?, )*
                    $( $pfield: $crate::plugin_node!(@param $pwire, $pinit).create(), )*
                };
                $crate::__private::tracing::debug!("node_create: {} ({})", node.header.id, $kind);
                Ok(node)
            }

            /// Attach a human-readable label.
            #[must_use]
            pub fn with_label(mut self, label: impl Into<String>) -> Self {
                self.header.label = Some(label.into());
                self
            }

            $(
                $(#[$cmeta])*
                pub fn $cfield(&self) -> &$cty {
                    &self.$cfield
                }
            )*
        }

        impl $crate::TypedNode for $name {
            fn header(&self) -> &$crate::NodeHeader {
                &self.header
            }

            fn kind(&self) -> &'static str {
                $kind
            }

            fn inputs(&self) -> &'static [$crate::PortSpec] {
                Self::INPUTS
            }

            fn outputs(&self) -> &'static [$crate::PortSpec] {
                Self::OUTPUTS
            }

            fn config(&self) -> $crate::Config {
                #[allow(unused_mut)]
                let mut config = $crate::Config::new();
                // Fields were checked for finiteness when the node was built.
                $( config.insert($cwire.to_string(), $crate::ArgValue::encode(&self.$cfield)); )*
                config
            }

            fn params(&self) -> $crate::Params {
                #[allow(unused_mut)]
                let mut params = $crate::Params::new();
                $( $crate::plugin_node!(@param $pwire, $pinit).write_to(&self.$pfield, &mut params); )*
                params
            }
        }

        impl $crate::Plugin for $name {
            const KIND: &'static str = $kind;

            fn from_node(node: &$crate::Node) -> $crate::MappingResult<Self> {
                if node.kind != $kind {
                    return Err($crate::MappingError::UnexpectedKind {
                        expected: $kind,
                        actual: node.kind.clone(),
                    });
                }
                Ok(Self {
                    header: $crate::NodeHeader::from_node(node),
                    $( $cfield: $crate::plugin_node!(@arg $cty, $cwire $(, $cdefault)?).read_config(&node.config)?, )*
                    $( $pfield: $crate::plugin_node!(@param $pwire, $pinit).read(&node.params), )*
                })
            }

            fn schema() -> $crate::NodeSchema {
                $crate::NodeSchema {
                    kind: $kind,
                    inputs: Self::INPUTS,
                    outputs: Self::OUTPUTS,
                    config: vec![ $( $crate::plugin_node!(@arg $cty, $cwire $(, $cdefault)?).spec() ),* ],
                    params: vec![ $( $crate::plugin_node!(@param $pwire, $pinit).spec() ),* ],
                }
            }
        }
    };
}
