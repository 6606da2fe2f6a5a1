//! Typed configuration fields.
//!
//! An [`ArgMapper`] describes one entry of a node's `config` map: its wire
//! name, the Rust type it decodes into, and an optional default. Reading
//! checks the JSON value's kind before converting it, so a bad document fails
//! with a [`MappingError`] naming the field instead of producing a garbage
//! value.
//!
//! Supported value types are `String`, `i64`, `f64`, `bool`, [`Time`], wire
//! enums declared with [`plugin_enum!`](crate::plugin_enum), and `Vec<T>` of
//! any of those.

use std::fmt;

use grapher_core::{Command, Config, Time, UnrecognizedEnumValue, Value};

use crate::error::{MappingError, MappingResult};
use crate::schema::ArgSpec;

/// Element kinds a config field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// JSON string.
    String,
    /// Integral JSON number that fits in an `i64`.
    Int,
    /// Any JSON number.
    Float,
    /// JSON boolean.
    Bool,
    /// Integral JSON number of nanoseconds.
    Time,
    /// JSON string naming an enum variant.
    Enum,
}

impl ScalarKind {
    /// Name used in error messages. Enums travel as strings and report as such.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::String | ScalarKind::Enum => "string",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Bool => "bool",
            ScalarKind::Time => "time",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared kind of a config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// A single value.
    Scalar(ScalarKind),
    /// A homogeneous array.
    List(ScalarKind),
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::Scalar(kind) => write!(f, "{kind}"),
            ArgKind::List(kind) => write!(f, "list({kind})"),
        }
    }
}

/// Kind of a JSON value as found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Any number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl ValueKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to convert a value that passed, or skipped, the kind predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value has the wrong kind.
    Kind(ValueKind),
    /// The value is a string that names no enum variant.
    Enum(UnrecognizedEnumValue),
}

/// A Rust type that can be stored in a node's config map.
pub trait ArgValue: Clone + Sized {
    /// Kind reported in schemas and errors.
    const KIND: ArgKind;

    /// Kind predicate: whether `value` has the shape this type decodes from.
    fn matches(value: &Value) -> bool;

    /// Convert a value.
    fn decode(value: &Value) -> Result<Self, ValueError>;

    /// Convert back into a value.
    fn encode(&self) -> Value;

    /// Whether [`encode`](Self::encode) yields a value that decodes back.
    /// Only infinite and NaN floats fail this.
    fn is_encodable(&self) -> bool {
        true
    }
}

/// An [`ArgValue`] that may appear as a list element.
pub trait ScalarArg: ArgValue {
    /// Element kind.
    const SCALAR: ScalarKind;
}

fn kind_error<T>(value: &Value) -> Result<T, ValueError> {
    Err(ValueError::Kind(ValueKind::of(value)))
}

impl ArgValue for String {
    const KIND: ArgKind = ArgKind::Scalar(ScalarKind::String);

    fn matches(value: &Value) -> bool {
        value.is_string()
    }

    fn decode(value: &Value) -> Result<Self, ValueError> {
        match value.as_str() {
            Some(s) => Ok(s.to_string()),
            None => kind_error(value),
        }
    }

    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ScalarArg for String {
    const SCALAR: ScalarKind = ScalarKind::String;
}

impl ArgValue for i64 {
    const KIND: ArgKind = ArgKind::Scalar(ScalarKind::Int);

    fn matches(value: &Value) -> bool {
        value.is_i64()
    }

    fn decode(value: &Value) -> Result<Self, ValueError> {
        value.as_i64().map_or_else(|| kind_error(value), Ok)
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl ScalarArg for i64 {
    const SCALAR: ScalarKind = ScalarKind::Int;
}

impl ArgValue for f64 {
    const KIND: ArgKind = ArgKind::Scalar(ScalarKind::Float);

    // Integers widen.
    fn matches(value: &Value) -> bool {
        value.is_number()
    }

    fn decode(value: &Value) -> Result<Self, ValueError> {
        value.as_f64().map_or_else(|| kind_error(value), Ok)
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }

    fn is_encodable(&self) -> bool {
        self.is_finite()
    }
}

impl ScalarArg for f64 {
    const SCALAR: ScalarKind = ScalarKind::Float;
}

impl ArgValue for bool {
    const KIND: ArgKind = ArgKind::Scalar(ScalarKind::Bool);

    fn matches(value: &Value) -> bool {
        value.is_boolean()
    }

    fn decode(value: &Value) -> Result<Self, ValueError> {
        value.as_bool().map_or_else(|| kind_error(value), Ok)
    }

    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ScalarArg for bool {
    const SCALAR: ScalarKind = ScalarKind::Bool;
}

impl ArgValue for Time {
    const KIND: ArgKind = ArgKind::Scalar(ScalarKind::Time);

    fn matches(value: &Value) -> bool {
        value.is_i64()
    }

    fn decode(value: &Value) -> Result<Self, ValueError> {
        value
            .as_i64()
            .map_or_else(|| kind_error(value), |nanos| Ok(Time::from_nanos(nanos)))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl ScalarArg for Time {
    const SCALAR: ScalarKind = ScalarKind::Time;
}

impl<T: ScalarArg> ArgValue for Vec<T> {
    const KIND: ArgKind = ArgKind::List(T::SCALAR);

    fn matches(value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(T::matches))
    }

    fn decode(value: &Value) -> Result<Self, ValueError> {
        match value.as_array() {
            Some(items) => items.iter().map(T::decode).collect(),
            None => kind_error(value),
        }
    }

    fn encode(&self) -> Value {
        Value::Array(self.iter().map(ArgValue::encode).collect())
    }

    fn is_encodable(&self) -> bool {
        self.iter().all(ArgValue::is_encodable)
    }
}

/// Implement [`ArgValue`] and [`ScalarArg`] for a wire enum.
///
/// Usually invoked through [`plugin_enum!`](crate::plugin_enum).
#[macro_export]
macro_rules! impl_enum_arg {
    ($name:ty) => {
        impl $crate::ArgValue for $name {
            const KIND: $crate::ArgKind = $crate::ArgKind::Scalar($crate::ScalarKind::Enum);

            fn matches(value: &$crate::Value) -> bool {
                value.is_string()
            }

            fn decode(value: &$crate::Value) -> ::core::result::Result<Self, $crate::ValueError> {
                match value.as_str() {
                    Some(s) => <$name>::from_wire(s).map_err($crate::ValueError::Enum),
                    None => Err($crate::ValueError::Kind($crate::ValueKind::of(value))),
                }
            }

            fn encode(&self) -> $crate::Value {
                $crate::Value::String(self.as_str().to_string())
            }
        }

        impl $crate::ScalarArg for $name {
            const SCALAR: $crate::ScalarKind = $crate::ScalarKind::Enum;
        }
    };
}

/// Descriptor of one typed config field.
///
/// # Example
///
/// ```rust
/// use grapher_typed::{ArgMapper, MappingError};
/// use serde_json::json;
///
/// const FILE: ArgMapper<String> = ArgMapper::required("file");
///
/// assert_eq!(FILE.read(Some(&json!("track.ogg"))).unwrap(), "track.ogg");
/// assert!(matches!(FILE.read(None), Err(MappingError::MissingRequiredArgument(_))));
/// assert!(matches!(FILE.read(Some(&json!(0))), Err(MappingError::KindMismatch { .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArgMapper<T> {
    name: &'static str,
    default: Option<T>,
}

impl<T> ArgMapper<T> {
    /// A field with an optional default.
    pub const fn new(name: &'static str, default: Option<T>) -> Self {
        Self { name, default }
    }

    /// A field that must be present.
    pub const fn required(name: &'static str) -> Self {
        Self::new(name, None)
    }

    /// A field that falls back to `default` when absent.
    pub const fn with_default(name: &'static str, default: T) -> Self {
        Self::new(name, Some(default))
    }

    /// Wire name of the field.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The default, if any.
    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }
}

impl<T: ArgValue> ArgMapper<T> {
    /// Declared kind.
    pub const fn kind(&self) -> ArgKind {
        T::KIND
    }

    /// Decode a raw value. `None` and JSON `null` both count as absent.
    pub fn read(&self, raw: Option<&Value>) -> MappingResult<T> {
        let Some(value) = raw.filter(|v| !v.is_null()) else {
            return self.missing();
        };
        if !T::matches(value) {
            return Err(self.mismatch(ValueKind::of(value)));
        }
        T::decode(value).map_err(|err| match err {
            ValueError::Kind(actual) => self.mismatch(actual),
            ValueError::Enum(source) => MappingError::UnrecognizedEnumValue {
                field: self.name.to_string(),
                source,
            },
        })
    }

    /// Look the field up in a config map and decode it.
    pub fn read_config(&self, config: &Config) -> MappingResult<T> {
        self.read(config.get(self.name))
    }

    /// Look the field up in a command's arguments and decode it.
    pub fn read_arg(&self, command: &Command) -> MappingResult<T> {
        self.read(command.arg(self.name))
    }

    /// Encode a value.
    ///
    /// # Errors
    ///
    /// [`MappingError::NonFiniteValue`] if the value holds an infinite or NaN
    /// float.
    pub fn write(&self, value: &T) -> MappingResult<Value> {
        self.check_encodable(value)?;
        Ok(value.encode())
    }

    /// Encode a value into a config map under this field's name.
    ///
    /// # Errors
    ///
    /// Same as [`write`](Self::write). The map is left untouched on failure.
    pub fn write_to(&self, value: &T, config: &mut Config) -> MappingResult<()> {
        let value = self.write(value)?;
        config.insert(self.name.to_string(), value);
        Ok(())
    }

    /// Resolve an optional caller-supplied value against the default.
    ///
    /// # Errors
    ///
    /// [`MappingError::MissingRequiredArgument`] when `value` is `None` and
    /// there is no default, [`MappingError::NonFiniteValue`] when the value
    /// could not be written.
    pub fn value_or_default(&self, value: Option<T>) -> MappingResult<T> {
        match value {
            Some(value) => {
                self.check_encodable(&value)?;
                Ok(value)
            }
            None => self.missing(),
        }
    }

    /// Schema entry for this field.
    pub fn spec(&self) -> ArgSpec {
        ArgSpec {
            name: self.name,
            kind: T::KIND,
            required: self.default.is_none(),
            default: self.default.as_ref().map(ArgValue::encode),
        }
    }

    fn check_encodable(&self, value: &T) -> MappingResult<()> {
        if value.is_encodable() {
            Ok(())
        } else {
            Err(MappingError::NonFiniteValue(self.name.to_string()))
        }
    }

    fn missing(&self) -> MappingResult<T> {
        self.default
            .clone()
            .ok_or_else(|| MappingError::MissingRequiredArgument(self.name.to_string()))
    }

    fn mismatch(&self, actual: ValueKind) -> MappingError {
        MappingError::KindMismatch {
            field: self.name.to_string(),
            expected: T::KIND,
            actual,
        }
    }
}
