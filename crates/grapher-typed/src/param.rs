//! Automatable parameters.

use std::fmt;

use grapher_core::{Command, Params, Time, Value};

use crate::error::{MappingError, MappingResult};
use crate::schema::ParamSpec;

/// A parameter made of an initial value plus an append-only command log.
pub trait TypedParam: Clone + fmt::Debug + PartialEq {
    /// Type of the parameter's initial value.
    type Value: Clone + fmt::Debug + PartialEq + Into<Value>;

    /// Rebuild a parameter from a stored command log.
    fn from_commands(initial_value: Self::Value, commands: Vec<Command>) -> Self;

    /// The value before any command takes effect.
    fn initial_value(&self) -> &Self::Value;

    /// The recorded commands, in call order.
    fn commands(&self) -> &[Command];
}

/// A Web Audio style automation curve over an `f64` value.
///
/// Every mutator appends exactly one [`Command`] and returns `&mut Self`
/// wrapped in a [`MappingResult`], so calls chain with `?`. Only infinite and
/// NaN values are refused. Commands are kept in call order; times are not
/// validated or sorted.
///
/// # Example
///
/// ```rust
/// use grapher_core::Time;
/// use grapher_typed::{AudioParam, TypedParam};
///
/// let mut gain = AudioParam::new(1.0);
/// gain.set_value_at_time(0.0, Time::ZERO)?
///     .linear_ramp_to_value_at_time(1.0, Time::from_seconds(2.0))?;
///
/// assert_eq!(gain.commands().len(), 2);
/// assert_eq!(gain.commands()[1].name(), "linearRampToValueAtTime");
/// # Ok::<(), grapher_typed::MappingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AudioParam {
    initial_value: f64,
    commands: Vec<Command>,
}

impl AudioParam {
    /// A parameter with an empty log.
    pub fn new(initial_value: f64) -> Self {
        Self {
            initial_value,
            commands: Vec::new(),
        }
    }

    fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    /// Jump to `value` at `start_time`.
    ///
    /// # Errors
    ///
    /// [`MappingError::NonFiniteValue`] if `value` is infinite or NaN. Nothing
    /// is appended on failure, which also holds for the other mutators.
    pub fn set_value_at_time(&mut self, value: f64, start_time: Time) -> MappingResult<&mut Self> {
        finite("value", value)?;
        Ok(self.push(
            Command::new("setValueAtTime")
                .with_arg("value", value)
                .with_arg("startTime", start_time),
        ))
    }

    /// Ramp linearly from the previous event to `value`, arriving at `end_time`.
    ///
    /// # Errors
    ///
    /// [`MappingError::NonFiniteValue`] if `value` is infinite or NaN.
    pub fn linear_ramp_to_value_at_time(&mut self, value: f64, end_time: Time) -> MappingResult<&mut Self> {
        finite("value", value)?;
        Ok(self.push(
            Command::new("linearRampToValueAtTime")
                .with_arg("value", value)
                .with_arg("endTime", end_time),
        ))
    }

    /// Ramp exponentially from the previous event to `value`, arriving at `end_time`.
    ///
    /// # Errors
    ///
    /// [`MappingError::NonFiniteValue`] if `value` is infinite or NaN.
    pub fn exponential_ramp_to_value_at_time(&mut self, value: f64, end_time: Time) -> MappingResult<&mut Self> {
        finite("value", value)?;
        Ok(self.push(
            Command::new("exponentialRampToValueAtTime")
                .with_arg("value", value)
                .with_arg("endTime", end_time),
        ))
    }

    /// Approach `target` from `start_time` with the given time constant.
    ///
    /// # Errors
    ///
    /// [`MappingError::NonFiniteValue`] if `target` or `time_constant` is
    /// infinite or NaN.
    pub fn set_target_at_time(
        &mut self,
        target: f64,
        start_time: Time,
        time_constant: f64,
    ) -> MappingResult<&mut Self> {
        finite("target", target)?;
        finite("timeConstant", time_constant)?;
        Ok(self.push(
            Command::new("setTargetAtTime")
                .with_arg("target", target)
                .with_arg("startTime", start_time)
                .with_arg("timeConstant", time_constant),
        ))
    }

    /// Follow `values` evenly spread over `duration`, starting at `start_time`.
    ///
    /// # Errors
    ///
    /// [`MappingError::NonFiniteValue`] if any of `values` is infinite or NaN.
    pub fn set_value_curve_at_time(
        &mut self,
        values: &[f64],
        start_time: Time,
        duration: Time,
    ) -> MappingResult<&mut Self> {
        if !values.iter().all(|v| v.is_finite()) {
            return Err(MappingError::NonFiniteValue("values".to_string()));
        }
        Ok(self.push(
            Command::new("setValueCurveAtTime")
                .with_arg("values", values.to_vec())
                .with_arg("startTime", start_time)
                .with_arg("duration", duration),
        ))
    }
}

fn finite(arg: &str, value: f64) -> MappingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MappingError::NonFiniteValue(arg.to_string()))
    }
}

impl TypedParam for AudioParam {
    type Value = f64;

    fn from_commands(initial_value: f64, commands: Vec<Command>) -> Self {
        Self {
            initial_value,
            commands,
        }
    }

    fn initial_value(&self) -> &f64 {
        &self.initial_value
    }

    fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Descriptor of one parameter of a node.
///
/// Reading never fails: a parameter missing from the document comes back with
/// the declared initial value and an empty log. Commands are not inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamMapper<P: TypedParam> {
    name: &'static str,
    initial_value: P::Value,
}

impl<P: TypedParam> ParamMapper<P> {
    /// Describe a parameter.
    pub const fn new(name: &'static str, initial_value: P::Value) -> Self {
        Self { name, initial_value }
    }

    /// Wire name of the parameter.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// A fresh parameter with an empty log.
    pub fn create(&self) -> P {
        P::from_commands(self.initial_value.clone(), Vec::new())
    }

    /// Rebuild the parameter from a node's params map.
    pub fn read(&self, params: &Params) -> P {
        self.read_commands(params.get(self.name).map(Vec::as_slice).unwrap_or_default())
    }

    /// Rebuild the parameter from a command slice.
    pub fn read_commands(&self, commands: &[Command]) -> P {
        P::from_commands(self.initial_value.clone(), commands.to_vec())
    }

    /// The parameter's log, verbatim.
    pub fn write(&self, param: &P) -> Vec<Command> {
        param.commands().to_vec()
    }

    /// Store the parameter's log in a params map under this parameter's name.
    pub fn write_to(&self, param: &P, params: &mut Params) {
        params.insert(self.name.to_string(), self.write(param));
    }

    /// Schema entry for this parameter.
    pub fn spec(&self) -> ParamSpec {
        ParamSpec {
            name: self.name,
            initial_value: self.initial_value.clone().into(),
        }
    }
}
