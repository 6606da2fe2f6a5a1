//! The built-in plugin nodes.
//!
//! | Node | Kind | Inputs | Outputs |
//! |------|------|--------|---------|
//! | [`CompressorNode`] | `compressor.compressor` | audio, sidechain | audio |
//! | [`ExpanderNode`] | `compressor.expander` | audio, sidechain | audio |
//! | [`CompanderNode`] | `compressor.compander` | audio, sidechain | audio |
//! | [`DelayNode`] | `waa.delay` | audio | audio |
//! | [`GainNode`] | `waa.gain` | audio | audio |
//! | [`FilterNode`] | `eq.filter` | audio | audio |
//! | [`Eq3bandNode`] | `eq.eq3band` | audio | audio |
//! | [`StretchNode`] | `time.stretch` | audio | audio |
//! | [`LoopNode`] | `time.loop` | audio | audio |
//! | [`FileNode`] | `file.file` | | audio |
//! | [`NoiseNode`] | `noise.noise` | | audio |
//! | [`SilenceNode`] | `noise.silence` | | audio |
//! | [`SineNode`] | `wave.sine` | | audio |
//!
//! Kinds are shown without the `com.nativeformat.plugin.` prefix.

mod compander;
mod compressor;
mod delay;
mod eq3band;
mod expander;
mod file;
mod filter;
mod gain;
mod noise;
mod silence;
mod sine;
mod stretch;
mod time_loop;

pub use compander::{CompanderConfig, CompanderNode};
pub use compressor::{CompressorConfig, CompressorNode, DetectionMode, KneeMode};
pub use delay::{DelayConfig, DelayNode};
pub use eq3band::{Eq3bandConfig, Eq3bandNode};
pub use expander::{ExpanderConfig, ExpanderNode};
pub use file::{FileConfig, FileNode};
pub use filter::{FilterConfig, FilterNode, FilterType};
pub use gain::{GainConfig, GainNode};
pub use noise::{NoiseConfig, NoiseNode};
pub use silence::{SilenceConfig, SilenceNode};
pub use sine::{SineConfig, SineNode};
pub use stretch::{StretchConfig, StretchNode};
pub use time_loop::{LoopConfig, LoopNode};
