//! Standard library answerers for quip
//!
//! The built-in answerer families that work out of the box:
//! - `random`: random strings, integers, floats, ports, digests, UUIDs and colors
//! - `min`/`max`/`avg`/`sum`/`prod`: statistics over locale-formatted numbers
//! - `dice`: dice rolls in `XdY` notation
//! - `base`: number base conversion between bases 2 and 64

pub mod base;
pub mod dice;
pub mod random;
pub mod statistics;

pub use base::{convert, BaseConvertAnswerer, ConvertError};
pub use dice::{roll_dice, DiceSpec};
pub use random::{generate, RandomAnswerer, RandomValueKind};
pub use statistics::{compute, StatFunction, StatisticsAnswerer};

use quip_core::Config;
use quip_plugin::AnswererRegistry;
use tracing::debug;

/// A registry holding every built-in answerer enabled in `config`.
pub fn standard_registry(config: &Config) -> AnswererRegistry {
    let mut registry = AnswererRegistry::new();

    if config.answerers.random {
        registry.register(RandomAnswerer::new());
    }
    if config.answerers.statistics {
        registry.register(StatisticsAnswerer::new(config.dice.max_rolls));
    }
    if config.answerers.base {
        registry.register(BaseConvertAnswerer::new());
    }

    debug!(count = registry.get_count(), "standard answerers registered");
    registry
}
