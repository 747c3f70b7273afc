//! Error types for tag arguments, registries and timing configuration.
//!
//! None of these ever escape [`compile`](crate::compile): markup problems
//! degrade to literal text or default values. They surface only from the
//! explicit APIs that build registries, validate configuration, or parse a
//! single argument strictly.

use thiserror::Error;

use crate::config::CharClass;

/// Errors produced when interpreting a single tag argument.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgError {
    /// The argument was not present on the tag.
    #[error("missing argument: {key}")]
    Missing { key: String },

    /// The argument was present but could not be parsed as the requested type.
    #[error("invalid value {value:?} for argument {key}: expected {expected}")]
    Invalid {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Errors produced while building a [`Registry`](crate::Registry).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// Tag names must be one or more alphanumeric or underscore characters.
    #[error("invalid tag name: {0:?}")]
    InvalidName(String),

    /// The name is already bound to a factory.
    #[error("tag already registered: {0}")]
    Duplicate(String),

    /// The factory's default typing speed has no finite reciprocal.
    #[error("tag {name} has unusable default typing speed {speed}")]
    InvalidSpeed { name: String, speed: f32 },
}

/// Errors produced when validating a [`TimingConfig`](crate::TimingConfig).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Every base duration must be finite and strictly positive.
    #[error("duration for {class:?} must be positive, got {value}")]
    NonPositiveDuration { class: CharClass, value: f32 },

    /// The reveal transition length must be finite and strictly positive.
    #[error("reveal length must be positive, got {0}")]
    NonPositiveReveal(f32),
}
