//! Literal coercion for template function registries.
//!
//! `augment` takes a [`FuncMap`] and returns a new one in which every
//! numeric-sensitive function resolves [`litcast_core::NumericLiteral`]
//! arguments before running, and the comparison built-ins compare literals
//! by value.

pub mod args;
pub mod attrs;
pub mod augment;
pub mod compare;
pub mod config;
pub mod context;
pub mod function;
pub mod relational;
pub mod resolve;
pub mod signature;
pub mod wrap;

pub use attrs::Attributes;
pub use augment::{augment, augment_with, is_numeric_sensitive};
pub use config::{AugmentConfig, ConfigError};
pub use context::{guess_context, guess_group, guess_groups, ArgumentContext};
pub use function::{set_default_registrar, FuncMap, Function, NativeFn, Output, Param};
pub use relational::{relational_adapters, RELATIONAL_NAMES};
pub use resolve::{convert_literal, convert_value};
pub use signature::FunctionSignature;
pub use wrap::{build_wrapper, CallArgs};
