//! Parameter resolution for invoking callables with a loosely typed argument bag.
//!
//! A callable describes its parameters as a [`Signature`]. Resolvers take the provided
//! arguments and fill a [`ResolvedParameters`] map (position -> value), each one adding
//! what it can match and never replacing what an earlier resolver already set.

pub mod core;
pub mod mapping;

pub use crate::core::associative::AssociativeArrayResolver;
pub use crate::core::chain::ResolverChain;
pub use crate::core::default_value::DefaultValueResolver;
pub use crate::core::hyphenated::HyphenatedInputResolver;
pub use crate::core::numeric::NumericArrayResolver;
pub use crate::core::resolver::ParameterResolver;
pub use crate::core::types::{
    normalize_name, ArgumentKey, DeclaredParameter, ParamIndex, ProvidedParameters,
    ResolvedParameters, Signature,
};
pub use crate::mapping::config::{ChainConfig, ResolverKind};
pub use crate::mapping::loader::LoadError;
