// ordered composition of resolvers
use std::fmt;

use crate::core::associative::AssociativeArrayResolver;
use crate::core::default_value::DefaultValueResolver;
use crate::core::hyphenated::HyphenatedInputResolver;
use crate::core::numeric::NumericArrayResolver;
use crate::core::resolver::ParameterResolver;
use crate::core::types::{ProvidedParameters, ResolvedParameters, Signature};
use crate::mapping::config::{ChainConfig, ResolverKind};

struct Stage<V> {
    label: &'static str,
    resolver: Box<dyn ParameterResolver<V>>,
}

/// Runs resolvers in order, feeding each one the mapping produced by the previous one.
///
/// The first resolver always runs. After each one the chain stops if every declared
/// parameter has a value, so later (usually more lenient) resolvers only see what earlier
/// ones could not place.
pub struct ResolverChain<V> {
    stages: Vec<Stage<V>>,
}

impl<V> Default for ResolverChain<V> {
    fn default() -> Self {
        Self { stages: Vec::new() }
    }
}

impl<V> fmt::Debug for ResolverChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stages.iter().map(|s| s.label)).finish()
    }
}

impl<V> ResolverChain<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver; it runs after everything already in the chain.
    pub fn push<R>(&mut self, resolver: R) -> &mut Self
    where
        R: ParameterResolver<V> + 'static,
    {
        self.stages.push(Stage { label: short_type_name::<R>(), resolver: Box::new(resolver) });
        self
    }

    /// Insert a resolver at the front; it runs before everything already in the chain.
    pub fn prepend<R>(&mut self, resolver: R) -> &mut Self
    where
        R: ParameterResolver<V> + 'static,
    {
        self.stages.insert(0, Stage { label: short_type_name::<R>(), resolver: Box::new(resolver) });
        self
    }

    pub fn with<R>(mut self, resolver: R) -> Self
    where
        R: ParameterResolver<V> + 'static,
    {
        self.push(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.label)
    }

    /// Run the whole chain starting from an empty mapping.
    pub fn resolve_arguments(
        &self,
        signature: &Signature<V>,
        provided: &ProvidedParameters<V>,
    ) -> ResolvedParameters<V> {
        self.get_parameters(signature, provided, ResolvedParameters::new())
    }
}

impl<V: Clone + 'static> ResolverChain<V> {
    /// Build a chain from configured resolver kinds, in configured order.
    pub fn from_config(config: &ChainConfig) -> Self {
        let mut chain = Self::new();
        for kind in &config.resolvers {
            match kind {
                ResolverKind::Associative => chain.push(AssociativeArrayResolver),
                ResolverKind::Hyphenated => chain.push(HyphenatedInputResolver),
                ResolverKind::NumericArray => chain.push(NumericArrayResolver),
                ResolverKind::DefaultValue => chain.push(DefaultValueResolver),
            };
        }
        chain
    }
}

impl<V> ParameterResolver<V> for ResolverChain<V> {
    fn get_parameters(
        &self,
        signature: &Signature<V>,
        provided: &ProvidedParameters<V>,
        mut resolved: ResolvedParameters<V>,
    ) -> ResolvedParameters<V> {
        for stage in &self.stages {
            let before = resolved.len();
            resolved = stage.resolver.get_parameters(signature, provided, resolved);
            tracing::trace!(
                stage = stage.label,
                added = resolved.len().saturating_sub(before),
                total = resolved.len(),
                "resolver stage finished"
            );

            if signature.is_fully_resolved(&resolved) {
                tracing::trace!(stage = stage.label, "all parameters resolved, stopping chain");
                break;
            }
        }
        resolved
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
