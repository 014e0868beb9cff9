use crate::core::resolver::ParameterResolver;
use crate::core::types::{ProvidedParameters, ResolvedParameters, Signature};

/// Falls back to a parameter's declared default when nothing else resolved it.
///
/// Usually the last link of a chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueResolver;

impl<V: Clone> ParameterResolver<V> for DefaultValueResolver {
    fn get_parameters(
        &self,
        signature: &Signature<V>,
        _provided: &ProvidedParameters<V>,
        mut resolved: ResolvedParameters<V>,
    ) -> ResolvedParameters<V> {
        for parameter in signature.iter() {
            let Some(default) = &parameter.default else {
                continue;
            };
            resolved.entry(parameter.index).or_insert_with(|| default.clone());
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_only_missing_parameters() {
        let mut sig = Signature::new();
        sig.push_with_default("verbose", 0);
        sig.push_with_default("retries", 3);
        sig.push("path");

        let out = DefaultValueResolver.get_parameters(
            &sig,
            &ProvidedParameters::new(),
            ResolvedParameters::from([(0, 2)]),
        );

        //path has no default and stays unresolved
        assert_eq!(out, ResolvedParameters::from([(0, 2), (1, 3)]));
    }
}
