use crate::core::resolver::ParameterResolver;
use crate::core::types::{ProvidedParameters, ResolvedParameters, Signature};

/// Places positional arguments at the index they were given for.
///
/// Indices that are already resolved keep their value. The signature is not consulted, so
/// a position past the last declared parameter is still carried through.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericArrayResolver;

impl<V: Clone> ParameterResolver<V> for NumericArrayResolver {
    fn get_parameters(
        &self,
        _signature: &Signature<V>,
        provided: &ProvidedParameters<V>,
        mut resolved: ResolvedParameters<V>,
    ) -> ResolvedParameters<V> {
        for (index, value) in provided.positional() {
            resolved.entry(index).or_insert_with(|| value.clone());
        }
        resolved
    }
}
