use crate::core::types::{ProvidedParameters, ResolvedParameters, Signature};

/// One strategy for filling a callable's parameters from a provided argument bag.
///
/// Implementations receive the mapping produced by the strategies that ran before them
/// and return it augmented. They must never replace an index that is already present,
/// and they report nothing for arguments they cannot place.
pub trait ParameterResolver<V>: Send + Sync {
    fn get_parameters(
        &self,
        signature: &Signature<V>,
        provided: &ProvidedParameters<V>,
        resolved: ResolvedParameters<V>,
    ) -> ResolvedParameters<V>;
}

