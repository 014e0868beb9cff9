use crate::core::resolver::ParameterResolver;
use crate::core::types::{ProvidedParameters, ResolvedParameters, Signature};

/// Fills parameters whose declared name appears verbatim as a provided argument name.
///
/// Matching is exact and case-sensitive; loose matching is [`HyphenatedInputResolver`]'s job.
///
/// [`HyphenatedInputResolver`]: crate::core::hyphenated::HyphenatedInputResolver
#[derive(Debug, Clone, Copy, Default)]
pub struct AssociativeArrayResolver;

impl<V: Clone> ParameterResolver<V> for AssociativeArrayResolver {
    fn get_parameters(
        &self,
        signature: &Signature<V>,
        provided: &ProvidedParameters<V>,
        mut resolved: ResolvedParameters<V>,
    ) -> ResolvedParameters<V> {
        for parameter in signature.iter() {
            if resolved.contains_key(&parameter.index) {
                continue;
            }
            if let Some(value) = provided.get_named(&parameter.name) {
                resolved.insert(parameter.index, value.clone());
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_resolve() {
        let sig = Signature::from_names(["name", "force"]);
        let provided: ProvidedParameters<&str> =
            [("force", "yes"), ("name", "world")].into_iter().collect();

        let out = AssociativeArrayResolver.get_parameters(&sig, &provided, ResolvedParameters::new());

        assert_eq!(out, ResolvedParameters::from([(0, "world"), (1, "yes")]));
    }

    #[test]
    fn case_and_hyphens_must_match_exactly() {
        let sig = Signature::from_names(["dryRun"]);
        let provided: ProvidedParameters<bool> =
            [("dry-run", true), ("DRYRUN", true)].into_iter().collect();

        let out = AssociativeArrayResolver.get_parameters(&sig, &provided, ResolvedParameters::new());

        assert!(out.is_empty());
    }

    #[test]
    fn keeps_existing_values() {
        let sig = Signature::from_names(["force"]);
        let provided: ProvidedParameters<bool> = [("force", false)].into_iter().collect();

        let out = AssociativeArrayResolver.get_parameters(
            &sig,
            &provided,
            ResolvedParameters::from([(0, true)]),
        );

        assert_eq!(out.get(&0), Some(&true));
    }
}
