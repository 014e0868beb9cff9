// hyphenated / mixed-case name matching
use std::collections::HashMap;

use crate::core::resolver::ParameterResolver;
use crate::core::types::{
    normalize_name, ParamIndex, ProvidedParameters, ResolvedParameters, Signature,
};

/// Maps hyphenated argument names onto similarly named, non-hyphenated parameters.
///
/// An argument `dry-run` fills a parameter declared as `dryrun` or `dryRun`. Matching is
/// done on [`normalize_name`] keys on both sides.
///
/// Rules:
/// 1. If two declared parameters normalize to the same key, the later one wins the lookup.
/// 2. The first provided argument that lands on an index wins; later synonyms are skipped.
/// 3. Indices already present in the incoming mapping are never replaced.
/// 4. Positional arguments and names with no matching parameter are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenatedInputResolver;

impl HyphenatedInputResolver {
    //normalized declared name -> index, last declaration wins on collisions
    fn lookup_table<V>(signature: &Signature<V>) -> HashMap<String, ParamIndex> {
        let mut table = HashMap::with_capacity(signature.len());
        for parameter in signature.iter() {
            table.insert(normalize_name(&parameter.name), parameter.index);
        }
        table
    }
}

impl<V: Clone> ParameterResolver<V> for HyphenatedInputResolver {
    fn get_parameters(
        &self,
        signature: &Signature<V>,
        provided: &ProvidedParameters<V>,
        mut resolved: ResolvedParameters<V>,
    ) -> ResolvedParameters<V> {
        let table = Self::lookup_table(signature);

        for (name, value) in provided.named() {
            //skip arguments that do not exist under the normalized name
            let Some(&index) = table.get(&normalize_name(name)) else {
                continue;
            };

            //skip parameters already resolved
            resolved.entry(index).or_insert_with(|| value.clone());
        }

        resolved
    }
}
