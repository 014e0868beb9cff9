use serde::{Deserialize, Serialize};

/// Resolver strategies a chain can be assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    Associative,
    Hyphenated,
    NumericArray,
    DefaultValue,
}

/// Which resolvers run, and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "ChainConfig::default_resolvers")]
    pub resolvers: Vec<ResolverKind>,
}

impl ChainConfig {
    //exact names first, then loose names, then positions, defaults last
    fn default_resolvers() -> Vec<ResolverKind> {
        vec![
            ResolverKind::Associative,
            ResolverKind::Hyphenated,
            ResolverKind::NumericArray,
            ResolverKind::DefaultValue,
        ]
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { resolvers: Self::default_resolvers() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_use_snake_case_names() {
        let kinds: Vec<ResolverKind> =
            serde_json::from_str(r#"["hyphenated","numeric_array","default_value"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![ResolverKind::Hyphenated, ResolverKind::NumericArray, ResolverKind::DefaultValue]
        );
    }

    #[test]
    fn missing_resolvers_fall_back_to_default_order() {
        let cfg: ChainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ChainConfig::default());
    }
}
