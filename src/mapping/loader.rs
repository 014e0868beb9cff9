//! TOON documents describing signatures, argument bags and chain configs.
//!
//! Signature:
//!
//! ```text
//! parameters[2]{name,index}:
//!   dryRun,0
//!   force,1
//! ```
//!
//! Argument bag (keys made only of ASCII digits are positional):
//!
//! ```text
//! "dry-run": true
//! force: false
//! ```
//!
//! Chain config:
//!
//! ```text
//! resolvers[2]: hyphenated,default_value
//! ```
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::core::types::{ArgumentKey, ParamIndex, ProvidedParameters, Signature};
use crate::mapping::config::ChainConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOON document: {0}")]
    Toon(String),

    #[error("document does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("argument bag must be a key/value object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("parameter index {index} is declared more than once")]
    DuplicateIndex { index: ParamIndex },
}

pub fn read_document(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading document");
    std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

fn decode_value(text: &str) -> Result<Value, LoadError> {
    let value: Value = toon_format::decode_default(text).map_err(|e| LoadError::Toon(e.to_string()))?;
    Ok(value)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, LoadError> {
    Ok(serde_json::from_value(decode_value(text)?)?)
}

/// Decode a signature; every declared index must be unique.
pub fn load_signature(text: &str) -> Result<Signature<Value>, LoadError> {
    let signature: Signature<Value> = decode(text)?;

    let mut seen = HashSet::with_capacity(signature.len());
    for parameter in signature.iter() {
        if !seen.insert(parameter.index) {
            return Err(LoadError::DuplicateIndex { index: parameter.index });
        }
    }

    tracing::debug!(parameters = signature.len(), "loaded signature");
    Ok(signature)
}

pub fn load_chain_config(text: &str) -> Result<ChainConfig, LoadError> {
    let config: ChainConfig = decode(text)?;
    tracing::debug!(resolvers = ?config.resolvers, "loaded chain config");
    Ok(config)
}

/// Decode an argument bag, keeping document order.
pub fn load_arguments(text: &str) -> Result<ProvidedParameters<Value>, LoadError> {
    let object = match decode_value(text)? {
        Value::Object(map) => map,
        other => return Err(LoadError::NotAnObject { found: json_kind(&other) }),
    };

    let provided: ProvidedParameters<Value> =
        object.into_iter().map(|(key, value)| (argument_key(key), value)).collect();

    tracing::debug!(arguments = provided.len(), "loaded argument bag");
    Ok(provided)
}

pub fn load_signature_file(path: impl AsRef<Path>) -> Result<Signature<Value>, LoadError> {
    load_signature(&read_document(path)?)
}

pub fn load_chain_config_file(path: impl AsRef<Path>) -> Result<ChainConfig, LoadError> {
    load_chain_config(&read_document(path)?)
}

pub fn load_arguments_file(path: impl AsRef<Path>) -> Result<ProvidedParameters<Value>, LoadError> {
    load_arguments(&read_document(path)?)
}

fn argument_key(key: String) -> ArgumentKey {
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(index) = key.parse::<ParamIndex>() {
            return ArgumentKey::Position(index);
        }
    }
    ArgumentKey::Name(key)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chain::ResolverChain;
    use crate::core::hyphenated::HyphenatedInputResolver;
    use crate::core::resolver::ParameterResolver;
    use crate::core::types::ResolvedParameters;
    use crate::mapping::config::ResolverKind;

    const SIGNATURE: &str = "parameters[2]{name,index}:\n  dryRun,0\n  force,1\n";

    #[test]
    fn signature_document_loads_in_order() {
        let sig = load_signature(SIGNATURE).unwrap();
        let names: Vec<(&str, ParamIndex)> = sig.iter().map(|p| (p.name.as_str(), p.index)).collect();
        assert_eq!(names, vec![("dryRun", 0), ("force", 1)]);
        assert!(sig.iter().all(|p| p.default.is_none()));
    }

    #[test]
    fn duplicate_indices_are_rejected() {
        let err = load_signature("parameters[2]{name,index}:\n  a,0\n  b,0\n").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateIndex { index: 0 }), "unexpected error: {err}");
    }

    #[test]
    fn chain_config_document_loads() {
        let cfg = load_chain_config("resolvers[2]: hyphenated,default_value\n").unwrap();
        assert_eq!(cfg.resolvers, vec![ResolverKind::Hyphenated, ResolverKind::DefaultValue]);
    }

    #[test]
    fn unknown_resolver_kind_is_a_shape_error() {
        let err = load_chain_config("resolvers[1]: reflection\n").unwrap_err();
        assert!(matches!(err, LoadError::Shape(_)), "unexpected error: {err}");
    }

    #[test]
    fn argument_document_resolves_end_to_end() {
        let sig = load_signature(SIGNATURE).unwrap();
        let provided = load_arguments("\"dry-run\": true\nforce: false\n").unwrap();

        let out = HyphenatedInputResolver.get_parameters(&sig, &provided, ResolvedParameters::new());

        assert_eq!(out, ResolvedParameters::from([(0, Value::Bool(true)), (1, Value::Bool(false))]));
    }

    #[test]
    fn argument_document_keeps_order_and_positions() {
        let provided = load_arguments("\"dry-run\": first\ndryRun: second\n\"1\": 5\n").unwrap();

        let keys: Vec<String> = provided.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["dry-run", "dryRun", "#1"]);

        let chain: ResolverChain<Value> = ResolverChain::from_config(&ChainConfig {
            resolvers: vec![ResolverKind::Hyphenated, ResolverKind::NumericArray],
        });
        let out = chain.resolve_arguments(&load_signature(SIGNATURE).unwrap(), &provided);

        assert_eq!(out.get(&0), Some(&Value::String("first".to_string())));
        assert_eq!(out.get(&1).and_then(Value::as_f64), Some(5.0));
    }

    #[test]
    fn positional_keys_need_only_digits() {
        assert_eq!(argument_key("12".to_string()), ArgumentKey::Position(12));
        assert_eq!(argument_key("-1".to_string()), ArgumentKey::Name("-1".to_string()));
        assert_eq!(argument_key("".to_string()), ArgumentKey::Name(String::new()));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_document("/nonexistent/signature.toon").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/signature.toon"));
    }
}
