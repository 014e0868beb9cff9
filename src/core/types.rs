// signature + argument bag types shared by every resolver
use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Zero-based position of a parameter in a callable's signature.
pub type ParamIndex = usize;

/// Position -> value. Both the input and the output of every resolver.
pub type ResolvedParameters<V> = BTreeMap<ParamIndex, V>;

/// Lower-case the name and drop every `-`, so `Dry-Run`, `dry-run` and `dryRun` all
/// collapse to `dryrun`.
pub fn normalize_name(name: &str) -> String {
    name.replace('-', "").to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaredParameter<V> {
    pub name: String,
    pub index: ParamIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<V>,
}

impl<V> DeclaredParameter<V> {
    pub fn new(name: impl Into<String>, index: ParamIndex) -> Self {
        Self { name: name.into(), index, default: None }
    }

    pub fn with_default(mut self, value: V) -> Self {
        self.default = Some(value);
        self
    }
}

/// Ordered description of a callable's parameters, supplied by whoever owns the callable.
///
/// Resolvers never inspect the callable itself; this is all they see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature<V> {
    pub parameters: Vec<DeclaredParameter<V>>,
}

impl<V> Default for Signature<V> {
    fn default() -> Self {
        Self { parameters: Vec::new() }
    }
}

impl<V> Signature<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a signature whose indices follow declaration order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parameters = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| DeclaredParameter::new(name, index))
            .collect();
        Self { parameters }
    }

    /// Append a parameter at the next free position.
    pub fn push(&mut self, name: impl Into<String>) -> ParamIndex {
        let index = self.next_index();
        self.parameters.push(DeclaredParameter::new(name, index));
        index
    }

    /// Append a parameter with a default value at the next free position.
    pub fn push_with_default(&mut self, name: impl Into<String>, value: V) -> ParamIndex {
        let index = self.next_index();
        self.parameters.push(DeclaredParameter::new(name, index).with_default(value));
        index
    }

    fn next_index(&self) -> ParamIndex {
        self.parameters.iter().map(|p| p.index + 1).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeclaredParameter<V>> + '_ {
        self.parameters.iter()
    }

    //true once every declared index has a value
    pub fn is_fully_resolved(&self, resolved: &ResolvedParameters<V>) -> bool {
        self.parameters.iter().all(|p| resolved.contains_key(&p.index))
    }
}

/// Key of a provided argument: a name (any case, possibly hyphenated) or a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentKey {
    Position(ParamIndex),
    Name(String),
}

impl ArgumentKey {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            ArgumentKey::Name(name) => Some(name),
            ArgumentKey::Position(_) => None,
        }
    }

    pub fn as_position(&self) -> Option<ParamIndex> {
        match self {
            ArgumentKey::Position(index) => Some(*index),
            ArgumentKey::Name(_) => None,
        }
    }
}

impl fmt::Display for ArgumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentKey::Name(name) => f.write_str(name),
            ArgumentKey::Position(index) => write!(f, "#{index}"),
        }
    }
}

impl From<&str> for ArgumentKey {
    fn from(name: &str) -> Self {
        ArgumentKey::Name(name.to_string())
    }
}

impl From<String> for ArgumentKey {
    fn from(name: String) -> Self {
        ArgumentKey::Name(name)
    }
}

impl From<ParamIndex> for ArgumentKey {
    fn from(index: ParamIndex) -> Self {
        ArgumentKey::Position(index)
    }
}

/// Insertion-ordered bag of provided arguments.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps its original
/// position, so iteration order is always first-insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvidedParameters<V> {
    entries: IndexMap<ArgumentKey, V>,
}

impl<V> Default for ProvidedParameters<V> {
    fn default() -> Self {
        Self { entries: IndexMap::new() }
    }
}

impl<V> ProvidedParameters<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: IndexMap::with_capacity(capacity) }
    }

    /// Returns the replaced value when the key was already present.
    pub fn insert(&mut self, key: impl Into<ArgumentKey>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &ArgumentKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_named(&self, name: &str) -> Option<&V> {
        self.entries.get(&ArgumentKey::Name(name.to_string()))
    }

    pub fn contains_key(&self, key: &ArgumentKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArgumentKey, &V)> + '_ {
        self.entries.iter()
    }

    pub fn named(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().filter_map(|(k, v)| k.as_name().map(|n| (n, v)))
    }

    pub fn positional(&self) -> impl Iterator<Item = (ParamIndex, &V)> + '_ {
        self.entries.iter().filter_map(|(k, v)| k.as_position().map(|i| (i, v)))
    }
}

impl<K: Into<ArgumentKey>, V> FromIterator<(K, V)> for ProvidedParameters<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut provided = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            provided.insert(key, value);
        }
        provided
    }
}
