pub mod associative;
pub mod chain;
pub mod default_value;
pub mod hyphenated;
pub mod numeric;
pub mod resolver;
pub mod types;
