use regex::Regex;

/// A bypass predicate with its configuration baked in.
///
/// Path and method tokens are stored lowercased.
#[derive(Debug, Clone)]
pub enum Decider {
    Path(Vec<String>),
    Method(Vec<String>),
    Cookie(Vec<Regex>),
}
