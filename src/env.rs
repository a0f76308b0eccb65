use serde::{Deserialize, Serialize};

/// One environment's variable set: ordered `(name, value)` pairs.
///
/// Names are expected to be unique, but that is the caller's contract (see
/// [`crate::validation`]); an `Env` holding duplicates is still convertible
/// and the later pair wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    vars: Vec<(String, String)>,
}

impl Env {
    pub fn new(vars: Vec<(String, String)>) -> Self {
        Env { vars }
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    pub fn names(&self) -> Vec<&str> {
        self.vars.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns a new `Env` with `other`'s pairs appended after this one's.
    pub fn chain(&self, other: &Env) -> Env {
        let mut vars = self.vars.clone();
        vars.extend(other.vars.iter().cloned());
        Env { vars }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Env {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
