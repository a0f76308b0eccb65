use crate::clock::{Clock, SystemClock};
use crate::env::Env;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Replaced with the current Unix time in seconds.
pub const NOW_KEY: &str = "NOW";
/// Replaced with the current Unix time plus [`VALIDITY_WINDOW_SECS`].
pub const VALIDITY_KEY: &str = "VALIDITY";
pub const VALIDITY_WINDOW_SECS: i64 = 60 * 60 * 8;

/// Value handed to the substitution engine: the original string, or a
/// computed timestamp for the reserved keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    Number(i64),
    Text(String),
}

impl VarValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VarValue::Text(s) => Some(s),
            VarValue::Number(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            VarValue::Number(n) => Some(*n),
            VarValue::Text(_) => None,
        }
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VarValue::Number(n) => write!(f, "{}", n),
            VarValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Text(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Text(value)
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Number(value)
    }
}

pub type VarMap = HashMap<String, VarValue>;

/// Converts `env` into a variable map, reading the time once from `clock`.
pub fn to_var_map<C: Clock>(env: &Env, clock: C) -> VarMap {
    to_var_map_at(env, clock.now_secs())
}

/// Converts `env` into a variable map using `now_secs` as the current time.
///
/// `NOW` becomes `now_secs`, `VALIDITY` becomes `now_secs` plus eight hours,
/// everything else keeps its string value. Later pairs overwrite earlier
/// pairs with the same name.
pub fn to_var_map_at(env: &Env, now_secs: i64) -> VarMap {
    let expires = now_secs.saturating_add(VALIDITY_WINDOW_SECS);
    let mut map = VarMap::with_capacity(env.len());

    for (name, value) in env.vars() {
        let value = match name.as_str() {
            NOW_KEY => VarValue::Number(now_secs),
            VALIDITY_KEY => VarValue::Number(expires),
            _ => VarValue::Text(value.clone()),
        };
        if map.insert(name.clone(), value).is_some() {
            tracing::debug!("Duplicate variable '{}', keeping the later value", name);
        }
    }

    map
}

impl Env {
    /// Converts this environment using the system clock.
    pub fn to_var_map(&self) -> VarMap {
        to_var_map(self, SystemClock)
    }
}
