//! Environment variable helpers for `{{NAME}}` style substitution.
//!
//! Validates variable names and turns an [`Env`] into a [`VarMap`], where the
//! reserved `NOW` and `VALIDITY` keys carry computed Unix timestamps.

use clap::ValueEnum;

pub mod clock;
pub mod commands;
pub mod display;
pub mod dotenv;
pub mod env;
pub mod error;
pub mod logging;
pub mod shell;
pub mod validation;
pub mod varmap;

pub use clock::{Clock, FixedClock, SystemClock};
pub use env::Env;
pub use error::EnvarsError;
pub use validation::{MAX_NAME_LENGTH, validate_env_name, validate_new_env_name};
pub use varmap::{VarMap, VarValue, to_var_map, to_var_map_at};

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Env,
    Postman,
}
