use crate::OutputFormat;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::commands::template::CommandTemplate;
use crate::display::{format_json_output, format_var_table, print_warning};
use crate::dotenv::{load_env_file, parse_pair};
use crate::env::Env;
use crate::error::EnvarsError;
use crate::shell::{Shell, detect_shell};
use crate::validation::{is_valid_env_key, name_rejection, validate_new_env_name};
use crate::varmap::{VarMap, VarValue, to_var_map};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct PostmanEnvironmentVariable {
    key: String,
    value: String,
    #[serde(rename = "type")]
    var_type: String,
    enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct PostmanEnvironment {
    id: String,
    name: String,
    values: Vec<PostmanEnvironmentVariable>,
    #[serde(rename = "_postman_variable_scope")]
    postman_variable_scope: String,
    #[serde(rename = "_postman_exported_at")]
    postman_exported_at: String,
    #[serde(rename = "_postman_exported_using")]
    postman_exported_using: String,
}

/// Arguments for the resolve command
#[derive(Debug)]
pub struct ResolveArgs {
    pub file: Option<PathBuf>,
    /// Raw `KEY=VALUE` pairs, applied after the file
    pub vars: Vec<String>,
    /// Pins the clock to this Unix time in seconds
    pub now: Option<i64>,
    pub strict: bool,
    pub name: String,
}

#[derive(Debug)]
pub struct ResolveOutput {
    pub name: String,
    pub map: VarMap,
}

impl ResolveOutput {
    fn sorted(&self) -> BTreeMap<&str, &VarValue> {
        self.map.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}

pub struct ResolveCommand;

impl CommandTemplate for ResolveCommand {
    type Args = ResolveArgs;
    type Output = ResolveOutput;

    fn validate_args(&self, args: &Self::Args) -> Result<(), EnvarsError> {
        for raw in &args.vars {
            parse_var(raw)?;
        }
        Ok(())
    }

    fn execute_operation(&self, args: Self::Args) -> Result<Self::Output, EnvarsError> {
        let env = build_env(args.file.as_ref(), &args.vars)?;

        if args.strict {
            check_unique_names(&env)?;
        }

        let map = match args.now {
            Some(secs) => to_var_map(&env, FixedClock::from_secs(secs)),
            None => to_var_map(&env, SystemClock),
        };
        tracing::debug!("Resolved {} variables", map.len());

        Ok(ResolveOutput {
            name: args.name,
            map,
        })
    }

    fn format_output(&self, output: Self::Output, format: &OutputFormat) -> Result<(), EnvarsError> {
        let rendered = render(&output, format, detect_shell(), &SystemClock)?;
        print!("{}", rendered);
        Ok(())
    }
}

fn build_env(file: Option<&PathBuf>, vars: &[String]) -> Result<Env, EnvarsError> {
    let base = match file {
        Some(path) => load_env_file(path)?,
        None => Env::default(),
    };

    let extra = vars
        .iter()
        .map(|raw| parse_var(raw))
        .collect::<Result<Env, _>>()?;

    Ok(base.chain(&extra))
}

fn parse_var(raw: &str) -> Result<(String, String), EnvarsError> {
    parse_pair(raw).map_err(|msg| EnvarsError::Parse(format!("--var '{}': {}", raw, msg)))
}

/// Rejects the first name that `validate_new_env_name` refuses given the
/// names before it.
pub fn check_unique_names(env: &Env) -> Result<(), EnvarsError> {
    let mut seen: Vec<&str> = Vec::with_capacity(env.len());
    for name in env.names() {
        if !validate_new_env_name(name, &seen) {
            let reason = name_rejection(name, &seen)
                .unwrap_or_else(|| format!("'{}' is not allowed", name));
            return Err(EnvarsError::InvalidName(reason));
        }
        seen.push(name);
    }
    Ok(())
}

fn render<C: Clock>(
    output: &ResolveOutput,
    format: &OutputFormat,
    shell: Shell,
    clock: &C,
) -> Result<String, EnvarsError> {
    let sorted = output.sorted();

    let rendered = match format {
        OutputFormat::Table => {
            let rows: Vec<(&str, &VarValue)> = sorted.into_iter().collect();
            format_var_table(&rows)
        }
        OutputFormat::Json => format!("{}\n", format_json_output(&sorted)?),
        OutputFormat::Env => {
            let mut out = String::new();
            for (key, value) in sorted {
                if !is_valid_env_key(key) {
                    print_warning(&format!("Skipping invalid environment key: {}", key));
                    continue;
                }
                out.push_str(&shell.export_line(key, &value.to_string()));
                out.push('\n');
            }
            out
        }
        OutputFormat::Postman => {
            let exported_at = chrono::DateTime::from_timestamp_millis(clock.now_millis())
                .unwrap_or_default()
                .to_rfc3339();
            let postman_env = PostmanEnvironment {
                id: uuid::Uuid::new_v4().to_string(),
                name: output.name.clone(),
                values: sorted
                    .into_iter()
                    .map(|(key, value)| PostmanEnvironmentVariable {
                        key: key.to_string(),
                        value: value.to_string(),
                        var_type: "default".to_string(),
                        enabled: true,
                    })
                    .collect(),
                postman_variable_scope: "environment".to_string(),
                postman_exported_at: exported_at,
                postman_exported_using: "envars".to_string(),
            };
            format!("{}\n", serde_json::to_string_pretty(&postman_env)?)
        }
    };

    Ok(rendered)
}

/// Resolve variables from a file and/or command line pairs and print them
pub fn resolve(
    format: &OutputFormat,
    file: Option<PathBuf>,
    vars: Vec<String>,
    now: Option<i64>,
    strict: bool,
    name: &str,
) -> Result<(), EnvarsError> {
    let command = ResolveCommand;
    let args = ResolveArgs {
        file,
        vars,
        now,
        strict,
        name: name.to_string(),
    };

    command.execute(format, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const T: i64 = 1_700_000_000;

    fn args(vars: &[&str]) -> ResolveArgs {
        ResolveArgs {
            file: None,
            vars: vars.iter().map(|s| s.to_string()).collect(),
            now: Some(T),
            strict: false,
            name: "test".to_string(),
        }
    }

    fn output(vars: &[&str]) -> ResolveOutput {
        ResolveCommand.execute_operation(args(vars)).unwrap()
    }

    #[test]
    fn test_resolve_pins_clock() {
        let out = output(&["NOW=x", "VALIDITY=y", "HOST=example.com"]);
        assert_eq!(out.map["NOW"], VarValue::Number(T));
        assert_eq!(out.map["VALIDITY"], VarValue::Number(T + 28_800));
        assert_eq!(out.map["HOST"], VarValue::from("example.com"));
    }

    #[test]
    fn test_cli_vars_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "HOST=from-file").unwrap();
        writeln!(file, "PORT=8080").unwrap();

        let mut a = args(&["HOST=from-cli"]);
        a.file = Some(file.path().to_path_buf());
        let out = ResolveCommand.execute_operation(a).unwrap();

        assert_eq!(out.map["HOST"], VarValue::from("from-cli"));
        assert_eq!(out.map["PORT"], VarValue::from("8080"));
    }

    #[test]
    fn test_validate_args_rejects_bad_var() {
        let err = ResolveCommand.validate_args(&args(&["NOEQUALS"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: --var 'NOEQUALS': expected KEY=VALUE"
        );
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let mut a = args(&["A=1", "A=2"]);
        a.strict = true;
        let err = ResolveCommand.execute_operation(a).unwrap_err();
        assert_eq!(err.to_string(), "Invalid name: 'A' is already in use");
    }

    #[test]
    fn test_non_strict_keeps_last_value() {
        let out = output(&["A=1", "A=2"]);
        assert_eq!(out.map["A"], VarValue::from("2"));
    }

    #[test]
    fn test_check_unique_names() {
        let ok: Env = [("A", "1"), ("B", "2")].into_iter().collect();
        assert!(check_unique_names(&ok).is_ok());
        assert!(check_unique_names(&Env::default()).is_ok());

        let long: Env = [("SIXTEEN_CHARS_XX", "1")].into_iter().collect();
        assert!(matches!(
            check_unique_names(&long),
            Err(EnvarsError::InvalidName(_))
        ));
    }

    #[test]
    fn test_render_json_sorted() {
        let out = output(&["NOW=", "B=2", "A=1"]);
        let json = render(&out, &OutputFormat::Json, Shell::Posix, &FixedClock::from_secs(T)).unwrap();
        let expected = format!("{{\n  \"A\": \"1\",\n  \"B\": \"2\",\n  \"NOW\": {}\n}}\n", T);
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_env_skips_invalid_keys() {
        let out = output(&["my-key=1", "HOST=a b", "NOW="]);
        let env = render(&out, &OutputFormat::Env, Shell::Posix, &FixedClock::from_secs(T)).unwrap();
        assert_eq!(env, format!("export HOST='a b'\nexport NOW={}\n", T));
    }

    #[test]
    fn test_render_table_empty() {
        let out = output(&[]);
        let table = render(&out, &OutputFormat::Table, Shell::Posix, &FixedClock::from_secs(T)).unwrap();
        assert_eq!(table, "No variables\n");
    }

    #[test]
    fn test_render_postman() {
        let out = output(&["VALIDITY=", "TOKEN=abc"]);
        let rendered =
            render(&out, &OutputFormat::Postman, Shell::Posix, &FixedClock::from_secs(T)).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(doc["name"], "test");
        assert_eq!(doc["_postman_variable_scope"], "environment");
        assert_eq!(doc["_postman_exported_at"], "2023-11-14T22:13:20+00:00");
        assert_eq!(doc["values"][0]["key"], "TOKEN");
        assert_eq!(doc["values"][0]["value"], "abc");
        assert_eq!(doc["values"][1]["key"], "VALIDITY");
        assert_eq!(doc["values"][1]["value"], (T + 28_800).to_string());
        assert_eq!(doc["values"][1]["type"], "default");
        assert!(uuid::Uuid::parse_str(doc["id"].as_str().unwrap()).is_ok());
    }
}
