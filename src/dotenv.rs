use crate::env::Env;
use crate::error::EnvarsError;
use std::fs;
use std::io;
use std::path::Path;

/// Parse `.env` style text into an [`Env`], keeping order and duplicates.
pub fn parse_env(content: &str) -> Result<Env, EnvarsError> {
    let mut vars = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = parse_pair(line)
            .map_err(|msg| EnvarsError::Parse(format!("{} on line {}", msg, line_num + 1)))?;
        vars.push((key, value));
    }

    Ok(Env::new(vars))
}

/// Parse a single `KEY=VALUE` pair.
pub fn parse_pair(input: &str) -> Result<(String, String), String> {
    let Some(eq_pos) = input.find('=') else {
        return Err("expected KEY=VALUE".to_string());
    };

    let key = input[..eq_pos].trim();
    if key.is_empty() {
        return Err("empty key".to_string());
    }

    Ok((key.to_string(), unquote(input[eq_pos + 1..].trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

pub fn load_env_file(path: &Path) -> Result<Env, EnvarsError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EnvarsError::FileNotFound(path.display().to_string())
        } else {
            EnvarsError::Io(e)
        }
    })?;

    let env = parse_env(&content)?;
    tracing::debug!("Loaded {} variables from {}", env.len(), path.display());
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let env = parse_env("# header\n\nHOST=localhost\n  # indented\nPORT = 8080\n").unwrap();
        assert_eq!(
            env.vars(),
            &[
                ("HOST".to_string(), "localhost".to_string()),
                ("PORT".to_string(), "8080".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_strips_one_layer_of_quotes() {
        let env = parse_env("A=\"quoted value\"\nB='single'\nC=\"\nD=\"'mixed'\"").unwrap();
        assert_eq!(env.get("A"), Some("quoted value"));
        assert_eq!(env.get("B"), Some("single"));
        assert_eq!(env.get("C"), Some("\""));
        assert_eq!(env.get("D"), Some("'mixed'"));
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let env = parse_env("URL=https://x.test/?a=b").unwrap();
        assert_eq!(env.get("URL"), Some("https://x.test/?a=b"));
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let env = parse_env("A=1\nA=2").unwrap();
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = parse_env("A=1\nnot a pair").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: expected KEY=VALUE on line 2");

        let err = parse_env("=value").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: empty key on line 1");
    }

    #[test]
    fn test_load_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOW=placeholder").unwrap();
        writeln!(file, "TOKEN=abc").unwrap();

        let env = load_env_file(file.path()).unwrap();
        assert_eq!(env.names(), vec!["NOW", "TOKEN"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.env");
        assert!(matches!(
            load_env_file(&missing),
            Err(EnvarsError::FileNotFound(_))
        ));
    }
}
