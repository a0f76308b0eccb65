use crate::error::EnvarsError;
use crate::varmap::VarValue;

pub fn print_success(message: &str) {
    tracing::info!("✓ {}", message);
}

pub fn print_warning(message: &str) {
    tracing::warn!("{}", message);
}

/// Render `(key, value)` rows as a two-column table.
pub fn format_var_table(items: &[(&str, &VarValue)]) -> String {
    if items.is_empty() {
        return "No variables\n".to_string();
    }

    let rendered: Vec<(&str, String)> = items.iter().map(|(k, v)| (*k, v.to_string())).collect();
    let key_width = rendered
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(3)
        .max(3);
    let value_width = rendered
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let rule = format!(
        "{:-<width$}-+-{:-<vwidth$}-\n",
        "",
        "",
        width = key_width,
        vwidth = value_width
    );

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&format!(
        " {:^width$} | {:^vwidth$} \n",
        "Key",
        "Value",
        width = key_width,
        vwidth = value_width
    ));
    out.push_str(&rule);
    for (key, value) in &rendered {
        out.push_str(&format!(
            " {:width$} | {:vwidth$} \n",
            key,
            value,
            width = key_width,
            vwidth = value_width
        ));
    }
    out.push_str(&rule);
    out
}

pub fn shell_quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    let needs_quoting = value.chars().any(|c| {
        matches!(
            c,
            ' ' | '\t'
                | '\n'
                | '\r'
                | '"'
                | '\''
                | '\\'
                | '$'
                | '`'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '|'
                | '&'
                | ';'
                | '<'
                | '>'
                | '*'
                | '?'
                | '~'
        )
    });

    if !needs_quoting {
        return value.to_string();
    }

    // Use single quotes and escape any single quotes in the value
    let escaped = value.replace('\'', "'\"'\"'");
    format!("'{}'", escaped)
}

pub fn format_json_output<T: serde::Serialize>(data: &T) -> Result<String, EnvarsError> {
    Ok(serde_json::to_string_pretty(data)?)
}
