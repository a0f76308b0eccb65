/// Names must be strictly shorter than this many UTF-16 code units.
pub const MAX_NAME_LENGTH: usize = 16;

/// Name length in UTF-16 code units, the unit the UI measures names in.
fn name_length(name: &str) -> usize {
    name.encode_utf16().count()
}

/// Validate a name that is about to be added.
///
/// Accepts names of 1 to 15 UTF-16 code units that are not already in
/// `name_list`.
pub fn validate_new_env_name<S: AsRef<str>>(name: &str, name_list: &[S]) -> bool {
    let len = name_length(name);
    len > 0 && len < MAX_NAME_LENGTH && !name_list.iter().any(|n| n.as_ref() == name)
}

/// Validate a rename. Keeping the current name is always allowed, even
/// though `name_list` normally contains it.
pub fn validate_env_name<S: AsRef<str>>(new_name: &str, current_name: &str, name_list: &[S]) -> bool {
    current_name == new_name || validate_new_env_name(new_name, name_list)
}

/// Explains why [`validate_new_env_name`] rejected `name`, or `None` if it
/// would accept it.
pub fn name_rejection<S: AsRef<str>>(name: &str, name_list: &[S]) -> Option<String> {
    let len = name_length(name);
    if len == 0 {
        Some("name cannot be empty".to_string())
    } else if len >= MAX_NAME_LENGTH {
        Some(format!(
            "'{}' is {} UTF-16 units long (maximum is {})",
            name,
            len,
            MAX_NAME_LENGTH - 1
        ))
    } else if name_list.iter().any(|n| n.as_ref() == name) {
        Some(format!("'{}' is already in use", name))
    } else {
        None
    }
}

/// Validate environment variable key naming for shells and process envs.
/// Pattern: [A-Za-z_][A-Za-z0-9_]*
pub fn is_valid_env_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
