use crate::display::shell_quote;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Posix,
    Fish,
    Nu,
    Csh,
    PowerShell,
    Cmd,
}

impl Shell {
    pub fn from_name(name: &str) -> Shell {
        match name.to_lowercase().as_str() {
            "fish" => Shell::Fish,
            "nu" => Shell::Nu,
            "csh" | "tcsh" => Shell::Csh,
            "powershell" | "pwsh" => Shell::PowerShell,
            "cmd" => Shell::Cmd,
            _ => Shell::Posix,
        }
    }

    /// Line that sets `key` to `value` in this shell.
    pub fn export_line(&self, key: &str, value: &str) -> String {
        match self {
            Shell::Fish => format!("set -x {} {}", key, shell_quote(value)),
            Shell::PowerShell => format!("$env:{} = {}", key, shell_quote(value)),
            // cmd doesn't need quoting like Unix
            Shell::Cmd => format!("set {}={}", key, value),
            Shell::Csh => format!("setenv {} {}", key, shell_quote(value)),
            Shell::Nu => format!("let-env {} = {}", key, shell_quote(value)),
            Shell::Posix => format!("export {}={}", key, shell_quote(value)),
        }
    }
}

fn current_shell_name() -> String {
    if std::env::var("BASH_VERSION").is_ok() || std::env::var("BASH").is_ok() {
        return "bash".to_string();
    }
    if std::env::var("ZSH_VERSION").is_ok() {
        return "zsh".to_string();
    }
    if std::env::var("FISH_VERSION").is_ok() {
        return "fish".to_string();
    }
    if std::env::var("NU_VERSION").is_ok() {
        return "nu".to_string();
    }

    // Parent process name, Linux only
    #[cfg(target_os = "linux")]
    {
        if let Ok(stat_content) = std::fs::read_to_string("/proc/self/stat") {
            let fields: Vec<&str> = stat_content.split_whitespace().collect();
            if fields.len() > 3
                && let Ok(ppid) = fields[3].parse::<u32>()
                && let Ok(parent_name) = std::fs::read_to_string(format!("/proc/{}/comm", ppid))
            {
                let parent_name = parent_name.trim().to_lowercase();
                if matches!(
                    parent_name.as_str(),
                    "bash" | "zsh" | "fish" | "csh" | "tcsh" | "ksh" | "nu"
                ) {
                    return parent_name;
                }
            }
        }
    }

    let shell_path = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
    Path::new(&shell_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("sh")
        .to_string()
}

pub fn detect_shell() -> Shell {
    if cfg!(target_os = "windows") {
        if std::env::var("PSVersionTable").is_ok()
            || std::env::var("POWERSHELL_DISTRIBUTION_CHANNEL").is_ok()
        {
            return Shell::PowerShell;
        }
        return Shell::Cmd;
    }

    let shell = Shell::from_name(&current_shell_name());
    tracing::debug!("Detected shell: {:?}", shell);
    shell
}
