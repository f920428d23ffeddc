// this_file: crates/arctext-core/src/utils.rs

//! Shared utilities for the arctext engine.

/// System font directories for different platforms.
pub fn system_font_dirs() -> Vec<String> {
    #[cfg(target_os = "macos")]
    {
        vec![
            "/System/Library/Fonts".to_string(),
            "/Library/Fonts".to_string(),
            "~/Library/Fonts".to_string(),
        ]
    }

    #[cfg(target_os = "windows")]
    {
        vec!["C:\\Windows\\Fonts".to_string()]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            "/usr/share/fonts".to_string(),
            "/usr/local/share/fonts".to_string(),
            "~/.fonts".to_string(),
            "~/.local/share/fonts".to_string(),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_dirs_are_absolute_or_home_relative() {
        for dir in system_font_dirs() {
            assert!(
                dir.starts_with('/') || dir.starts_with('~') || dir.starts_with("C:\\"),
                "unexpected font dir {dir:?}"
            );
        }
    }
}
