/// Centralized platform-specific path computation
///
/// Provides consistent path handling across Windows, macOS, and Linux following
/// XDG Base Directory specification on Unix-like systems.
use std::path::PathBuf;

/// Platform-agnostic path utilities
pub struct PlatformPaths;

impl PlatformPaths {
    /// Get the appropriate data directory for the current platform
    ///
    /// - Windows: %LOCALAPPDATA%
    /// - macOS: ~/Library/Application Support
    /// - Linux/Unix: $XDG_DATA_HOME or ~/.local/share
    pub fn data_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            std::env::var("LOCALAPPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        } else if cfg!(target_os = "macos") {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join("Library/Application Support"))
                .unwrap_or_else(|_| PathBuf::from("."))
        } else {
            // Linux/Unix - follow XDG Base Directory specification
            std::env::var("XDG_DATA_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    std::env::var("HOME").map(|home| PathBuf::from(home).join(".local/share"))
                })
                .unwrap_or_else(|_| PathBuf::from("."))
        }
    }

    /// Get the appropriate config directory for the current platform
    ///
    /// - Windows: %APPDATA%
    /// - macOS: ~/Library/Application Support
    /// - Linux/Unix: $XDG_CONFIG_HOME or ~/.config
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        } else if cfg!(target_os = "macos") {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join("Library/Application Support"))
                .unwrap_or_else(|_| PathBuf::from("."))
        } else {
            // Linux/Unix - follow XDG Base Directory specification
            std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
                .unwrap_or_else(|_| PathBuf::from("."))
        }
    }

    /// Get default project-specific data directory
    ///
    /// Returns: {data_dir}/git-recall
    pub fn project_data_dir() -> PathBuf {
        Self::data_dir().join("git-recall")
    }

    /// Get default project-specific config directory
    ///
    /// Returns: {config_dir}/git-recall
    pub fn project_config_dir() -> PathBuf {
        Self::config_dir().join("git-recall")
    }

    /// Get the default store directory for manifests and index directories
    ///
    /// Returns: {data_dir}/git-recall/embeddings
    pub fn default_store_dir() -> PathBuf {
        Self::project_data_dir().join("embeddings")
    }

    /// Get default config file path
    ///
    /// Returns: {config_dir}/git-recall/config.toml
    pub fn default_config_path() -> PathBuf {
        Self::project_config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_not_empty() {
        let dir = PlatformPaths::data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_dir_not_empty() {
        let dir = PlatformPaths::config_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_project_paths_contain_project_name() {
        assert!(
            PlatformPaths::project_data_dir()
                .to_string_lossy()
                .contains("git-recall")
        );
        assert!(
            PlatformPaths::project_config_dir()
                .to_string_lossy()
                .contains("git-recall")
        );
    }

    #[test]
    fn test_default_store_dir() {
        let path = PlatformPaths::default_store_dir();
        assert!(path.to_string_lossy().contains("git-recall"));
        assert!(path.ends_with("embeddings"));
    }

    #[test]
    fn test_default_config_path() {
        let path = PlatformPaths::default_config_path();
        assert!(path.to_string_lossy().contains("git-recall"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_store_dir_is_under_data_dir() {
        let data_dir = PlatformPaths::data_dir();
        let store_dir = PlatformPaths::default_store_dir();
        assert!(store_dir.starts_with(&data_dir) || data_dir == PathBuf::from("."));
    }
}
