//! Bridge daemon configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level config file layout (the `[bridge]` table)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Bridge daemon settings
    pub bridge: BridgeConfig,
}

/// Configuration for the bridge daemon and the setup command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Loopback address the listener binds to
    pub bind_address: String,

    /// Name of the project's primary data directory, joined to the
    /// project root
    pub data_dir_name: String,

    /// Explicit companion server source directory, overriding discovery
    pub server_src: Option<PathBuf>,

    /// Pid file recording the running bridge instance
    pub pid_file: PathBuf,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:6400".to_string(),
            data_dir_name: "Assets".to_string(),
            server_src: None,
            pid_file: super::default_config_dir().join("bridge.pid"),
        }
    }
}

impl BridgeConfig {
    /// Data root for a project rooted at `project_root`
    pub fn data_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1:6400");
        assert_eq!(config.data_dir_name, "Assets");
        assert!(config.server_src.is_none());
    }

    #[test]
    fn test_data_root_joins_project_root() {
        let config = BridgeConfig::default();
        assert_eq!(
            config.data_root(Path::new("/proj")),
            PathBuf::from("/proj/Assets")
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file: ConfigFile = toml::from_str(
            r#"
            [bridge]
            bind_address = "127.0.0.1:7777"
            "#,
        )
        .unwrap();

        assert_eq!(file.bridge.bind_address, "127.0.0.1:7777");
        assert_eq!(file.bridge.data_dir_name, "Assets");
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file.bridge.bind_address, "127.0.0.1:6400");
    }

    #[test]
    fn test_server_src_override_parses() {
        let file: ConfigFile = toml::from_str(
            r#"
            [bridge]
            server_src = "/opt/UnityMcpServer/src"
            "#,
        )
        .unwrap();

        assert_eq!(
            file.bridge.server_src,
            Some(PathBuf::from("/opt/UnityMcpServer/src"))
        );
    }
}
