//! Module configuration
//!
//! The sender is a Windows application (run under wine on Linux) that owns
//! an INI file; the receiver only reads two switches out of it. The lookup
//! mirrors the sender's own semantics: case-insensitive sections and keys,
//! `;`/`#` comments, quoted values, and `1`/`true` / `0`/`false` booleans.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cymple_core::{CympleError, CympleResult};
use cymple_wire::DEFAULT_PORT;
use tracing::error;

use crate::RECV_TIMEOUT;

/// INI section holding the tracking switches
pub const CONFIG_SECTION: &str = "Function Switch";

/// Switch enabling eye tracking
pub const EYE_SWITCH_KEY: &str = "cymple_eye_sw";

/// Switch enabling mouth/expression tracking
pub const MOUTH_SWITCH_KEY: &str = "cymple_mouth_sw";

/// Receiver configuration
#[derive(Clone, Debug)]
pub struct ModuleConfig {
    /// Eye-tracking switch from the sender's config
    pub eye_enabled: bool,
    /// Mouth/expression switch from the sender's config
    pub mouth_enabled: bool,
    /// Local endpoint to bind
    pub bind_addr: SocketAddr,
    /// Receive timeout; one elapsed interval marks the link down
    pub recv_timeout: Duration,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            eye_enabled: false,
            mouth_enabled: false,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            recv_timeout: RECV_TIMEOUT,
        }
    }
}

impl ModuleConfig {
    /// Read the tracking switches from an INI file.
    ///
    /// A missing file is `ConfigMissing`; the caller logs it and falls back
    /// to both categories disabled.
    pub fn load(path: &Path) -> CympleResult<Self> {
        if !path.exists() {
            return Err(CympleError::ConfigMissing(path.to_path_buf()));
        }
        Ok(ModuleConfig {
            eye_enabled: get_bool_value(path, CONFIG_SECTION, EYE_SWITCH_KEY, false),
            mouth_enabled: get_bool_value(path, CONFIG_SECTION, MOUTH_SWITCH_KEY, false),
            ..ModuleConfig::default()
        })
    }

    /// Read the switches from the default sender location.
    ///
    /// Any failure (no home directory, missing file) is logged as an error
    /// and falls back to both categories disabled; initialization proceeds
    /// either way.
    pub fn load_default() -> ModuleConfig {
        let Some(path) = Self::default_path() else {
            error!("could not determine home directory for the config path");
            return ModuleConfig::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}; tracking switches disabled");
                ModuleConfig::default()
            }
        }
    }

    /// Default location of the sender's INI file, under the current user's
    /// wine prefix. None when the home directory cannot be determined.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            Path::new(&home)
                .join(".wine")
                .join("drive_c")
                .join("Cymple")
                .join("iniFile.ini"),
        )
    }
}

/// Look up a boolean key in an INI-style file.
///
/// Returns `default` when the file is unreadable, the key is absent, or
/// the value is not a recognized boolean.
pub fn get_bool_value(path: &Path, section: &str, key: &str, default: bool) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return default;
    };

    let mut current_section = "";
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].trim();
            continue;
        }
        if !current_section.eq_ignore_ascii_case(section) {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        if k.trim().eq_ignore_ascii_case(key) {
            return match v.trim().trim_matches('"').to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => default,
            };
        }
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempIni(PathBuf);

    impl TempIni {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("cymple_{}_{}.ini", std::process::id(), name));
            fs::write(&path, contents).unwrap();
            TempIni(path)
        }
    }

    impl Drop for TempIni {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_load_switches() {
        let ini = TempIni::new(
            "switches",
            "; sender-managed file\n\
             [Function Switch]\n\
             cymple_eye_sw = 1\n\
             cymple_mouth_sw = false\n",
        );

        let config = ModuleConfig::load(&ini.0).unwrap();
        assert!(config.eye_enabled);
        assert!(!config.mouth_enabled);
    }

    #[test]
    fn test_missing_file_is_config_missing() {
        let path = std::env::temp_dir().join("cymple_does_not_exist.ini");
        let result = ModuleConfig::load(&path);
        assert!(matches!(result, Err(CympleError::ConfigMissing(p)) if p == path));
    }

    #[test]
    fn test_case_insensitive_section_and_key() {
        let ini = TempIni::new(
            "case",
            "[function switch]\nCYMPLE_EYE_SW=TRUE\n",
        );
        assert!(get_bool_value(&ini.0, CONFIG_SECTION, EYE_SWITCH_KEY, false));
    }

    #[test]
    fn test_quoted_values() {
        let ini = TempIni::new("quoted", "[Function Switch]\ncymple_eye_sw = \"1\"\n");
        assert!(get_bool_value(&ini.0, CONFIG_SECTION, EYE_SWITCH_KEY, false));
    }

    #[test]
    fn test_wrong_section_ignored() {
        let ini = TempIni::new(
            "section",
            "[Other]\ncymple_eye_sw = 1\n[Function Switch]\ncymple_mouth_sw = 1\n",
        );
        assert!(!get_bool_value(&ini.0, CONFIG_SECTION, EYE_SWITCH_KEY, false));
        assert!(get_bool_value(&ini.0, CONFIG_SECTION, MOUTH_SWITCH_KEY, false));
    }

    #[test]
    fn test_unrecognized_value_yields_default() {
        let ini = TempIni::new("junk", "[Function Switch]\ncymple_eye_sw = maybe\n");
        assert!(!get_bool_value(&ini.0, CONFIG_SECTION, EYE_SWITCH_KEY, false));
        assert!(get_bool_value(&ini.0, CONFIG_SECTION, EYE_SWITCH_KEY, true));
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let ini = TempIni::new(
            "comments",
            "\n# comment\n; also a comment\n[Function Switch]\n\ncymple_eye_sw = 0\n",
        );
        assert!(!get_bool_value(&ini.0, CONFIG_SECTION, EYE_SWITCH_KEY, true));
    }
}
