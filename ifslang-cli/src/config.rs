use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ifslang.toml";

/// Target cultures used when neither the command line nor the config names any.
pub const DEFAULT_LANGUAGES: [&str; 2] = ["sv-SE", "nb-NO"];

/// Settings read from `ifslang.toml`.
///
/// ```toml
/// languages = ["sv-SE", "nb-NO", "da-DK"]
/// output_dir = "generated"
/// dictionary_dir = "terms"
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Directory holding `dictionary/<culture>.json` term files.
    #[serde(default)]
    pub dictionary_dir: Option<PathBuf>,
}

impl Config {
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
    }

    /// Loads `explicit` if given, else `./ifslang.toml` if present, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(format!("Config file not found: {}", path.display()));
                }
                Self::read_from_path(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "using default config file");
                    Self::read_from_path(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Command-line languages win over configured ones, which win over the defaults.
    pub fn resolve_languages(&self, cli: &[String]) -> Vec<String> {
        if !cli.is_empty() {
            return cli.to_vec();
        }
        match &self.languages {
            Some(langs) if !langs.is_empty() => langs.clone(),
            _ => DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Output directory: command line, then config, then the XML file's directory.
    pub fn resolve_output_dir(&self, cli: Option<&Path>, xml: &Path) -> PathBuf {
        if let Some(dir) = cli {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        xml.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolve_dictionary_dir(&self, cli: Option<&Path>) -> Option<PathBuf> {
        cli.map(Path::to_path_buf)
            .or_else(|| self.dictionary_dir.clone())
    }
}
