//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["room.toml", ".room.toml"];
const ENV_PREFIX: &str = "ROOM_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ROOM_` environment variables (`ROOM_AGENT__MODEL` sets `agent.model`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./room.toml` or `./.room.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/the-room/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::files(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        );
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults merged with whichever of the given files exist
    fn files(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path is always merged so a typo surfaces as an error
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("the-room").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./room.toml or ./.room.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_domain::Language;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.game.turns, 6);
        assert!(config.game.roster.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("the-room"));
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let global = toml_file("[game]\nlanguage = \"en\"\nturns = 9\n");
        let project = toml_file("[game]\nturns = 3\n");

        let config: FileConfig = ConfigLoader::files(Some(global.path()), Some(project.path()), None)
            .extract()
            .unwrap();

        assert_eq!(config.game.language, Language::English);
        assert_eq!(config.game.turns, 3);
        assert_eq!(config.agent.api_key_env, "ANTHROPIC_API_KEY");
    }

    #[test]
    fn test_explicit_file_has_highest_file_priority() {
        let project = toml_file("[agent]\nmodel = \"from-project\"\n");
        let explicit = toml_file("[agent]\nmodel = \"from-explicit\"\n");

        let config: FileConfig =
            ConfigLoader::files(None, Some(project.path()), Some(explicit.path()))
                .extract()
                .unwrap();

        assert_eq!(config.agent.model, "from-explicit");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result: Result<FileConfig, _> =
            ConfigLoader::files(None, None, Some(&missing)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_optional_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let config: FileConfig = ConfigLoader::files(Some(&missing), None, None)
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
