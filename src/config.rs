// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    error::Result,
    settings::{Settings, SourceFile},
};

// ---

pub const APP_NAME: &str = "fnmatch";

/// Creates a settings loader using the given configuration files in addition to the default one.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().into()).collect())
}

/// Returns the location of the default configuration file without an extension.
///
/// Any of the `yaml`, `toml` or `json` extensions is accepted there.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the default configuration file.
    pub fn no_default(mut self, val: bool) -> Self {
        self.no_default = val;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let default = if self.no_default { None } else { default_path() };

        let sources = default
            .map(|path| SourceFile::new(path).required(false))
            .into_iter()
            .chain(self.paths.into_iter().map(SourceFile::new))
            .map(Into::into);

        let settings = Settings::load(sources)?;
        log::debug!("loaded settings: {settings:?}");

        Ok(settings)
    }
}
