// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use fnmatch::{Flag, Flags};
use serde::{Deserialize, Serialize};

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub flags: Vec<Flag>,
    #[serde(default)]
    pub delimiter: Delimiter,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with the given sources in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(file) => {
                    log::debug!("add configuration file {:?} (required: {})", file.filename, file.required);
                    builder.add_source(File::with_name(&file.filename.to_string_lossy()).required(file.required))
                }
                Source::Text(text, format) => builder.add_source(File::from_str(&text, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Returns the configured flags united into a single set.
    pub fn flags(&self) -> Flags {
        self.flags.iter().copied().collect()
    }
}

// ---

#[derive(Debug, Clone)]
pub enum Source {
    File(SourceFile),
    Text(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

// ---

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delimiter {
    #[default]
    Lf,
    Nul,
}

impl Delimiter {
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            Self::Lf => b'\n',
            Self::Nul => 0,
        }
    }
}
