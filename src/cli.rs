// third-party imports
use clap::Parser;
use fnmatch::{Flag, Flags};

// local imports
use crate::{app::OutputMode, settings::Delimiter};

// ---

/// Matches strings against a shell-style glob pattern.
///
/// Selected candidates are printed one per line. The exit status is 0 if any candidate
/// was selected, 1 if none was, and 2 on error.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, an empty value or '-' discards the files listed before it, including the default one.
    #[arg(long, value_name = "FILE", env = "FNMATCH_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Treat backslash as an ordinary character.
    #[arg(long)]
    pub no_escape: bool,

    /// Do not let wildcards and bracket expressions match '/'.
    #[arg(short = 'p', long)]
    pub pathname: bool,

    /// Do not let wildcards and bracket expressions match a leading '.'.
    #[arg(long)]
    pub period: bool,

    /// Let the pattern match a leading part of a candidate followed by '/'.
    #[arg(long)]
    pub leading_dir: bool,

    /// Compare characters case-insensitively.
    #[arg(short = 'i', long)]
    pub case_fold: bool,

    /// Comma separated list of flags to set [possible values: no-escape, pathname, period, leading-dir, case-fold].
    #[arg(long, value_name = "FLAGS", value_delimiter = ',')]
    pub flags: Vec<Flag>,

    /// Ignore flags set in configuration files.
    #[arg(long)]
    pub no_default_flags: bool,

    /// Select candidates that do not match.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected candidates.
    #[arg(short, long, conflicts_with = "quiet")]
    pub count: bool,

    /// Print nothing, stop at the first selected candidate.
    #[arg(short, long)]
    pub quiet: bool,

    /// Delimiter of candidates read from standard input and of printed candidates.
    #[arg(long, value_enum, env = "FNMATCH_DELIMITER", overrides_with = "delimiter")]
    pub delimiter: Option<Delimiter>,

    /// Handful alias for --delimiter=nul, overrides --delimiter option.
    #[arg(short = 'z', long = "null")]
    pub null: bool,

    /// Glob pattern.
    #[arg(name = "PATTERN")]
    pub pattern: String,

    /// Candidates to match, read from standard input if none are given.
    #[arg(name = "CANDIDATE")]
    pub candidates: Vec<String>,
}

impl Opt {
    /// Returns configuration files to load and whether the default one is discarded.
    pub fn config_files(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();

        (&self.config[offset..], no_default)
    }

    /// Returns flags set on the command line united with the configured ones.
    pub fn flags(&self, configured: Flags) -> Flags {
        let mut flags = if self.no_default_flags { Flags::empty() } else { configured };
        flags.insert_all(self.flags.iter().copied().collect());

        for (enabled, flag) in [
            (self.no_escape, Flag::NoEscape),
            (self.pathname, Flag::Pathname),
            (self.period, Flag::Period),
            (self.leading_dir, Flag::LeadingDir),
            (self.case_fold, Flag::CaseFold),
        ] {
            if enabled {
                flags.insert(flag);
            }
        }

        flags
    }

    pub fn delimiter(&self, configured: Delimiter) -> Delimiter {
        if self.null {
            Delimiter::Nul
        } else {
            self.delimiter.unwrap_or(configured)
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.count {
            OutputMode::Count
        } else {
            OutputMode::Print
        }
    }
}
