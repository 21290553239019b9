// std imports
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

// third-party imports
use fnmatch::Pattern;

// local imports
use crate::{error::*, settings::Delimiter};

// ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Print each selected candidate followed by the delimiter.
    #[default]
    Print,
    /// Print the number of selected candidates once done.
    Count,
    /// Print nothing and stop at the first selected candidate.
    Quiet,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub pattern: Pattern,
    pub invert: bool,
    pub output: OutputMode,
    pub delimiter: Delimiter,
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub selected: usize,
}

// ---

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Matches the given candidates and writes the selected ones to the output.
    pub fn run<'a, I>(&self, candidates: I, output: &mut dyn Write) -> Result<Summary>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut summary = Summary::default();

        for candidate in candidates {
            if self.process(candidate, &mut summary, output)?.is_break() {
                break;
            }
        }

        self.finish(summary, output)
    }

    /// Reads delimited candidates from the input, matches them and writes the selected ones to the output.
    ///
    /// Candidates that are not valid UTF-8 are skipped.
    pub fn run_reader<R: BufRead>(&self, mut input: R, output: &mut dyn Write) -> Result<Summary> {
        let delimiter = self.options.delimiter.byte();
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(delimiter, &mut buf)? == 0 {
                break;
            }

            if buf.last() == Some(&delimiter) {
                buf.pop();
            }
            if delimiter == b'\n' && buf.last() == Some(&b'\r') {
                buf.pop();
            }

            let Ok(candidate) = std::str::from_utf8(&buf) else {
                log::warn!("skip candidate with invalid UTF-8: {:?}", String::from_utf8_lossy(&buf));
                continue;
            };

            if self.process(candidate, &mut summary, output)?.is_break() {
                break;
            }
        }

        self.finish(summary, output)
    }

    fn process(&self, candidate: &str, summary: &mut Summary, output: &mut dyn Write) -> Result<ControlFlow<()>> {
        summary.total += 1;

        let matched = self.options.pattern.matches(candidate);
        log::trace!("candidate {candidate:?} matched: {matched}");

        if matched == self.options.invert {
            return Ok(ControlFlow::Continue(()));
        }

        summary.selected += 1;

        match self.options.output {
            OutputMode::Print => {
                output.write_all(candidate.as_bytes())?;
                output.write_all(&[self.options.delimiter.byte()])?;
                Ok(ControlFlow::Continue(()))
            }
            OutputMode::Count => Ok(ControlFlow::Continue(())),
            OutputMode::Quiet => Ok(ControlFlow::Break(())),
        }
    }

    fn finish(&self, summary: Summary, output: &mut dyn Write) -> Result<Summary> {
        if self.options.output == OutputMode::Count {
            writeln!(output, "{}", summary.selected)?;
        }
        output.flush()?;

        log::debug!(
            "selected {} of {} candidates processed",
            summary.selected,
            summary.total
        );

        Ok(summary)
    }
}
