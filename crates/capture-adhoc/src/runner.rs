use anyhow::{Context, Result};
use std::io::Write;

use crate::config::OutputFormat;
use crate::params::TestParams;

/// Executes a validated capture test and reports whether it passed.
///
/// Implementations own the platform side: windows, capture sessions and the
/// visual checks. They only ever see [`TestParams`], never raw arguments.
pub trait TestRunner {
    fn run(&mut self, params: &TestParams) -> Result<bool>;
}

/// Reports the resolved test plan instead of driving a capture backend.
pub struct PlanRunner<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> PlanRunner<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TestRunner for PlanRunner<W> {
    fn run(&mut self, params: &TestParams) -> Result<bool> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "Test plan: {params}").context("failed to write test plan")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, params)
                    .context("failed to serialize test plan")?;
                writeln!(self.out).context("failed to write test plan")?;
            }
        }
        self.out.flush().context("failed to flush test plan")?;
        Ok(true)
    }
}
