//! CLI runtime for rulebook.
//!
//! Thin wrappers around the core: read a rule file, run the
//! interpreter, format the result for display, and map errors onto
//! process exit codes. Everything with design content lives in the
//! lower layers; nothing here prints except through the values it
//! returns.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use rulebook_foundation::RuleSet;
use rulebook_language::{Interpreter, InterpreterConfig};
use thiserror::Error;

/// Exit code for success.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for permanent failures: parse, compile, or I/O errors.
pub const EXIT_PERMANENT: u8 = 100;
/// Exit code for temporary failures, including usage errors.
pub const EXIT_TEMPORARY: u8 = 111;

/// Errors surfaced by the runtime layer.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The rule file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rule file could not be interpreted.
    #[error(transparent)]
    Interpret(#[from] rulebook_foundation::Error),
}

impl RuntimeError {
    /// Maps this error onto a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        // All runtime failures are permanent: retrying the same file
        // yields the same result.
        EXIT_PERMANENT
    }
}

/// Reads and interprets a rule file.
///
/// # Errors
/// Returns [`RuntimeError::Io`] if the file cannot be read, or
/// [`RuntimeError::Interpret`] with the first error the interpreter hit.
pub fn compile_file(path: &Path, config: InterpreterConfig) -> Result<RuleSet, RuntimeError> {
    let source = fs::read_to_string(path).map_err(|source| RuntimeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Interpreter::with_config(config).interpret(&source)?)
}

/// Renders a compiled rule set as the `rulec` report.
///
/// One block per rule, in declaration order: name, raw definition, and
/// the compiled matcher's display form.
#[must_use]
pub fn render_report(rules: &RuleSet) -> String {
    let mut out = String::from("Compiled the following rules:\n");
    for rule in rules {
        let def = rule.pattern().unwrap_or_default();
        let _ = writeln!(out, "name: {}", rule.name());
        let _ = writeln!(out, "def: {def}");
        match rule.matcher() {
            Some(matcher) => {
                let _ = writeln!(out, "regex: {matcher}");
            }
            None => {
                let _ = writeln!(out, "regex: <none>");
            }
        }
    }
    out
}
