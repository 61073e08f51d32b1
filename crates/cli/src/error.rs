// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing error display with context and suggestions.
//!
//! Library errors are precise but terse. This wraps them with what went
//! wrong, why it might have happened, and how to fix it.

use simplify_core::{ConvertError, EmitError, SpecError};
use std::fmt;
use std::path::Path;

/// A library error with context and recovery suggestions for display.
#[derive(Debug)]
pub struct CliError {
    message: String,
    context: Vec<String>,
    suggestions: Vec<String>,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl CliError {
    /// Wrap `source`; its own message becomes the first context line.
    fn caused_by<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            context: vec![source.to_string()],
            suggestions: Vec::new(),
            source: Box::new(source),
        }
    }

    fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        writeln!(f)?;
        for ctx in &self.context {
            writeln!(f, "  -> {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl CliError {
    /// Error for a document that could not be read or failed validation.
    pub fn invalid_document(input: &Path, err: SpecError) -> Self {
        let hint = match &err {
            SpecError::Io { .. } => Hint::suggest([
                "Check that the file exists and is readable".to_string(),
                "Pass the document path with -i <FILE>".to_string(),
            ]),
            SpecError::Yaml(_) => Hint::context("The document is not valid YAML")
                .and_suggest("Check indentation and quoting near the reported line"),
            SpecError::MissingSection(section) => Hint::context(
                "A serverless document needs service, provider, \
                 resources.Resources and functions",
            )
            .and_suggest(format!("Add a `{}` section to the document", section)),
            SpecError::InvalidSection { section, expected } => {
                Hint::suggest([format!("Rewrite `{}` as a {}", section, expected)])
            }
        };
        hint.apply(CliError::caused_by(
            format!("Cannot load '{}'", input.display()),
            err,
        ))
    }

    /// Error for an artifact that could not be rendered or written.
    pub fn emit_failed(output: &Path, err: EmitError) -> Self {
        let hint = match &err {
            EmitError::Io { .. } => Hint::suggest([
                "Check that the output directory is writable".to_string(),
                "Choose another directory with -o <DIR>".to_string(),
            ]),
            _ => Hint::context("An artifact failed to render from the resolved document"),
        };
        hint.apply(CliError::caused_by(
            format!("Cannot write artifacts to '{}'", output.display()),
            err,
        ))
    }

    pub fn from_convert(input: &Path, output: &Path, err: ConvertError) -> Self {
        match err {
            ConvertError::Spec(e) => Self::invalid_document(input, e),
            ConvertError::Emit(e) => Self::emit_failed(output, e),
        }
    }
}

/// Extra lines chosen from a borrowed library error before it is moved
/// into the [`CliError`] that wraps it.
struct Hint {
    context: Option<String>,
    suggestions: Vec<String>,
}

impl Hint {
    fn context(ctx: impl Into<String>) -> Self {
        Self {
            context: Some(ctx.into()),
            suggestions: Vec::new(),
        }
    }

    fn suggest(suggestions: impl IntoIterator<Item = String>) -> Self {
        Self {
            context: None,
            suggestions: suggestions.into_iter().collect(),
        }
    }

    fn and_suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    fn apply(self, mut err: CliError) -> CliError {
        if let Some(ctx) = self.context {
            err = err.with_context(ctx);
        }
        self.suggestions
            .into_iter()
            .fold(err, CliError::with_suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CliError::caused_by(
            "Something went wrong",
            SpecError::MissingSection("functions".to_string()),
        )
        .with_context("Second context")
        .with_suggestion("Try this")
        .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> missing required section: functions"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn write_failure_suggests_other_directory() {
        let err = CliError::emit_failed(
            Path::new("out"),
            EmitError::Io {
                path: "out/openapi.yaml".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        );
        let output = format!("{}", err);
        assert!(output.contains("Cannot write artifacts to 'out'"));
        assert!(output.contains("-> IO error writing out/openapi.yaml"));
        assert!(output.contains("2. Choose another directory with -o <DIR>"));
    }

    #[test]
    fn missing_section_suggests_adding_it() {
        let err = CliError::invalid_document(
            Path::new("serverless.yaml"),
            SpecError::MissingSection("resources.Resources".to_string()),
        );
        let output = format!("{}", err);
        assert!(output.contains("Cannot load 'serverless.yaml'"));
        assert!(output.contains("Add a `resources.Resources` section"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_section_names_expected_shape() {
        let err = CliError::invalid_document(
            Path::new("s.yaml"),
            SpecError::InvalidSection {
                section: "functions".to_string(),
                expected: "mapping",
            },
        );
        assert!(format!("{}", err).contains("Rewrite `functions` as a mapping"));
    }
}
