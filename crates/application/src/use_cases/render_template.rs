//! Render template use case.

use std::path::PathBuf;

use stencil_domain::Placeholder;

use crate::error::ApplicationResult;
use crate::ports::{FileSystem, FileSystemError};
use crate::resolver::PlaceholderResolver;

/// Input for rendering a template file.
#[derive(Debug, Clone)]
pub struct RenderTemplateInput {
    /// Template to read.
    pub source: PathBuf,
    /// Where the rendered text is written.
    pub destination: PathBuf,
}

/// Output from rendering a template file.
#[derive(Debug, Clone)]
pub struct RenderTemplateOutput {
    /// The path the rendered text was written to.
    pub destination: PathBuf,
    /// Number of bytes written.
    pub bytes_written: usize,
    /// Placeholders that were left literal.
    pub unresolved: Vec<Placeholder>,
}

/// Use case for resolving every placeholder in a file.
///
/// Rendered files may contain secrets pulled from the environment, so the
/// destination is written owner-only.
pub struct RenderTemplate<F: FileSystem> {
    file_system: F,
    resolver: PlaceholderResolver,
}

impl<F: FileSystem> RenderTemplate<F> {
    /// Creates a new `RenderTemplate` use case.
    #[must_use]
    pub const fn new(file_system: F, resolver: PlaceholderResolver) -> Self {
        Self {
            file_system,
            resolver,
        }
    }

    /// Reads `input.source`, resolves it and writes `input.destination`.
    ///
    /// # Errors
    /// - Returns error if the source is missing or not a regular file
    /// - Returns error if file system operations fail
    pub async fn execute(&self, input: RenderTemplateInput) -> ApplicationResult<RenderTemplateOutput> {
        if !self.file_system.is_file(&input.source).await {
            return Err(FileSystemError::NotFound(input.source).into());
        }

        let template = self.file_system.read_file_string(&input.source).await?;
        let result = self.resolver.resolve_detailed(&template);

        self.file_system
            .write_private(&input.destination, result.resolved.as_bytes())
            .await?;

        tracing::debug!(
            source = %input.source.display(),
            destination = %input.destination.display(),
            resolved = result.resolved_count(),
            unresolved = result.unresolved_count(),
            "rendered template"
        );

        Ok(RenderTemplateOutput {
            destination: input.destination,
            bytes_written: result.resolved.len(),
            unresolved: result.unresolved,
        })
    }
}
