//! Rendering templates on the real file system.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use stencil_application::ApplicationError;
use stencil_application::ports::{FileSystem, FileSystemError};
use stencil_application::use_cases::{RenderTemplate, RenderTemplateInput};
use stencil_application::{PlaceholderResolver, ResolverConfig};
use stencil_infrastructure::{SeededRandom, StaticEnvironment, SystemClock, TokioFileSystem};
use tempfile::TempDir;

fn resolver() -> PlaceholderResolver {
    let env = StaticEnvironment::new()
        .with_var("DB_HOST", "db.internal")
        .with_var("DB_PASSWORD", "hunter2");
    PlaceholderResolver::new(ResolverConfig::new(
        Arc::new(SystemClock::new()),
        Arc::new(SeededRandom::new(1)),
        Arc::new(env),
    ))
}

#[tokio::test]
async fn renders_template_to_private_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("database.toml.tmpl");
    let destination = dir.path().join("database.toml");
    std::fs::write(
        &source,
        "host = \"${DB_HOST}\"\npassword = \"{DB_PASSWORD}\"\nsession = \"{{randomHex(12)}}\"\nport = ${DB_PORT}\n",
    )
    .unwrap();

    let use_case = RenderTemplate::new(TokioFileSystem::new(), resolver());
    let output = use_case
        .execute(RenderTemplateInput {
            source,
            destination: destination.clone(),
        })
        .await
        .unwrap();

    let rendered = std::fs::read_to_string(&destination).unwrap();
    assert!(rendered.starts_with("host = \"db.internal\"\npassword = \"hunter2\"\n"));
    assert!(rendered.ends_with("port = ${DB_PORT}\n"));
    assert_eq!(output.bytes_written, rendered.len());
    assert_eq!(output.unresolved.len(), 1);
    assert_eq!(output.unresolved[0].name(), "DB_PORT");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&destination).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test]
async fn directory_source_is_rejected() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("out.txt");

    let use_case = RenderTemplate::new(TokioFileSystem::new(), resolver());
    let error = use_case
        .execute(RenderTemplateInput {
            source: dir.path().to_path_buf(),
            destination: destination.clone(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApplicationError::FileSystem(FileSystemError::NotFound(_))
    ));
    assert!(!TokioFileSystem::new().exists(&destination).await);
}
