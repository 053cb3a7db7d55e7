//! File Read/Write Tools
//!
//! Text file access confined to a root directory. Paths are always relative
//! to that root; absolute paths and `..` components are rejected before any
//! filesystem access happens. Symlinks are resolved afterwards, and anything
//! that lands outside the root is rejected too.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AgentError, Result};
use crate::tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema};

/// Join `relative` onto `root`, refusing anything that could leave `root`
pub fn sandboxed_path(root: &Path, relative: &str) -> Result<PathBuf> {
    let relative = relative.trim();
    if relative.is_empty() {
        return Err(AgentError::ToolValidation("Path must not be empty".into()));
    }

    let mut joined = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(AgentError::ToolValidation(format!(
                    "Path '{}' must not contain '..'",
                    relative
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(AgentError::ToolValidation(format!(
                    "Path '{}' must be relative",
                    relative
                )));
            }
        }
    }

    if joined == root {
        return Err(AgentError::ToolValidation(format!(
            "Path '{}' does not name a file",
            relative
        )));
    }

    Ok(joined)
}

/// Check that `path` (already joined by [`sandboxed_path`]) does not leave
/// `root` through a symlink
///
/// The nearest existing ancestor of `path` is canonicalized and compared to
/// the canonical root. A dangling symlink on the way is rejected, since
/// writing through it would create its target.
async fn confine(root: &Path, path: &Path, relative: &str) -> Result<()> {
    let root = tokio::fs::canonicalize(root).await.map_err(|e| {
        AgentError::Config(format!(
            "File tool root '{}' is not accessible: {}",
            root.display(),
            e
        ))
    })?;

    let escapes = || {
        AgentError::ToolValidation(format!(
            "Path '{}' resolves outside the working directory",
            relative
        ))
    };

    let mut existing = path;
    let resolved = loop {
        match tokio::fs::canonicalize(existing).await {
            Ok(resolved) => break resolved,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if tokio::fs::symlink_metadata(existing).await.is_ok() {
                    return Err(escapes());
                }
                match existing.parent() {
                    Some(parent) => existing = parent,
                    None => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        }
    };

    if resolved.starts_with(&root) {
        Ok(())
    } else {
        tracing::warn!(
            path = %relative,
            resolved = %resolved.display(),
            "Rejected path outside file tool root"
        );
        Err(escapes())
    }
}

fn path_param() -> ParameterSchema {
    ParameterSchema::new("path", "string", "File path relative to the working directory").required()
}

/// Reads a UTF-8 text file
pub struct FileReadTool {
    root: PathBuf,
}

impl FileReadTool {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Tool for FileReadTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "file_read".into(),
            description: "Read the contents of a text file in the working directory".into(),
            parameters: vec![path_param()],
            category: Some("files".into()),
            has_side_effects: false,
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let relative = call.require_str("path")?;
        let path = sandboxed_path(&self.root, relative)?;
        confine(&self.root, &path, relative).await?;

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(ToolResult::success("file_read", content)
                .with_data(serde_json::json!({ "path": relative }))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ToolResult::failure(
                "file_read",
                format!("File not found: {}", relative),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Ok(ToolResult::failure(
                "file_read",
                format!("File is not valid UTF-8 text: {}", relative),
            )),
            Err(e) => Err(AgentError::ToolExecution(format!(
                "Failed to read {}: {}",
                relative, e
            ))),
        }
    }
}

/// Writes or appends to a UTF-8 text file
pub struct FileWriteTool {
    root: PathBuf,
}

impl FileWriteTool {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Tool for FileWriteTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "file_write".into(),
            description: "Create or overwrite a text file in the working directory".into(),
            parameters: vec![
                path_param(),
                ParameterSchema::new("content", "string", "Text to write").required(),
                ParameterSchema::new("append", "boolean", "Append instead of overwriting")
                    .with_default(serde_json::json!(false)),
            ],
            category: Some("files".into()),
            has_side_effects: true,
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let relative = call.require_str("path")?;
        let content = call.require_str("content")?;
        let append = call.bool_arg("append").unwrap_or(false);
        let path = sandboxed_path(&self.root, relative)?;
        confine(&self.root, &path, relative).await?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&path)
            .await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        let verb = if append { "Appended" } else { "Wrote" };
        Ok(ToolResult::success(
            "file_write",
            format!("{} {} bytes to {}", verb, content.len(), relative),
        )
        .with_data(serde_json::json!({
            "path": relative,
            "bytes": content.len(),
            "append": append,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandboxed_path_accepts_nested() {
        let root = Path::new("/srv/work");
        assert_eq!(
            sandboxed_path(root, "notes/./test123.md").unwrap(),
            PathBuf::from("/srv/work/notes/test123.md")
        );
    }

    #[test]
    fn test_sandboxed_path_rejects_escapes() {
        let root = Path::new("/srv/work");
        assert!(sandboxed_path(root, "../etc/passwd").is_err());
        assert!(sandboxed_path(root, "a/../../b").is_err());
        assert!(sandboxed_path(root, "/etc/passwd").is_err());
        assert!(sandboxed_path(root, "").is_err());
        assert!(sandboxed_path(root, ".").is_err());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriteTool::new(dir.path());
        let reader = FileReadTool::new(dir.path());

        let call = ToolCall::new("file_write")
            .with_arg("path", "docs/test123.md")
            .with_arg("content", "# File permissions\n");
        let result = writer.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "Wrote 19 bytes to docs/test123.md");

        let call = ToolCall::new("file_write")
            .with_arg("path", "docs/test123.md")
            .with_arg("content", "chmod 644\n")
            .with_arg("append", true);
        writer.execute(&call).await.unwrap();

        let call = ToolCall::new("file_read").with_arg("path", "docs/test123.md");
        let result = reader.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "# File permissions\nchmod 644\n");
    }

    #[tokio::test]
    async fn test_overwrite_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriteTool::new(dir.path());

        for content in ["a longer first version", "short"] {
            let call = ToolCall::new("file_write")
                .with_arg("path", "out.txt")
                .with_arg("content", content);
            writer.execute(&call).await.unwrap();
        }

        let text = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(text, "short");
    }

    #[tokio::test]
    async fn test_read_missing_is_tool_failure() {
        let dir = tempfile::tempdir().unwrap();
        let call = ToolCall::new("file_read").with_arg("path", "nope.txt");
        let result = FileReadTool::new(dir.path()).execute(&call).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "File not found: nope.txt");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_out_of_root_is_rejected() {
        use std::os::unix::fs::symlink;

        let root = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        std::fs::write(outside.path().join("secret.txt"), "top secret").unwrap();

        symlink(outside.path(), root.path().join("linked_dir")).unwrap();
        symlink(outside.path().join("secret.txt"), root.path().join("linked_file")).unwrap();
        symlink(outside.path().join("created.txt"), root.path().join("dangling")).unwrap();

        let reader = FileReadTool::new(root.path());
        let writer = FileWriteTool::new(root.path());

        for path in ["linked_dir/secret.txt", "linked_file"] {
            let call = ToolCall::new("file_read").with_arg("path", path);
            let err = reader.execute(&call).await.unwrap_err();
            assert!(matches!(err, AgentError::ToolValidation(_)), "{path}: {err}");
        }

        let targets = ["linked_dir/new.txt", "linked_dir/sub/new.txt", "linked_file", "dangling"];
        for path in targets {
            let call = ToolCall::new("file_write")
                .with_arg("path", path)
                .with_arg("content", "overwritten");
            let err = writer.execute(&call).await.unwrap_err();
            assert!(matches!(err, AgentError::ToolValidation(_)), "{path}: {err}");
        }

        assert_eq!(
            std::fs::read_to_string(outside.path().join("secret.txt")).unwrap(),
            "top secret"
        );
        assert!(!outside.path().join("new.txt").exists());
        assert!(!outside.path().join("sub").exists());
        assert!(!outside.path().join("created.txt").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_within_root_is_allowed() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("real")).unwrap();
        std::fs::write(root.path().join("real/notes.md"), "inside").unwrap();
        std::os::unix::fs::symlink(root.path().join("real"), root.path().join("alias")).unwrap();

        let call = ToolCall::new("file_read").with_arg("path", "alias/notes.md");
        let result = FileReadTool::new(root.path()).execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "inside");
    }

    #[tokio::test]
    async fn test_escape_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let call = ToolCall::new("file_read").with_arg("path", "../secret");
        let err = FileReadTool::new(dir.path()).execute(&call).await.unwrap_err();
        assert!(matches!(err, AgentError::ToolValidation(_)));
    }
}
