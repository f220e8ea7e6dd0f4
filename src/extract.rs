use crate::error::{ReadabilityError, Result};
use crate::types::config::ReadabilityConfig;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const UNREADABLE_PLACEHOLDER: &str = "(Could not extract text)";
pub const UNSUPPORTED_PLACEHOLDER: &str = "(Unsupported file type)";
pub const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Resolves CLI inputs into documents. Directories expand to the files they
/// contain, in file name order; `-` reads standard input.
pub fn collect_documents(
    inputs: &[PathBuf],
    config: &ReadabilityConfig,
) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for input in inputs {
        if input.as_os_str() == "-" {
            documents.push(read_stdin()?);
            continue;
        }
        if !input.exists() {
            return Err(ReadabilityError::PathNotFound(input.display().to_string()));
        }
        if input.is_dir() {
            for file in list_files(input, config.input.recursive) {
                let text = extract_text(&file, config);
                documents.push(Document::new(file.display().to_string(), text));
            }
        } else {
            let text = extract_text(input, config);
            documents.push(Document::new(input.display().to_string(), text));
        }
    }
    Ok(documents)
}

/// Text of a single file, or a placeholder when it cannot be used.
pub fn extract_text(path: &Path, config: &ReadabilityConfig) -> String {
    let supported = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| config.accepts_extension(extension));
    if !supported {
        tracing::warn!(path = %path.display(), "unsupported file type");
        return UNSUPPORTED_PLACEHOLDER.to_string();
    }

    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "could not extract text");
            UNREADABLE_PLACEHOLDER.to_string()
        }
    }
}

pub fn list_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let walker = WalkDir::new(root).sort_by_file_name();
    let walker = if recursive { walker } else { walker.max_depth(1) };
    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(root = %root.display(), %error, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn read_stdin() -> Result<Document> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(Document::new(
        STDIN_NAME,
        String::from_utf8_lossy(&bytes).into_owned(),
    ))
}
