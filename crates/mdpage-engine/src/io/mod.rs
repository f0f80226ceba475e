use crate::models::{MarkdownFile, markdown_file::MARKDOWN_EXTENSION};
use crate::page::{PageError, render_page};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(String),
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: PageError },
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Write content to a file relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    write_path(&relative_path.to_path(root), content)
}

fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Markdown files under `root` as content-relative [`MarkdownFile`]s
pub fn collect_markdown_files(root: &Path) -> Result<Vec<MarkdownFile>, IoError> {
    let files = scan_markdown_files(root)?;
    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
        .map(MarkdownFile::new)
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Delete `path` if present and recreate it empty
pub fn reset_directory(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        log::info!("Removing {}", path.display());
        fs::remove_dir_all(path).map_err(IoError::Io)?;
    }
    fs::create_dir_all(path).map_err(IoError::Io)
}

/// Recursively copy every file under `source` into `destination`
///
/// Returns the number of files copied.
pub fn copy_directory(source: &Path, destination: &Path) -> Result<usize, IoError> {
    validate_dir(source)?;
    if !destination.exists() {
        fs::create_dir_all(destination).map_err(IoError::Io)?;
        log::info!("Created directory: {}", destination.display());
    }

    let mut entries = fs::read_dir(source)
        .map_err(IoError::Io)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::Io)?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let source_path = entry.path();
        let dest_path = destination.join(entry.file_name());

        if source_path.is_dir() {
            copied += copy_directory(&source_path, &dest_path)?;
        } else {
            fs::copy(&source_path, &dest_path).map_err(IoError::Io)?;
            log::info!(
                "Copied file: {} to {}",
                source_path.display(),
                dest_path.display()
            );
            copied += 1;
        }
    }

    Ok(copied)
}

/// Render the markdown at `from` into `template` and write it to `dest`
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), IoError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let template = read_path(template_path)?;
    let markdown = read_path(from)?;
    let page = render_page(&markdown, &template).map_err(|source| IoError::Page {
        path: from.to_path_buf(),
        source,
    })?;
    write_path(dest, &page)
}

/// Generate a page for every markdown file under `content_dir`
///
/// `content_dir/a/b.md` is written to `output_dir/a/b.html`. Returns the
/// written paths in sorted source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, IoError> {
    let template = read_path(template_path)?;
    let files = collect_markdown_files(content_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let markdown = read_file(file.relative_path(), content_dir)?;
        let page = render_page(&markdown, &template).map_err(|source| IoError::Page {
            path: file.relative_path().to_path(content_dir),
            source,
        })?;
        write_file(file.output_path(), output_dir, &page)?;

        let dest = file.output_path().to_path(output_dir);
        log::info!(
            "Generated {} from {}",
            dest.display(),
            file.relative_path()
        );
        written.push(dest);
    }

    Ok(written)
}
