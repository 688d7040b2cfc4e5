use crate::loader::LoadError;
use crate::models::Source;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Name a file by its path relative to `root`, falling back to the path as given.
pub fn source_name(path: &Path, root: &Path) -> RelativePathBuf {
    path.strip_prefix(root)
        .ok()
        .and_then(|rel| RelativePathBuf::from_path(rel).ok())
        .unwrap_or_else(|| RelativePathBuf::from(path.to_string_lossy().replace('\\', "/")))
}

/// Read a Markdown file into a [`Source`].
///
/// Missing files, permission problems and invalid UTF-8 all become
/// [`LoadError::Unreadable`], so one bad file only fails its own document.
pub fn read_source(path: &Path, root: &Path) -> Result<Source, LoadError> {
    let name = source_name(path, root);
    let bytes = fs::read(path).map_err(|e| LoadError::Unreadable {
        name: name.clone(),
        reason: e.to_string(),
    })?;
    let text = String::from_utf8(bytes).map_err(|e| LoadError::Unreadable {
        name: name.clone(),
        reason: format!("not valid UTF-8: {e}"),
    })?;
    Ok(Source::new(name, text))
}

/// Write rendered output, creating parent directories as needed.
pub fn write_output(
    relative_path: &RelativePath,
    out_dir: &Path,
    content: &str,
) -> Result<PathBuf, IoError> {
    let absolute_path = relative_path.to_path(out_dir);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(|source| IoError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&absolute_path, content).map_err(|source| IoError::Write {
        path: absolute_path.clone(),
        source,
    })?;
    Ok(absolute_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_root};

    #[test]
    fn test_read_source_names_relative_to_root() {
        let root = create_test_root();
        std::fs::create_dir(root.path().join("css")).unwrap();
        let path = create_test_file(&root, "css/layout.md", "# Layout");

        let source = read_source(&path, root.path()).unwrap();
        assert_eq!(source.name().as_str(), "css/layout.md");
        assert_eq!(source.text(), "# Layout");
    }

    #[test]
    fn test_read_source_missing_file_is_unreadable() {
        let root = create_test_root();
        let path = root.path().join("missing.md");

        let result = read_source(&path, root.path());
        assert!(matches!(
            result,
            Err(LoadError::Unreadable { ref name, .. }) if name.as_str() == "missing.md"
        ));
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let root = create_test_root();
        let path = root.path().join("binary.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_source(&path, root.path()).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_source_name_outside_root_keeps_path() {
        let name = source_name(Path::new("/elsewhere/a.md"), Path::new("/root"));
        assert_eq!(name.as_str(), "/elsewhere/a.md");
    }

    #[test]
    fn test_write_output_creates_parent_directories() {
        let out = create_test_root();
        let relative_path = RelativePath::new("html/semantics.html");

        let written = write_output(relative_path, out.path(), "<h1>Semantics</h1>").unwrap();

        assert_eq!(written, out.path().join("html").join("semantics.html"));
        assert_eq!(
            std::fs::read_to_string(&written).unwrap(),
            "<h1>Semantics</h1>"
        );
    }

    #[test]
    fn test_write_output_overwrites_existing() {
        let out = create_test_root();
        create_test_file(&out, "page.html", "old");

        write_output(RelativePath::new("page.html"), out.path(), "new").unwrap();
        assert_eq!(
            std::fs::read_to_string(out.path().join("page.html")).unwrap(),
            "new"
        );
    }
}
