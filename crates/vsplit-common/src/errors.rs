use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    #[error("node {0} does not exist")]
    UnknownNode(usize),

    #[error("node {0} is not a leaf")]
    NotALeaf(usize),

    #[error("node {0} is not a split")]
    NotASplit(usize),

    #[error("invalid split offset: {0}")]
    InvalidOffset(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("malformed tree: {0}")]
    MalformedTree(String),

    #[error("malformed store: {0}")]
    MalformedStore(String),

    #[error("syntax error: unexpected token '{0}'")]
    SyntaxError(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("a configuration for this monitor is already present as {0}")]
    DuplicateConfiguration(String),

    #[error("no configuration named '{0}'")]
    NotFound(String),

    #[error("failed to access {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<crate::fs::WriteFailure> for StoreError {
    fn from(e: crate::fs::WriteFailure) -> Self {
        StoreError::IoFailure {
            path: e.path,
            source: e.source,
        }
    }
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::IoFailure {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("display query error: {0}")]
    DisplayQuery(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VsplitError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_error_display() {
        assert_eq!(TreeError::NotALeaf(3).to_string(), "node 3 is not a leaf");
        assert_eq!(TreeError::NotASplit(0).to_string(), "node 0 is not a split");
        assert_eq!(
            TreeError::InvalidOffset(-4.0).to_string(),
            "invalid split offset: -4"
        );
    }

    #[test]
    fn codec_error_display() {
        let err = CodecError::MalformedTree("unexpected end of input".into());
        assert_eq!(err.to_string(), "malformed tree: unexpected end of input");

        let err = CodecError::SyntaxError("X".into());
        assert_eq!(err.to_string(), "syntax error: unexpected token 'X'");

        let err = CodecError::MalformedStore("record 2 truncated".into());
        assert_eq!(err.to_string(), "malformed store: record 2 truncated");
    }

    #[test]
    fn store_error_duplicate_names_existing() {
        let err = StoreError::DuplicateConfiguration("HDMI1@1920x1080".into());
        assert_eq!(
            err.to_string(),
            "a configuration for this monitor is already present as HDMI1@1920x1080"
        );
    }

    #[test]
    fn store_error_io_includes_path() {
        let err = StoreError::io(
            "/tmp/fakexrandr.bin",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, StoreError::IoFailure { .. }));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/fakexrandr.bin"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn store_error_from_codec() {
        let err: StoreError = CodecError::MalformedStore("short".into()).into();
        assert!(matches!(err, StoreError::Codec(CodecError::MalformedStore(_))));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("editor.canvas_width = 5".into());
        assert_eq!(
            err.to_string(),
            "config validation error: editor.canvas_width = 5"
        );
    }

    #[test]
    fn vsplit_error_conversions() {
        let err: VsplitError = TreeError::UnknownNode(9).into();
        assert!(matches!(err, VsplitError::Tree(_)));

        let err: VsplitError = PlatformError::DisplayQuery("no display".into()).into();
        assert!(matches!(err, VsplitError::Platform(_)));
        assert!(err.to_string().contains("no display"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VsplitError = io_err.into();
        assert!(matches!(err, VsplitError::Io(_)));
        assert!(err.to_string().contains("file missing"));

        let err = VsplitError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
