pub mod errors;
pub mod fs;
pub mod types;

pub use errors::{CodecError, ConfigError, PlatformError, StoreError, TreeError, VsplitError};
pub use fs::{write_atomic, WriteFailure};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, VsplitError>;
