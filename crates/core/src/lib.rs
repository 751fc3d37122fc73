pub mod error;
pub mod locator;
pub mod logging;
pub mod paths;
pub mod scanner;
pub mod session;
pub mod watch;
pub mod workspace;

pub use error::Result;
pub use locator::{Locator, classify};
pub use scanner::ReferenceScanner;
pub use session::{Session, StatusReport};
pub use workspace::FsWorkspace;
