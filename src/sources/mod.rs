pub mod file;
pub mod traits;
pub mod types;

pub use file::FileSource;
pub use traits::PageSource;
pub use types::{Page, RunParams};
