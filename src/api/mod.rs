pub mod http;
pub mod models;
pub mod traits;

pub use http::HttpBackend;
pub use models::{DirectDownload, FormatDescriptor, VideoMetadata, VideoQuery};
pub use traits::Backend;
