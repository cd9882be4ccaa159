pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod storage;

pub use clients::HttpClient;
pub use config::Settings;
pub use error::{Error, Result};
pub use models::JobRecord;
pub use search::{build_params, SearchInput};
pub use services::{normalize, ApiService};
pub use storage::CsvWriter;
