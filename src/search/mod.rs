pub mod input;
pub mod params;

pub use input::{parse_url, SearchInput, UrlFields};
pub use params::{build_params, QueryParams};
