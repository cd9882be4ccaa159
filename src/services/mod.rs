pub mod api;
pub mod normalize;

pub use api::ApiService;
pub use normalize::normalize;
