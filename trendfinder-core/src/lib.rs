pub mod config;
pub mod error;
pub mod error_utils;
pub mod filter;
pub mod keywords;
pub mod normalize;
pub mod raw;
pub mod source;
pub mod types;

pub use config::*;
pub use error::*;
pub use error_utils::*;
pub use filter::*;
pub use normalize::*;
pub use raw::*;
pub use source::*;
pub use types::*;
