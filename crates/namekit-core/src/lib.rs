pub mod checksum;
pub mod error;
pub mod namehash;
pub mod records;
pub mod registry;
pub mod resolver;
pub mod types;


pub use error::ResolutionError;
pub use resolver::NameService;
pub use types::{Address, Namehash};
