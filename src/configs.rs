pub mod base;
pub mod wit;

pub use base::ClientConfig;
pub use wit::WitConfig;
