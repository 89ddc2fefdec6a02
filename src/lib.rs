//! Blocking client for the Wit.ai natural language API.
//!
//! ```no_run
//! use wit::{MessageRequest, WitClient, WitConfig};
//!
//! fn main() -> Result<(), wit::WitError> {
//!     let client = WitClient::new(WitConfig::new("<ACCESS-TOKEN>"))?;
//!
//!     let message = client.message(&MessageRequest::text("what's the weather in Paris?"))?;
//!     if let Some(outcome) = message.first_outcome() {
//!         println!("{} ({:?})", outcome.intent, outcome.confidence);
//!     }
//!
//!     let entity = client.entity("wit$temperature")?;
//!     println!("{}", entity.id);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod configs;
pub mod errors;
pub mod resources;
pub mod types;
pub mod utils;

pub use client::WitClient;
pub use configs::{ClientConfig, WitConfig};
pub use errors::{WitError, WitResult};
pub use types::{
    DatetimeIntervalEnd, Deleted, Entity, EntityValue, EntityVariant, Intent, Message,
    MessageContext, MessageEntity, MessageRequest, Outcome,
};
