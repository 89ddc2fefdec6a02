//! One module per resource family. Each adds its operations to [`crate::client::WitClient`].

pub mod entities;
pub mod intents;
pub mod messages;
