pub mod entity;
pub mod intent;
pub mod message;

pub use entity::{Deleted, Entity, EntityValue};
pub use intent::Intent;
pub use message::{
    DatetimeIntervalEnd, EntityVariant, Message, MessageContext, MessageEntity, MessageRequest,
    Outcome,
};
