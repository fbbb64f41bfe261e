pub mod command;
pub mod engine;
pub mod error;
pub mod model;
pub mod router;
pub mod session;

pub use command::Command;
pub use engine::SessionEngine;
pub use error::FlowWarning;
pub use model::{
    Button, ConversationId, EventPayload, InboundEvent, Reply, Response, RosterLine, SenderId,
};
pub use router::ConversationRouter;
pub use session::{GroupContext, SessionState};
