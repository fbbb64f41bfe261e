use crate::{
    engine::SessionEngine,
    model::{ConversationId, InboundEvent, Reply},
    session::GroupContext,
};
use dashmap::DashMap;

/// Routes inbound events to per-conversation state.
///
/// Each conversation gets its own `GroupContext`, created lazily on first
/// contact. Handling is synchronous and happens under the map entry's
/// guard, so events for the same conversation are serialized while
/// different conversations proceed in parallel.
#[derive(Debug, Default)]
pub struct ConversationRouter {
    contexts: DashMap<ConversationId, GroupContext>,
}

impl ConversationRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&self, event: &InboundEvent) -> Reply {
        let mut ctx = self.contexts.entry(event.conversation).or_default();
        SessionEngine::handle(&mut ctx, &event.payload)
    }

    /// Number of conversations that have been contacted at least once.
    pub fn conversation_count(&self) -> usize {
        self.contexts.len()
    }
}
