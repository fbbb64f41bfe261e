use crate::buttons::to_action_rows;
use banyacord_application::{
    ConversationId, ConversationRouter, EventPayload, InboundEvent, Response, SenderId,
};
use banyacord_presentation::ReplyPresenter;
use serenity::{
    all::{ComponentInteraction, CreateInteractionResponse, CreateMessage, Interaction},
    async_trait,
    model::{channel::Message, gateway::Ready},
    prelude::*,
};

/// Discord event handler. Channels map one-to-one onto conversations, so
/// every channel gets its own registry, ledger and session.
pub struct BotHandler {
    router: ConversationRouter,
}

impl BotHandler {
    pub fn new(router: ConversationRouter) -> Self {
        Self { router }
    }

    fn dispatch(&self, event: InboundEvent) -> Response {
        let conversation = event.conversation;
        let reply = self.router.handle_event(&event);
        ReplyPresenter::render(conversation, &reply)
    }

    async fn send_response(&self, ctx: &Context, response: Response) {
        let channel_id = serenity::all::ChannelId::new(response.conversation.0);
        let mut builder = CreateMessage::new().content(response.text);
        if !response.buttons.is_empty() {
            builder = builder.components(to_action_rows(&response.buttons));
        }

        if let Err(e) = channel_id.send_message(&ctx.http, builder).await {
            tracing::error!("Failed to send message to {}: {:?}", channel_id, e);
        }
    }

    async fn handle_component(&self, ctx: &Context, component: &ComponentInteraction) {
        if let Err(e) = component
            .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
            .await
        {
            tracing::warn!("Failed to acknowledge interaction: {:?}", e);
        }

        let event = InboundEvent {
            conversation: ConversationId(component.channel_id.get()),
            sender: SenderId(component.user.id.get()),
            payload: EventPayload::ButtonSelection(component.data.custom_id.clone()),
        };
        let response = self.dispatch(event);
        self.send_response(ctx, response).await;
    }
}

#[async_trait]
impl EventHandler for BotHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let event = InboundEvent {
            conversation: ConversationId(msg.channel_id.get()),
            sender: SenderId(msg.author.id.get()),
            payload: EventPayload::Text(msg.content.clone()),
        };
        let response = self.dispatch(event);
        self.send_response(&ctx, response).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Component(component) = interaction {
            self.handle_component(&ctx, &component).await;
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("Connected as {}", ready.user.name);
    }
}
