use crate::error::FlowWarning;
use banyacord_domain::{PaidCategory, ParticipantId, SettlementReport};
use std::collections::HashMap;

/// Identity of one ongoing conversation. Every conversation owns an
/// isolated registry/ledger/session triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversationId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SenderId(pub u64);

/// What the transport delivered: free text or a button selection carrying
/// its callback id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventPayload {
    Text(String),
    ButtonSelection(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundEvent {
    pub conversation: ConversationId,
    pub sender: SenderId,
    pub payload: EventPayload,
}

/// A logical button; the transport decides how to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback: String,
}

/// Outbound payload: plain text plus an ordered button list. Never
/// platform-specific markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub conversation: ConversationId,
    pub text: String,
    pub buttons: Vec<Button>,
}

/// One roster row for selection prompts. `marked` reflects membership in
/// the set currently being toggled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterLine {
    pub id: ParticipantId,
    pub name: String,
    pub marked: bool,
}

/// Semantic outcome of one handled event, rendered into a `Response` by
/// the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Menu,
    NamePrompt,
    ParticipantAdded { name: String },
    RemovalPrompt { lines: Vec<RosterLine> },
    ParticipantRemoved { name: String },
    Roster { names: Vec<String> },
    AttendancePrompt { lines: Vec<RosterLine> },
    DrinkersPrompt { lines: Vec<RosterLine> },
    RoundStarted { attendees: usize, drinkers: usize },
    ExpensePayerPrompt { lines: Vec<RosterLine> },
    CategoryPrompt { payer: String },
    AmountPrompt { payer: String, category: PaidCategory },
    ExpenseRecorded { payer: String, category: PaidCategory, amount: f64 },
    BathCostPrompt,
    BathCostSet { amount: f64 },
    Settlement { report: SettlementReport, directory: HashMap<ParticipantId, String> },
    Warning(FlowWarning),
}
