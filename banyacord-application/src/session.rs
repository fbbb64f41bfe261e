use banyacord_domain::{
    ExpenseLedger, PaidCategory, ParticipantId, ParticipantRegistry,
};
use fxhash::FxHashSet;

/// Interaction state of one conversation. Each variant carries exactly
/// the pending context it needs, so entering a new state can never leak
/// stale fields from the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    AddingParticipant,
    RemovingParticipant,
    SelectingAttendance,
    SelectingDrinkers,
    SelectingExpensePayer,
    SelectingExpenseCategory {
        payer: ParticipantId,
    },
    EnteringAmount {
        payer: ParticipantId,
        category: PaidCategory,
    },
    EnteringBathCost,
}

/// The full per-conversation state: registry, ledger, attendance sets and
/// the session. Owned exclusively by the router entry for its
/// conversation; handlers mutate it with run-to-completion semantics.
#[derive(Debug, Default, Clone)]
pub struct GroupContext {
    pub registry: ParticipantRegistry,
    pub ledger: ExpenseLedger,
    pub attendance: FxHashSet<ParticipantId>,
    pub drinkers: FxHashSet<ParticipantId>,
    pub session: SessionState,
}

impl GroupContext {
    pub fn new() -> Self {
        Self::default()
    }
}
