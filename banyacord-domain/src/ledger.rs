use crate::model::{Amount, LedgerEntry, PaidCategory, ParticipantId};
use fxhash::FxHashMap;

/// Accumulating record of per-participant category expenses plus the
/// shared bath cost for the current round.
///
/// The bath cost is an `Option` so that "never set this round" can be
/// told apart from an explicit zero; it reads as 0 in totals while unset.
#[derive(Debug, Default, Clone)]
pub struct ExpenseLedger {
    entries: FxHashMap<ParticipantId, LedgerEntry>,
    bath_cost: Option<f64>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate an expense into the participant's category total.
    pub fn add_expense(&mut self, id: ParticipantId, category: PaidCategory, amount: Amount) {
        let entry = self.entries.entry(id).or_default();
        match category {
            PaidCategory::Food => entry.food += amount.get(),
            PaidCategory::Alcohol => entry.alcohol += amount.get(),
        }
    }

    /// Overwrite the shared bath cost. Set once per round, not accumulated.
    pub fn set_bath_cost(&mut self, amount: Amount) {
        self.bath_cost = Some(amount.get());
    }

    pub fn bath_cost(&self) -> f64 {
        self.bath_cost.unwrap_or(0.0)
    }

    pub fn is_bath_cost_set(&self) -> bool {
        self.bath_cost.is_some()
    }

    /// Zero every per-participant total and clear the bath cost.
    ///
    /// Invoked when a new attendance round is finalized so that expenses
    /// recorded for a previous event never pollute a new settlement.
    pub fn reset_round(&mut self) {
        self.entries.clear();
        self.bath_cost = None;
    }

    pub fn entry(&self, id: ParticipantId) -> LedgerEntry {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    /// Food + alcohol paid by this participant. Bath is never attributed
    /// to an individual payer.
    pub fn total_paid_by(&self, id: ParticipantId) -> f64 {
        self.entry(id).total()
    }

    pub fn remove_participant(&mut self, id: ParticipantId) {
        self.entries.remove(&id);
    }
}
