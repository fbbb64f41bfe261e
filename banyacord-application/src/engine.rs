use crate::{
    command::Command,
    error::FlowWarning,
    model::{EventPayload, Reply, RosterLine},
    session::{GroupContext, SessionState},
};
use banyacord_domain::{
    Amount, ParticipantId, RegistryError, SettlementCalculator,
};
use fxhash::FxHashSet;
use std::collections::HashMap;

/// Dispatches one inbound event against the conversation's current state.
///
/// Menu-level commands are accepted from any state and implicitly abandon
/// an unfinished flow; flow-level commands (toggles, selections) are only
/// valid in their own state and answer with a recoverable warning
/// otherwise. Text is meaningful only in the three text-expecting states.
pub struct SessionEngine;

impl SessionEngine {
    pub fn handle(ctx: &mut GroupContext, payload: &EventPayload) -> Reply {
        match payload {
            EventPayload::ButtonSelection(callback) => match Command::parse(callback) {
                Some(command) => Self::handle_command(ctx, command),
                None => Reply::Warning(FlowWarning::UnknownCommand),
            },
            EventPayload::Text(text) => Self::handle_text(ctx, text),
        }
    }

    fn handle_command(ctx: &mut GroupContext, command: Command) -> Reply {
        match command {
            Command::Menu | Command::Cancel => {
                ctx.session = SessionState::Idle;
                Reply::Menu
            }
            Command::AddParticipant => {
                ctx.session = SessionState::AddingParticipant;
                Reply::NamePrompt
            }
            Command::RemoveParticipant => {
                if ctx.registry.is_empty() {
                    ctx.session = SessionState::Idle;
                    return Reply::Warning(FlowWarning::EmptyRegistry);
                }
                ctx.session = SessionState::RemovingParticipant;
                Reply::RemovalPrompt {
                    lines: Self::roster_lines(ctx, None),
                }
            }
            Command::ListParticipants => {
                ctx.session = SessionState::Idle;
                Reply::Roster {
                    names: ctx
                        .registry
                        .list()
                        .map(|p| p.display_name.clone())
                        .collect(),
                }
            }
            Command::StartRound => {
                if ctx.registry.is_empty() {
                    return Reply::Warning(FlowWarning::EmptyRegistry);
                }
                // A new attendance round starts from a clean slate.
                ctx.attendance.clear();
                ctx.drinkers.clear();
                ctx.session = SessionState::SelectingAttendance;
                Reply::AttendancePrompt {
                    lines: Self::roster_lines(ctx, Some(&ctx.attendance)),
                }
            }
            Command::ToggleAttendee(id) => {
                if ctx.session != SessionState::SelectingAttendance {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                }
                if !ctx.registry.contains(id) {
                    return Reply::Warning(FlowWarning::NotFound);
                }
                if !ctx.attendance.remove(&id) {
                    ctx.attendance.insert(id);
                }
                Reply::AttendancePrompt {
                    lines: Self::roster_lines(ctx, Some(&ctx.attendance)),
                }
            }
            Command::FinalizeAttendance => {
                if ctx.session != SessionState::SelectingAttendance {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                }
                if ctx.attendance.is_empty() {
                    return Reply::Warning(FlowWarning::EmptyAttendance);
                }
                // Round isolation: a freshly selected attendance set means
                // a fresh ledger, so earlier expenses cannot leak in.
                ctx.ledger.reset_round();
                let attendance = ctx.attendance.clone();
                ctx.drinkers.retain(|id| attendance.contains(id));
                ctx.session = SessionState::SelectingDrinkers;
                Reply::DrinkersPrompt {
                    lines: Self::attendee_lines(ctx, &ctx.drinkers),
                }
            }
            Command::ToggleDrinker(id) => {
                if ctx.session != SessionState::SelectingDrinkers {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                }
                if !ctx.attendance.contains(&id) {
                    return Reply::Warning(FlowWarning::NotFound);
                }
                if !ctx.drinkers.remove(&id) {
                    ctx.drinkers.insert(id);
                }
                Reply::DrinkersPrompt {
                    lines: Self::attendee_lines(ctx, &ctx.drinkers),
                }
            }
            Command::FinalizeDrinkers => {
                if ctx.session != SessionState::SelectingDrinkers {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                }
                // An empty drinker set is a legitimate outcome.
                ctx.session = SessionState::Idle;
                Reply::RoundStarted {
                    attendees: ctx.attendance.len(),
                    drinkers: ctx.drinkers.len(),
                }
            }
            Command::AddExpense => {
                if ctx.attendance.is_empty() {
                    ctx.session = SessionState::Idle;
                    return Reply::Warning(FlowWarning::NoAttendanceYet);
                }
                ctx.session = SessionState::SelectingExpensePayer;
                Reply::ExpensePayerPrompt {
                    lines: Self::attendee_lines(ctx, &FxHashSet::default()),
                }
            }
            Command::ChooseExpensePayer(id) => {
                if ctx.session != SessionState::SelectingExpensePayer {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                }
                let Some(payer) = Self::attendee_name(ctx, id) else {
                    return Reply::Warning(FlowWarning::NotFound);
                };
                ctx.session = SessionState::SelectingExpenseCategory { payer: id };
                Reply::CategoryPrompt { payer }
            }
            Command::ChooseCategory(category) => {
                let SessionState::SelectingExpenseCategory { payer } = ctx.session else {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                };
                let Some(name) = Self::attendee_name(ctx, payer) else {
                    // Removed mid-flow; abandon the entry.
                    ctx.session = SessionState::Idle;
                    return Reply::Warning(FlowWarning::NotFound);
                };
                ctx.session = SessionState::EnteringAmount { payer, category };
                Reply::AmountPrompt {
                    payer: name,
                    category,
                }
            }
            Command::ChooseRemoval(id) => {
                if ctx.session != SessionState::RemovingParticipant {
                    return Reply::Warning(FlowWarning::UnknownCommand);
                }
                ctx.session = SessionState::Idle;
                match ctx.registry.remove(id) {
                    Ok(participant) => {
                        ctx.ledger.remove_participant(id);
                        ctx.attendance.remove(&id);
                        ctx.drinkers.remove(&id);
                        Reply::ParticipantRemoved {
                            name: participant.display_name,
                        }
                    }
                    Err(RegistryError::NotFound) => Reply::Warning(FlowWarning::NotFound),
                    Err(_) => Reply::Warning(FlowWarning::UnknownCommand),
                }
            }
            Command::SetBathCost => {
                ctx.session = SessionState::EnteringBathCost;
                Reply::BathCostPrompt
            }
            Command::Settle => {
                ctx.session = SessionState::Idle;
                if ctx.attendance.is_empty() {
                    return Reply::Warning(FlowWarning::NoAttendanceYet);
                }
                if !ctx.ledger.is_bath_cost_set() {
                    return Reply::Warning(FlowWarning::BathCostUnset);
                }
                let report = SettlementCalculator::calculate(
                    &ctx.registry,
                    &ctx.ledger,
                    &ctx.attendance,
                    &ctx.drinkers,
                );
                let directory: HashMap<ParticipantId, String> = report
                    .shares
                    .iter()
                    .filter_map(|share| {
                        ctx.registry
                            .display_name(share.id)
                            .map(|name| (share.id, name.to_string()))
                    })
                    .collect();
                Reply::Settlement { report, directory }
            }
        }
    }

    fn handle_text(ctx: &mut GroupContext, text: &str) -> Reply {
        match ctx.session {
            SessionState::AddingParticipant => {
                ctx.session = SessionState::Idle;
                match ctx.registry.register(text) {
                    Ok(participant) => Reply::ParticipantAdded {
                        name: participant.display_name.clone(),
                    },
                    Err(RegistryError::DuplicateName { name }) => {
                        Reply::Warning(FlowWarning::DuplicateName { name })
                    }
                    Err(RegistryError::EmptyName) => Reply::Warning(FlowWarning::EmptyName),
                    Err(RegistryError::NotFound) => Reply::Warning(FlowWarning::NotFound),
                }
            }
            SessionState::EnteringAmount { payer, category } => {
                let Some(name) = Self::attendee_name(ctx, payer) else {
                    ctx.session = SessionState::Idle;
                    return Reply::Warning(FlowWarning::NotFound);
                };
                match Amount::parse(text) {
                    // Re-prompt in place: the state is kept so the next
                    // message can still be the amount.
                    Ok(amount) if amount.is_zero() => Reply::Warning(FlowWarning::InvalidAmount {
                        input: text.trim().to_string(),
                    }),
                    Ok(amount) => {
                        ctx.ledger.add_expense(payer, category, amount);
                        ctx.session = SessionState::Idle;
                        Reply::ExpenseRecorded {
                            payer: name,
                            category,
                            amount: amount.get(),
                        }
                    }
                    Err(_) => Reply::Warning(FlowWarning::InvalidAmount {
                        input: text.trim().to_string(),
                    }),
                }
            }
            SessionState::EnteringBathCost => match Amount::parse(text) {
                Ok(amount) => {
                    ctx.ledger.set_bath_cost(amount);
                    ctx.session = SessionState::Idle;
                    Reply::BathCostSet {
                        amount: amount.get(),
                    }
                }
                Err(_) => Reply::Warning(FlowWarning::InvalidAmount {
                    input: text.trim().to_string(),
                }),
            },
            // Free text outside a text-expecting state brings up the menu,
            // like the original /start.
            _ => {
                ctx.session = SessionState::Idle;
                Reply::Menu
            }
        }
    }

    fn roster_lines(ctx: &GroupContext, marked: Option<&FxHashSet<ParticipantId>>) -> Vec<RosterLine> {
        ctx.registry
            .list()
            .map(|p| RosterLine {
                id: p.id,
                name: p.display_name.clone(),
                marked: marked.is_some_and(|set| set.contains(&p.id)),
            })
            .collect()
    }

    /// Attendees in registration order, marked against `marked`.
    fn attendee_lines(ctx: &GroupContext, marked: &FxHashSet<ParticipantId>) -> Vec<RosterLine> {
        ctx.registry
            .list()
            .filter(|p| ctx.attendance.contains(&p.id))
            .map(|p| RosterLine {
                id: p.id,
                name: p.display_name.clone(),
                marked: marked.contains(&p.id),
            })
            .collect()
    }

    fn attendee_name(ctx: &GroupContext, id: ParticipantId) -> Option<String> {
        if !ctx.attendance.contains(&id) {
            return None;
        }
        ctx.registry.display_name(id).map(str::to_string)
    }
}
