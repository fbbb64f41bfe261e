//! End-to-end session flows driven through the router, the way a
//! transport would deliver them.

use banyacord_application::{
    Command, ConversationId, ConversationRouter, EventPayload, FlowWarning, InboundEvent, Reply,
    SenderId,
};
use banyacord_domain::{PaidCategory, ParticipantId};

const CHAT: u64 = 100;

fn press(router: &ConversationRouter, conversation: u64, command: Command) -> Reply {
    router.handle_event(&InboundEvent {
        conversation: ConversationId(conversation),
        sender: SenderId(1),
        payload: EventPayload::ButtonSelection(command.encode()),
    })
}

fn say(router: &ConversationRouter, conversation: u64, text: &str) -> Reply {
    router.handle_event(&InboundEvent {
        conversation: ConversationId(conversation),
        sender: SenderId(1),
        payload: EventPayload::Text(text.to_string()),
    })
}

fn register(router: &ConversationRouter, conversation: u64, name: &str) -> ParticipantId {
    press(router, conversation, Command::AddParticipant);
    let reply = say(router, conversation, name);
    assert!(matches!(reply, Reply::ParticipantAdded { .. }));

    // The roster echoes registration order; the fresh participant is last.
    let Reply::RemovalPrompt { lines } = press(router, conversation, Command::RemoveParticipant)
    else {
        panic!("expected a removal prompt");
    };
    let id = lines.last().expect("roster must not be empty").id;
    press(router, conversation, Command::Cancel);
    id
}

fn open_round(router: &ConversationRouter, conversation: u64, attendees: &[ParticipantId]) {
    press(router, conversation, Command::StartRound);
    for &id in attendees {
        press(router, conversation, Command::ToggleAttendee(id));
    }
    press(router, conversation, Command::FinalizeAttendance);
}

fn record(
    router: &ConversationRouter,
    conversation: u64,
    payer: ParticipantId,
    category: PaidCategory,
    amount: &str,
) -> Reply {
    press(router, conversation, Command::AddExpense);
    press(router, conversation, Command::ChooseExpensePayer(payer));
    press(router, conversation, Command::ChooseCategory(category));
    say(router, conversation, amount)
}

#[test]
fn full_round_produces_the_expected_settlement() {
    let router = ConversationRouter::new();
    let alice = register(&router, CHAT, "Alice");
    let bob = register(&router, CHAT, "Bob");

    open_round(&router, CHAT, &[alice, bob]);
    press(&router, CHAT, Command::ToggleDrinker(alice));
    press(&router, CHAT, Command::ToggleDrinker(bob));
    let reply = press(&router, CHAT, Command::FinalizeDrinkers);
    assert_eq!(
        reply,
        Reply::RoundStarted {
            attendees: 2,
            drinkers: 2
        }
    );

    press(&router, CHAT, Command::SetBathCost);
    say(&router, CHAT, "200");
    record(&router, CHAT, alice, PaidCategory::Food, "100");
    record(&router, CHAT, bob, PaidCategory::Alcohol, "50");

    let Reply::Settlement { report, directory } = press(&router, CHAT, Command::Settle) else {
        panic!("expected a settlement");
    };

    assert_eq!(report.total_spent, 350.0);
    assert_eq!(report.bath_cost, 200.0);
    assert_eq!(report.shares.len(), 2);
    assert_eq!(report.shares[0].owed, 75.0);
    assert_eq!(report.shares[1].owed, 125.0);
    assert_eq!(directory[&alice], "Alice");
    assert_eq!(directory[&bob], "Bob");
}

#[test]
fn non_drinkers_are_exempt_from_the_alcohol_pool() {
    let router = ConversationRouter::new();
    let alice = register(&router, CHAT, "Alice");
    let bob = register(&router, CHAT, "Bob");

    open_round(&router, CHAT, &[alice, bob]);
    press(&router, CHAT, Command::ToggleDrinker(bob));
    press(&router, CHAT, Command::FinalizeDrinkers);

    press(&router, CHAT, Command::SetBathCost);
    say(&router, CHAT, "0");
    record(&router, CHAT, bob, PaidCategory::Alcohol, "60");

    let Reply::Settlement { report, .. } = press(&router, CHAT, Command::Settle) else {
        panic!("expected a settlement");
    };

    // Bob drinks alone and already paid for it all.
    assert_eq!(report.per_person_alcohol, 60.0);
    assert_eq!(report.shares[0].owed, 0.0);
    assert_eq!(report.shares[1].owed, 0.0);
}

#[test]
fn reselecting_attendance_discards_previous_expenses() {
    let router = ConversationRouter::new();
    let alice = register(&router, CHAT, "Alice");

    open_round(&router, CHAT, &[alice]);
    press(&router, CHAT, Command::FinalizeDrinkers);
    press(&router, CHAT, Command::SetBathCost);
    say(&router, CHAT, "500");
    record(&router, CHAT, alice, PaidCategory::Food, "300");

    // A new attendance selection starts a fresh round.
    open_round(&router, CHAT, &[alice]);
    press(&router, CHAT, Command::FinalizeDrinkers);

    let reply = press(&router, CHAT, Command::Settle);
    assert_eq!(reply, Reply::Warning(FlowWarning::BathCostUnset));

    press(&router, CHAT, Command::SetBathCost);
    say(&router, CHAT, "100");
    let Reply::Settlement { report, .. } = press(&router, CHAT, Command::Settle) else {
        panic!("expected a settlement");
    };
    assert_eq!(report.total_spent, 100.0);
    assert_eq!(report.shares[0].owed, 100.0);
}

#[test]
fn stale_buttons_after_removal_warn_instead_of_crashing() {
    let router = ConversationRouter::new();
    let alice = register(&router, CHAT, "Alice");
    let bob = register(&router, CHAT, "Bob");

    press(&router, CHAT, Command::RemoveParticipant);
    press(&router, CHAT, Command::ChooseRemoval(bob));

    // Bob's attendance button from an old prompt is still on screen.
    press(&router, CHAT, Command::StartRound);
    let reply = press(&router, CHAT, Command::ToggleAttendee(bob));
    assert_eq!(reply, Reply::Warning(FlowWarning::NotFound));

    let reply = press(&router, CHAT, Command::ToggleAttendee(alice));
    assert!(matches!(reply, Reply::AttendancePrompt { .. }));
}

#[test]
fn invalid_amount_keeps_the_entry_flow_alive() {
    let router = ConversationRouter::new();
    let alice = register(&router, CHAT, "Alice");

    open_round(&router, CHAT, &[alice]);
    press(&router, CHAT, Command::FinalizeDrinkers);

    let reply = record(&router, CHAT, alice, PaidCategory::Food, "banya");
    assert_eq!(
        reply,
        Reply::Warning(FlowWarning::InvalidAmount {
            input: "banya".to_string()
        })
    );

    // Still in the amount state; a decimal comma is accepted.
    let reply = say(&router, CHAT, "99,5");
    assert_eq!(
        reply,
        Reply::ExpenseRecorded {
            payer: "Alice".to_string(),
            category: PaidCategory::Food,
            amount: 99.5
        }
    );
}

#[test]
fn parallel_conversations_settle_independently() {
    let router = ConversationRouter::new();

    let alice = register(&router, 1, "Alice");
    let vera = register(&router, 2, "Vera");

    open_round(&router, 1, &[alice]);
    press(&router, 1, Command::FinalizeDrinkers);
    press(&router, 1, Command::SetBathCost);
    say(&router, 1, "300");

    open_round(&router, 2, &[vera]);
    press(&router, 2, Command::FinalizeDrinkers);
    press(&router, 2, Command::SetBathCost);
    say(&router, 2, "40");

    let Reply::Settlement { report, .. } = press(&router, 1, Command::Settle) else {
        panic!("expected a settlement in conversation 1");
    };
    assert_eq!(report.bath_cost, 300.0);

    let Reply::Settlement { report, .. } = press(&router, 2, Command::Settle) else {
        panic!("expected a settlement in conversation 2");
    };
    assert_eq!(report.bath_cost, 40.0);
}
