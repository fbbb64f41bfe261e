//! Button layouts for each prompt. Labels come from the i18n crate,
//! callback ids from the command vocabulary, so the transport layer never
//! needs to know either.

use banyacord_application::{Button, Command, RosterLine};
use banyacord_domain::PaidCategory;
use banyacord_i18n as i18n;

pub fn main_menu() -> Vec<Button> {
    vec![
        button(i18n::BTN_ADD_PARTICIPANT, Command::AddParticipant),
        button(i18n::BTN_REMOVE_PARTICIPANT, Command::RemoveParticipant),
        button(i18n::BTN_LIST_PARTICIPANTS, Command::ListParticipants),
        button(i18n::BTN_START_ROUND, Command::StartRound),
        button(i18n::BTN_ADD_EXPENSE, Command::AddExpense),
        button(i18n::BTN_SET_BATH_COST, Command::SetBathCost),
        button(i18n::BTN_SETTLE, Command::Settle),
    ]
}

pub fn cancel_only() -> Vec<Button> {
    vec![button(i18n::BTN_CANCEL, Command::Cancel)]
}

pub fn categories() -> Vec<Button> {
    vec![
        button(i18n::BTN_FOOD, Command::ChooseCategory(PaidCategory::Food)),
        button(
            i18n::BTN_ALCOHOL,
            Command::ChooseCategory(PaidCategory::Alcohol),
        ),
        button(i18n::BTN_CANCEL, Command::Cancel),
    ]
}

pub fn attendance_roster(lines: &[RosterLine]) -> Vec<Button> {
    toggle_roster(lines, Command::ToggleAttendee, Command::FinalizeAttendance)
}

pub fn drinker_roster(lines: &[RosterLine]) -> Vec<Button> {
    toggle_roster(lines, Command::ToggleDrinker, Command::FinalizeDrinkers)
}

pub fn payer_roster(lines: &[RosterLine]) -> Vec<Button> {
    let mut buttons: Vec<Button> = lines
        .iter()
        .map(|line| roster_button(line, Command::ChooseExpensePayer(line.id)))
        .collect();
    buttons.push(button(i18n::BTN_CANCEL, Command::Cancel));
    buttons
}

pub fn removal_roster(lines: &[RosterLine]) -> Vec<Button> {
    let mut buttons: Vec<Button> = lines
        .iter()
        .map(|line| roster_button(line, Command::ChooseRemoval(line.id)))
        .collect();
    buttons.push(button(i18n::BTN_CANCEL, Command::Cancel));
    buttons
}

fn toggle_roster(
    lines: &[RosterLine],
    toggle: impl Fn(banyacord_domain::ParticipantId) -> Command,
    done: Command,
) -> Vec<Button> {
    let mut buttons: Vec<Button> = lines
        .iter()
        .map(|line| roster_button(line, toggle(line.id)))
        .collect();
    buttons.push(button(i18n::BTN_DONE, done));
    buttons.push(button(i18n::BTN_CANCEL, Command::Cancel));
    buttons
}

fn roster_button(line: &RosterLine, command: Command) -> Button {
    let label = if line.marked {
        format!("✅ {}", line.name)
    } else {
        line.name.clone()
    };
    Button {
        label,
        callback: command.encode(),
    }
}

fn button(label: &str, command: Command) -> Button {
    Button {
        label: label.to_string(),
        callback: command.encode(),
    }
}
