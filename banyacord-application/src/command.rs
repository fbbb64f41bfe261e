use banyacord_domain::{PaidCategory, ParticipantId};

/// The enumerated command vocabulary. Every button carries one of these
/// encoded as its callback id; free-form caption matching is deliberately
/// not part of the dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Menu,
    AddParticipant,
    RemoveParticipant,
    ListParticipants,
    StartRound,
    ToggleAttendee(ParticipantId),
    FinalizeAttendance,
    ToggleDrinker(ParticipantId),
    FinalizeDrinkers,
    AddExpense,
    ChooseExpensePayer(ParticipantId),
    ChooseCategory(PaidCategory),
    ChooseRemoval(ParticipantId),
    SetBathCost,
    Settle,
    Cancel,
}

impl Command {
    pub fn encode(self) -> String {
        match self {
            Command::Menu => "menu".to_string(),
            Command::AddParticipant => "participant:add".to_string(),
            Command::RemoveParticipant => "participant:remove".to_string(),
            Command::ListParticipants => "participant:list".to_string(),
            Command::StartRound => "round:start".to_string(),
            Command::ToggleAttendee(id) => format!("attendee:{id}"),
            Command::FinalizeAttendance => "attendance:done".to_string(),
            Command::ToggleDrinker(id) => format!("drinker:{id}"),
            Command::FinalizeDrinkers => "drinkers:done".to_string(),
            Command::AddExpense => "expense:add".to_string(),
            Command::ChooseExpensePayer(id) => format!("payer:{id}"),
            Command::ChooseCategory(PaidCategory::Food) => "category:food".to_string(),
            Command::ChooseCategory(PaidCategory::Alcohol) => "category:alcohol".to_string(),
            Command::ChooseRemoval(id) => format!("removal:{id}"),
            Command::SetBathCost => "bath:set".to_string(),
            Command::Settle => "settle".to_string(),
            Command::Cancel => "cancel".to_string(),
        }
    }

    pub fn parse(callback: &str) -> Option<Self> {
        match callback {
            "menu" => return Some(Command::Menu),
            "participant:add" => return Some(Command::AddParticipant),
            "participant:remove" => return Some(Command::RemoveParticipant),
            "participant:list" => return Some(Command::ListParticipants),
            "round:start" => return Some(Command::StartRound),
            "attendance:done" => return Some(Command::FinalizeAttendance),
            "drinkers:done" => return Some(Command::FinalizeDrinkers),
            "expense:add" => return Some(Command::AddExpense),
            "category:food" => return Some(Command::ChooseCategory(PaidCategory::Food)),
            "category:alcohol" => return Some(Command::ChooseCategory(PaidCategory::Alcohol)),
            "bath:set" => return Some(Command::SetBathCost),
            "settle" => return Some(Command::Settle),
            "cancel" => return Some(Command::Cancel),
            _ => {}
        }

        let (prefix, raw_id) = callback.split_once(':')?;
        let id = ParticipantId(raw_id.parse().ok()?);
        match prefix {
            "attendee" => Some(Command::ToggleAttendee(id)),
            "drinker" => Some(Command::ToggleDrinker(id)),
            "payer" => Some(Command::ChooseExpensePayer(id)),
            "removal" => Some(Command::ChooseRemoval(id)),
            _ => None,
        }
    }
}
