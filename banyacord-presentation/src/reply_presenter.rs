use crate::keyboard;
use banyacord_application::{ConversationId, FlowWarning, Reply, Response};
use banyacord_domain::{PaidCategory, SettlementReport};
use banyacord_i18n as i18n;
use std::collections::HashMap;
use std::fmt::Write;

pub struct ReplyPresenter;

impl ReplyPresenter {
    /// Render one semantic reply into the outbound text plus buttons.
    pub fn render(conversation: ConversationId, reply: &Reply) -> Response {
        let (text, buttons) = match reply {
            Reply::Menu => (i18n::MENU_PROMPT.to_string(), keyboard::main_menu()),
            Reply::NamePrompt => (i18n::NAME_PROMPT.to_string(), keyboard::cancel_only()),
            Reply::ParticipantAdded { name } => (i18n::participant_added(name), Vec::new()),
            Reply::RemovalPrompt { lines } => (
                i18n::REMOVAL_PROMPT.to_string(),
                keyboard::removal_roster(lines),
            ),
            Reply::ParticipantRemoved { name } => (i18n::participant_removed(name), Vec::new()),
            Reply::Roster { names } => (Self::render_roster(names), Vec::new()),
            Reply::AttendancePrompt { lines } => (
                i18n::ATTENDANCE_PROMPT.to_string(),
                keyboard::attendance_roster(lines),
            ),
            Reply::DrinkersPrompt { lines } => (
                i18n::DRINKERS_PROMPT.to_string(),
                keyboard::drinker_roster(lines),
            ),
            Reply::RoundStarted {
                attendees,
                drinkers,
            } => (i18n::round_started(*attendees, *drinkers), Vec::new()),
            Reply::ExpensePayerPrompt { lines } => (
                i18n::EXPENSE_PARTICIPANT_PROMPT.to_string(),
                keyboard::payer_roster(lines),
            ),
            Reply::CategoryPrompt { payer } => {
                (i18n::category_prompt(payer), keyboard::categories())
            }
            Reply::AmountPrompt { payer, category } => (
                i18n::amount_prompt(payer, category_label(*category)),
                keyboard::cancel_only(),
            ),
            Reply::ExpenseRecorded {
                payer,
                category,
                amount,
            } => (
                i18n::expense_recorded(payer, category_label(*category), *amount),
                Vec::new(),
            ),
            Reply::BathCostPrompt => (i18n::BATH_COST_PROMPT.to_string(), keyboard::cancel_only()),
            Reply::BathCostSet { amount } => (i18n::bath_cost_set(*amount), Vec::new()),
            Reply::Settlement { report, directory } => {
                (Self::render_settlement(report, directory), Vec::new())
            }
            Reply::Warning(warning) => (Self::render_warning(warning), Vec::new()),
        };

        Response {
            conversation,
            text,
            buttons,
        }
    }

    fn render_roster(names: &[String]) -> String {
        if names.is_empty() {
            return i18n::ROSTER_EMPTY.to_string();
        }
        let mut text = i18n::ROSTER_HEADER.to_string();
        for (position, name) in names.iter().enumerate() {
            let _ = write!(text, "\n{}. {name}", position + 1);
        }
        text
    }

    fn render_settlement(
        report: &SettlementReport,
        directory: &HashMap<banyacord_domain::ParticipantId, String>,
    ) -> String {
        let mut text = format!(
            "📊 {}: {}\n{}: {} | {}: {} | {}: {}\n{} ({}): {} | {} | {}",
            i18n::TOTAL_SPENT,
            format_amount(report.total_spent),
            i18n::TOTAL_FOOD,
            format_amount(report.total_food),
            i18n::TOTAL_ALCOHOL,
            format_amount(report.total_alcohol),
            i18n::BATH_COST,
            format_amount(report.bath_cost),
            i18n::BATH_COST,
            i18n::PER_PERSON,
            format_amount(report.per_person_bath),
            format_amount(report.per_person_food),
            format_amount(report.per_person_alcohol),
        );

        for share in &report.shares {
            let name = directory
                .get(&share.id)
                .map(String::as_str)
                .unwrap_or("<?>");
            let _ = write!(
                text,
                "\n{name}: {} {}, ",
                i18n::PAID,
                format_amount(share.paid)
            );
            if share.owed >= 0.0 {
                let _ = write!(text, "{} {}", i18n::OWES, format_amount(share.owed));
            } else {
                let _ = write!(text, "{} {}", i18n::REFUND, format_amount(-share.owed));
            }
        }

        text
    }

    fn render_warning(warning: &FlowWarning) -> String {
        match warning {
            FlowWarning::DuplicateName { name } => i18n::duplicate_name(name),
            FlowWarning::EmptyName => i18n::EMPTY_NAME.to_string(),
            FlowWarning::EmptyRegistry => i18n::EMPTY_REGISTRY.to_string(),
            FlowWarning::NoAttendanceYet => i18n::NO_ATTENDANCE_YET.to_string(),
            FlowWarning::EmptyAttendance => i18n::EMPTY_ATTENDANCE.to_string(),
            FlowWarning::BathCostUnset => i18n::BATH_COST_UNSET.to_string(),
            FlowWarning::InvalidAmount { input } => i18n::invalid_amount(input),
            FlowWarning::NotFound => i18n::NOT_FOUND.to_string(),
            FlowWarning::UnknownCommand => i18n::UNKNOWN_COMMAND.to_string(),
        }
    }
}

fn category_label(category: PaidCategory) -> &'static str {
    match category {
        PaidCategory::Food => i18n::CATEGORY_FOOD,
        PaidCategory::Alcohol => i18n::CATEGORY_ALCOHOL,
    }
}

/// Whole amounts drop the fraction, everything else keeps two digits.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
