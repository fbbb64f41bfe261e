use banyacord_application::Button;
use serenity::all::{ButtonStyle, CreateActionRow, CreateButton};

/// Discord caps components at 5 buttons per row and 5 rows per message.
const BUTTONS_PER_ROW: usize = 5;
const MAX_ROWS: usize = 5;

/// Lay logical buttons out into action rows, dropping anything past the
/// component limit. Twenty-five buttons cover a roster far larger than a
/// realistic bath-house group.
pub fn to_action_rows(buttons: &[Button]) -> Vec<CreateActionRow> {
    buttons
        .chunks(BUTTONS_PER_ROW)
        .take(MAX_ROWS)
        .map(|chunk| {
            let row = chunk
                .iter()
                .map(|button| {
                    CreateButton::new(&button.callback)
                        .label(&button.label)
                        .style(ButtonStyle::Secondary)
                })
                .collect();
            CreateActionRow::Buttons(row)
        })
        .collect()
}
