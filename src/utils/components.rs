use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

pub const CATCH_BUTTON_PREFIX: &str = "crab_catch:";

pub fn catch_button(session_id: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(format!(
        "{CATCH_BUTTON_PREFIX}{session_id}"
    ))
    .label("🎣 Catch Crab!")
    .style(ButtonStyle::Success)])]
}

pub fn catch_button_caught(session_id: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(format!(
        "{CATCH_BUTTON_PREFIX}{session_id}"
    ))
    .label("✅ Caught!")
    .style(ButtonStyle::Success)
    .disabled(true)])]
}

pub fn catch_button_expired(session_id: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(format!(
        "{CATCH_BUTTON_PREFIX}{session_id}"
    ))
    .label("💨 Got Away")
    .style(ButtonStyle::Secondary)
    .disabled(true)])]
}
