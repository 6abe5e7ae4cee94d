//! Operational run: exercises every builder verb against a real channel and records the outcome
//! of each scenario without stopping at the first failure.

use std::fmt;

use anyhow::{anyhow, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use tgram::{Button, Keyboard, MediaGroup, Sent, Telegram};
use tracing::{info, warn};

use crate::fixtures::{TEST_IMAGE, TEST_PDF, TEST_VIDEO};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => f.write_str("Success"),
            Status::Failed => f.write_str("Failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    pub test: &'static str,
    pub status: Status,
    pub message: String,
}

impl ScenarioResult {
    fn from_outcome(test: &'static str, outcome: Result<String>) -> Self {
        match outcome {
            Ok(message) => {
                info!(test, %message, "Scenario passed");
                Self {
                    test,
                    status: Status::Success,
                    message,
                }
            }
            Err(e) => {
                warn!(test, error = %e, "Scenario failed");
                Self {
                    test,
                    status: Status::Failed,
                    message: e.to_string(),
                }
            }
        }
    }
}

fn site_button(label: &str) -> Button {
    Button::make(label).url("https://example.com")
}

/// Runs all scenarios in order. Update, pin and delete reuse the ids produced by the text and
/// photo sends, so they fail with a clear message when those sends failed.
pub async fn run_scenarios(telegram: &mut Telegram, channel: &str) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    let mut message_id = None;
    let mut photo_message_id = None;

    let outcome = send_text(telegram, channel).await.map(|id| {
        message_id = Some(id);
        format!("Text message sent, ID: {}", id)
    });
    results.push(ScenarioResult::from_outcome("Send Text", outcome));

    let outcome = send_photo(telegram, channel).await.map(|id| {
        photo_message_id = Some(id);
        format!("Photo sent, ID: {}", id)
    });
    results.push(ScenarioResult::from_outcome("Send Photo", outcome));

    let outcome = send_document(telegram, channel)
        .await
        .map(|_| "Document sent".to_string());
    results.push(ScenarioResult::from_outcome("Send Document", outcome));

    let outcome = send_media_group(telegram, channel).await.map(|ids| {
        let ids: Vec<String> = ids.iter().map(i32::to_string).collect();
        format!("Media group sent, IDs: {}", ids.join(", "))
    });
    results.push(ScenarioResult::from_outcome("Send Media Group", outcome));

    let outcome = update_text(telegram, channel, message_id)
        .await
        .map(|_| "Message updated".to_string());
    results.push(ScenarioResult::from_outcome("Update Message", outcome));

    let outcome = update_caption(telegram, channel, photo_message_id)
        .await
        .map(|_| "Caption updated".to_string());
    results.push(ScenarioResult::from_outcome("Update Caption", outcome));

    let outcome = pin(telegram, channel, message_id)
        .await
        .map(|_| "Message pinned".to_string());
    results.push(ScenarioResult::from_outcome("Pin Message", outcome));

    let outcome = delete(telegram, channel, message_id)
        .await
        .map(|_| "Message deleted".to_string());
    results.push(ScenarioResult::from_outcome("Delete Message", outcome));

    let outcome = send_markdown(telegram, channel)
        .await
        .map(|_| "Markdown message sent".to_string());
    results.push(ScenarioResult::from_outcome("Send Markdown", outcome));

    let keyboard = Keyboard::inline().row([
        site_button("Visit"),
        Button::make("Action").callback_data("action_data"),
    ]);
    let outcome = send_with_keyboard(telegram, channel, "Choose an option:", keyboard)
        .await
        .map(|_| "Message with inline keyboard sent".to_string());
    results.push(ScenarioResult::from_outcome("Send Inline Keyboard", outcome));

    // Channels reject reply keyboards, so this one is inline as well.
    let keyboard = Keyboard::inline().row([
        site_button("Option 1"),
        Button::make("Option 2").callback_data("option_2"),
    ]);
    let outcome = send_with_keyboard(telegram, channel, "Select an option:", keyboard)
        .await
        .map(|_| "Message with inline keyboard sent".to_string());
    results.push(ScenarioResult::from_outcome("Send Inline Keyboard (Reply)", outcome));

    results
}

fn expect_message(sent: Option<Sent>, what: &str) -> Result<i32> {
    sent.and_then(|s| s.first_message_id())
        .ok_or_else(|| anyhow!("{} response is null", what))
}

async fn send_text(telegram: &mut Telegram, channel: &str) -> Result<i32> {
    let sent = telegram
        .to(channel)
        .message("Hello, this is a <b>bold</b> test message!")
        .with_html()
        .without_notification()
        .send()
        .await?;
    expect_message(sent, "Send")
}

async fn send_photo(telegram: &mut Telegram, channel: &str) -> Result<i32> {
    let keyboard = Keyboard::inline().row([
        site_button("Visit Site"),
        Button::make("Action").callback_data("action_data"),
    ]);
    let sent = telegram
        .to(channel)
        .photo(TEST_IMAGE)
        .message("This is a <b>photo</b> caption!")
        .with_html()
        .with_keyboard(keyboard)
        .without_notification()
        .send()
        .await?;
    expect_message(sent, "Send photo")
}

async fn send_document(telegram: &mut Telegram, channel: &str) -> Result<i32> {
    let keyboard = Keyboard::inline().row([site_button("Visit Site")]);
    let sent = telegram
        .to(channel)
        .document(TEST_PDF)
        .message("This is a <b>document</b> caption!")
        .with_html()
        .with_keyboard(keyboard)
        .without_notification()
        .send()
        .await?;
    expect_message(sent, "Send document")
}

async fn send_media_group(telegram: &mut Telegram, channel: &str) -> Result<Vec<i32>> {
    let group = MediaGroup::make(telegram.storage())
        .add_photo(TEST_IMAGE, Some("Test photo caption"))?
        .add_video(TEST_VIDEO, Some("Test video caption"))?;
    let keyboard = Keyboard::inline().row([site_button("Click")]);
    let sent = telegram
        .to(channel)
        .media_group(group)
        .with_html()
        .with_keyboard(keyboard)
        .without_notification()
        .send()
        .await?;
    match sent {
        Some(sent) if !sent.message_ids().is_empty() => Ok(sent.message_ids()),
        _ => Err(anyhow!("Send media group response is empty")),
    }
}

async fn update_text(telegram: &mut Telegram, channel: &str, id: Option<i32>) -> Result<()> {
    let id = id.ok_or_else(|| anyhow!("No message_id available"))?;
    let keyboard = Keyboard::inline().row([site_button("Updated")]);
    telegram
        .to(channel)
        .with_message_id(id)
        .message("This is an <b>updated</b> text message!")
        .with_html()
        .with_keyboard(keyboard)
        .update()
        .await?
        .ok_or_else(|| anyhow!("Update message response is null"))?;
    Ok(())
}

async fn update_caption(telegram: &mut Telegram, channel: &str, id: Option<i32>) -> Result<()> {
    let id = id.ok_or_else(|| anyhow!("No photo_message_id available"))?;
    let keyboard = Keyboard::inline().row([site_button("Updated")]);
    telegram
        .to(channel)
        .with_message_id(id)
        .photo(TEST_IMAGE)
        .message("This is an <b>updated</b> caption!")
        .with_html()
        .with_keyboard(keyboard)
        .update()
        .await?
        .ok_or_else(|| anyhow!("Update caption response is null"))?;
    Ok(())
}

async fn pin(telegram: &mut Telegram, channel: &str, id: Option<i32>) -> Result<()> {
    let id = id.ok_or_else(|| anyhow!("No message_id available"))?;
    let pinned = telegram
        .to(channel)
        .with_message_id(id)
        .without_notification()
        .pin()
        .await?;
    if pinned != Some(true) {
        return Err(anyhow!("Pin message response is false"));
    }
    Ok(())
}

async fn delete(telegram: &mut Telegram, channel: &str, id: Option<i32>) -> Result<()> {
    let id = id.ok_or_else(|| anyhow!("No message_id available"))?;
    let deleted = telegram.to(channel).with_message_id(id).delete().await?;
    if deleted != Some(true) {
        return Err(anyhow!("Delete message response is false"));
    }
    Ok(())
}

async fn send_markdown(telegram: &mut Telegram, channel: &str) -> Result<i32> {
    let sent = telegram
        .to(channel)
        .message("This is a *bold* message\\!")
        .with_markdown()
        .send()
        .await?;
    expect_message(sent, "Send markdown")
}

async fn send_with_keyboard(
    telegram: &mut Telegram,
    channel: &str,
    text: &str,
    keyboard: Keyboard,
) -> Result<i32> {
    let sent = telegram
        .to(channel)
        .message(text)
        .with_html()
        .with_keyboard(keyboard)
        .send()
        .await?;
    expect_message(sent, "Send inline keyboard")
}

/// Results as a Test / Status / Message table.
pub fn render_table(results: &[ScenarioResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Test", "Status", "Message"]);
    for r in results {
        let status = match r.status {
            Status::Success => Cell::new(r.status).fg(Color::Green),
            Status::Failed => Cell::new(r.status).fg(Color::Red),
        };
        table.add_row(vec![Cell::new(r.test), status, Cell::new(&r.message)]);
    }
    table
}
