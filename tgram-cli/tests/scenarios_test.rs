//! Integration test for the operational run: every scenario against a recording mock API.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tgram::{Params, Result, SentMessage, Storage, Telegram, TelegramApi, TgramError};
use tgram_cli::fixtures::{clean_test_files, create_test_files};
use tgram_cli::{run_scenarios, Status};

/// Answers every call; records method names. Optionally rejects one method.
struct MockApi {
    calls: Mutex<Vec<&'static str>>,
    reject: Option<&'static str>,
}

impl MockApi {
    fn new(reject: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reject,
        })
    }

    fn methods(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, method: &'static str) -> Result<SentMessage> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(method);
        if self.reject == Some(method) {
            return Err(TgramError::Api(format!("{} rejected", method)));
        }
        Ok(SentMessage {
            message_id: calls.len() as i32,
            chat_id: -100,
            text: None,
        })
    }
}

#[async_trait]
impl TelegramApi for MockApi {
    async fn send_message(&self, _params: Params) -> Result<SentMessage> {
        self.answer("sendMessage")
    }
    async fn send_photo(&self, _params: Params) -> Result<SentMessage> {
        self.answer("sendPhoto")
    }
    async fn send_document(&self, _params: Params) -> Result<SentMessage> {
        self.answer("sendDocument")
    }
    async fn send_media_group(&self, params: Params) -> Result<Vec<SentMessage>> {
        let first = self.answer("sendMediaGroup")?;
        let count = params.media("media").map(|m| m.len()).unwrap_or(0);
        Ok(vec![first; count])
    }
    async fn edit_message_text(&self, _params: Params) -> Result<SentMessage> {
        self.answer("editMessageText")
    }
    async fn edit_message_caption(&self, _params: Params) -> Result<SentMessage> {
        self.answer("editMessageCaption")
    }
    async fn delete_message(&self, _params: Params) -> Result<bool> {
        self.answer("deleteMessage").map(|_| true)
    }
    async fn pin_chat_message(&self, _params: Params) -> Result<bool> {
        self.answer("pinChatMessage").map(|_| true)
    }
}

fn telegram_with_fixtures(dir: &TempDir, api: Arc<MockApi>) -> Telegram {
    let storage = Storage::new(dir.path(), dir.path());
    create_test_files(storage.public()).unwrap();
    Telegram::new(api, storage)
}

#[tokio::test]
async fn test_all_scenarios_succeed_in_order() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new(None);
    let mut telegram = telegram_with_fixtures(&dir, api.clone());

    let results = run_scenarios(&mut telegram, "@TestChannel").await;

    assert_eq!(results.len(), 11);
    for r in &results {
        assert_eq!(r.status, Status::Success, "{} failed: {}", r.test, r.message);
    }
    assert_eq!(
        api.methods(),
        vec![
            "sendMessage",
            "sendPhoto",
            "sendDocument",
            "sendMediaGroup",
            "editMessageText",
            "editMessageCaption",
            "pinChatMessage",
            "deleteMessage",
            "sendMessage",
            "sendMessage",
            "sendMessage",
        ]
    );
    assert_eq!(results[0].message, "Text message sent, ID: 1");

    clean_test_files(telegram.storage().public()).unwrap();
    assert!(!telegram.storage().public().exists("images"));
}

#[tokio::test]
async fn test_failed_text_send_cascades_to_dependent_scenarios() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new(Some("sendMessage"));
    let mut telegram = telegram_with_fixtures(&dir, api);

    let results = run_scenarios(&mut telegram, "@TestChannel").await;

    let status_of = |name: &str| {
        results
            .iter()
            .find(|r| r.test == name)
            .map(|r| (r.status, r.message.clone()))
            .unwrap()
    };
    assert_eq!(status_of("Send Text").0, Status::Failed);
    assert_eq!(status_of("Send Photo").0, Status::Success);
    assert_eq!(status_of("Update Caption").0, Status::Success);
    assert_eq!(
        status_of("Update Message"),
        (Status::Failed, "No message_id available".to_string())
    );
    assert_eq!(status_of("Pin Message").0, Status::Failed);
    assert_eq!(status_of("Delete Message").0, Status::Failed);
}

#[tokio::test]
async fn test_missing_fixtures_fail_media_group_only() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::new(None);
    let mut telegram = Telegram::new(api, Storage::new(dir.path(), dir.path()));

    let results = run_scenarios(&mut telegram, "@TestChannel").await;
    let group = results.iter().find(|r| r.test == "Send Media Group").unwrap();
    assert_eq!(group.status, Status::Failed);
    assert!(group.message.starts_with("File does not exist"));
    // Photo and document paths are not checked by the builder, so the mock accepts them.
    assert_eq!(results[1].status, Status::Success);
}
