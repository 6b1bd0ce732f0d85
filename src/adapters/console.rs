use crate::core::NotificationSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Prints notifications and remembers the one currently shown under each key.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    shown: Mutex<HashMap<String, String>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self, key: &str) -> Option<String> {
        self.shown.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl NotificationSink for ConsoleNotifier {
    async fn replace(&self, key: &str, message: &str) -> Result<()> {
        tracing::debug!("Replacing notification '{}'", key);
        println!("[{}] {}", key, message);
        self.shown
            .lock()
            .await
            .insert(key.to_string(), message.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.shown.lock().await.remove(key).is_some() {
            tracing::debug!("Removed notification '{}'", key);
            println!("[{}] (cleared)", key);
        }
        Ok(())
    }
}
