use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::{ConnectionProfile, FieldId};

/// One accepted submission, as the host keeps it.
#[derive(Debug, Clone)]
pub struct SessionTab {
    pub key: Uuid,
    pub title: String,
    pub profile: ConnectionProfile,
    pub opened_at: DateTime<Utc>,
}

impl SessionTab {
    fn new(profile: ConnectionProfile) -> Self {
        let title = profile
            .get(FieldId::Id)
            .filter(|id| !id.is_empty())
            .or_else(|| profile.get(FieldId::Url).filter(|url| !url.is_empty()))
            .unwrap_or("(unnamed connection)")
            .to_string();

        Self {
            key: Uuid::new_v4(),
            title,
            profile,
            opened_at: Utc::now(),
        }
    }

    /// The masked wire form, for clipboard export. Secrets never leave in
    /// clear text.
    pub fn export_json(&self) -> Result<String, CoreError> {
        let fields = serde_json::Value::Object(
            self.profile
                .masked_map()
                .into_iter()
                .map(|(key, value)| (key.to_string(), serde_json::Value::String(value)))
                .collect(),
        );
        Ok(serde_json::to_string_pretty(&fields)?)
    }
}

/// The capability the connection form submits into.
#[async_trait]
pub trait SessionHost: Send + Sync {
    async fn open_tab(&self, profile: ConnectionProfile) -> Result<(), CoreError>;
    async fn tabs(&self) -> Vec<SessionTab>;
}

pub struct SessionManager {
    pub tabs: Mutex<Vec<SessionTab>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            tabs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionHost for SessionManager {
    async fn open_tab(&self, profile: ConnectionProfile) -> Result<(), CoreError> {
        let mut tabs = self.tabs.lock().await;

        // The id is unique per config service; a second tab for the same id
        // is rejected, not replaced.
        if let Some(id) = profile.get(FieldId::Id).filter(|id| !id.is_empty()) {
            if tabs.iter().any(|tab| tab.profile.get(FieldId::Id) == Some(id)) {
                return Err(CoreError::DuplicateTab(id.to_string()));
            }
        }

        let tab = SessionTab::new(profile);
        log::info!("Opened tab '{}' ({})", tab.title, tab.key);
        tabs.push(tab);
        Ok(())
    }

    async fn tabs(&self) -> Vec<SessionTab> {
        self.tabs.lock().await.clone()
    }
}
