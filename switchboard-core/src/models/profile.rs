use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The connection fields, in the order they are presented and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Id,
    Url,
    Username,
    Password,
    UserAgent,
    UserAgentPw,
    Version,
    Proxy,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::Id,
        FieldId::Url,
        FieldId::Username,
        FieldId::Password,
        FieldId::UserAgent,
        FieldId::UserAgentPw,
        FieldId::Version,
        FieldId::Proxy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Id => "ID (unique per config service)",
            FieldId::Url => "Login URL",
            FieldId::Username => "Username",
            FieldId::Password => "Password",
            FieldId::UserAgent => "User Agent",
            FieldId::UserAgentPw => "User Agent Password",
            FieldId::Version => "Protocol Version",
            FieldId::Proxy => "Proxy (Socks5)",
        }
    }

    /// Key used in the serialized wire form.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Id => "id",
            FieldId::Url => "url",
            FieldId::Username => "username",
            FieldId::Password => "password",
            FieldId::UserAgent => "userAgent",
            FieldId::UserAgentPw => "userAgentPw",
            FieldId::Version => "version",
            FieldId::Proxy => "proxy",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::UserAgentPw)
    }

    pub fn index(self) -> usize {
        match self {
            FieldId::Id => 0,
            FieldId::Url => 1,
            FieldId::Username => 2,
            FieldId::Password => 3,
            FieldId::UserAgent => 4,
            FieldId::UserAgentPw => 5,
            FieldId::Version => 6,
            FieldId::Proxy => 7,
        }
    }

    pub fn next(self) -> FieldId {
        match self {
            FieldId::Id => FieldId::Url,
            FieldId::Url => FieldId::Username,
            FieldId::Username => FieldId::Password,
            FieldId::Password => FieldId::UserAgent,
            FieldId::UserAgent => FieldId::UserAgentPw,
            FieldId::UserAgentPw => FieldId::Version,
            FieldId::Version => FieldId::Proxy,
            FieldId::Proxy => FieldId::Proxy,
        }
    }

    pub fn prev(self) -> FieldId {
        match self {
            FieldId::Id => FieldId::Id,
            FieldId::Url => FieldId::Id,
            FieldId::Username => FieldId::Url,
            FieldId::Password => FieldId::Username,
            FieldId::UserAgent => FieldId::Password,
            FieldId::UserAgentPw => FieldId::UserAgent,
            FieldId::Version => FieldId::UserAgentPw,
            FieldId::Proxy => FieldId::Version,
        }
    }
}

/// The record a submission hands to the session host. A field that was never
/// written stays absent; writing replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent_pw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

impl ConnectionProfile {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Id => self.id.as_deref(),
            FieldId::Url => self.url.as_deref(),
            FieldId::Username => self.username.as_deref(),
            FieldId::Password => self.password.as_deref(),
            FieldId::UserAgent => self.user_agent.as_deref(),
            FieldId::UserAgentPw => self.user_agent_pw.as_deref(),
            FieldId::Version => self.version.as_deref(),
            FieldId::Proxy => self.proxy.as_deref(),
        }
    }

    /// Last-write-wins per field; other fields are untouched.
    pub fn with_field(mut self, field: FieldId, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            FieldId::Id => self.id = value,
            FieldId::Url => self.url = value,
            FieldId::Username => self.username = value,
            FieldId::Password => self.password = value,
            FieldId::UserAgent => self.user_agent = value,
            FieldId::UserAgentPw => self.user_agent_pw = value,
            FieldId::Version => self.version = value,
            FieldId::Proxy => self.proxy = value,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Populated fields only, in canonical field order.
    pub fn to_map(&self) -> IndexMap<&'static str, String> {
        let mut map = IndexMap::new();
        for field in FieldId::ALL {
            if let Some(value) = self.get(field) {
                map.insert(field.key(), value.to_string());
            }
        }
        map
    }

    /// Same as [`to_map`](Self::to_map), with secret fields replaced by
    /// asterisks of equal character length. Used wherever the record leaves
    /// the process boundary as text.
    pub fn masked_map(&self) -> IndexMap<&'static str, String> {
        let mut map = self.to_map();
        for field in FieldId::ALL {
            if field.is_secret() {
                if let Some(value) = map.get_mut(field.key()) {
                    *value = "*".repeat(value.chars().count());
                }
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_does_not_mutate_the_original() {
        let original = ConnectionProfile::default();
        let updated = original.clone().with_field(FieldId::Url, "https://example.com");

        assert!(original.is_empty());
        assert_eq!(updated.get(FieldId::Url), Some("https://example.com"));
    }

    #[test]
    fn last_write_wins_per_field() {
        let profile = ConnectionProfile::default()
            .with_field(FieldId::Username, "alice")
            .with_field(FieldId::Username, "bob");

        assert_eq!(profile.get(FieldId::Username), Some("bob"));
    }

    #[test]
    fn untouched_fields_stay_absent() {
        let profile = ConnectionProfile::default().with_field(FieldId::Username, "bob");

        for field in FieldId::ALL {
            if field != FieldId::Username {
                assert_eq!(profile.get(field), None);
            }
        }
    }

    #[test]
    fn wire_form_holds_only_populated_camel_case_keys() {
        let profile = ConnectionProfile::default()
            .with_field(FieldId::Url, "https://example.com")
            .with_field(FieldId::Username, "bob")
            .with_field(FieldId::Password, "secret")
            .with_field(FieldId::UserAgentPw, "ua-secret");

        let value = serde_json::to_value(&profile).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["url"], "https://example.com");
        assert_eq!(object["username"], "bob");
        assert_eq!(object["password"], "secret");
        assert_eq!(object["userAgentPw"], "ua-secret");
    }

    #[test]
    fn wire_form_round_trips_camel_case_keys() {
        let json = r#"{"userAgent":"explorer/1.0","version":"1.7.2"}"#;
        let profile: ConnectionProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.get(FieldId::UserAgent), Some("explorer/1.0"));
        assert_eq!(profile.get(FieldId::Version), Some("1.7.2"));
        assert_eq!(profile.get(FieldId::Password), None);
    }

    #[test]
    fn to_map_preserves_canonical_field_order() {
        let profile = ConnectionProfile::default()
            .with_field(FieldId::Proxy, "localhost:1080")
            .with_field(FieldId::Id, "work");

        let keys: Vec<&str> = profile.to_map().keys().copied().collect();
        assert_eq!(keys, vec!["id", "proxy"]);
    }

    #[test]
    fn masked_map_hides_secrets_but_keeps_length() {
        let profile = ConnectionProfile::default()
            .with_field(FieldId::Username, "bob")
            .with_field(FieldId::Password, "secret");

        let masked = profile.masked_map();
        assert_eq!(masked["username"], "bob");
        assert_eq!(masked["password"], "******");
    }

    #[test]
    fn empty_until_first_write() {
        let profile = ConnectionProfile::default();
        assert!(profile.is_empty());
        assert!(!profile.with_field(FieldId::Id, "work").is_empty());
    }
}
