use switchboard_core::models::{ConnectionProfile, FieldId};

/// View state of the connection form: the draft record plus the focused
/// field. Every edit replaces the draft wholesale through
/// [`ConnectionProfile::with_field`].
#[derive(Clone)]
pub struct ConnectionForm {
    pub profile: ConnectionProfile,
    pub focused: FieldId,
}

impl ConnectionForm {
    pub fn new() -> Self {
        Self {
            profile: ConnectionProfile::default(),
            focused: FieldId::Id,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn at_last_field(&self) -> bool {
        self.focused.next() == self.focused
    }

    pub fn focused_index(&self) -> usize {
        self.focused.index()
    }

    pub fn push_char(&mut self, c: char) {
        let mut value = self.profile.get(self.focused).unwrap_or("").to_string();
        value.push(c);
        self.profile = self.profile.clone().with_field(self.focused, value);
    }

    pub fn backspace(&mut self) {
        let Some(current) = self.profile.get(self.focused) else {
            return;
        };
        if current.is_empty() {
            return;
        }
        let mut value = current.to_string();
        value.pop();
        self.profile = self.profile.clone().with_field(self.focused, value);
    }

    /// The text rendered for a field. Secret fields show asterisks only.
    pub fn display_value(&self, field: FieldId) -> String {
        let value = self.profile.get(field).unwrap_or("");
        if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    /// The record as it stands at this moment; each submit forwards its own
    /// snapshot.
    pub fn snapshot(&self) -> ConnectionProfile {
        self.profile.clone()
    }
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut ConnectionForm, text: &str) {
        for c in text.chars() {
            form.push_char(c);
        }
    }

    #[test]
    fn typing_edits_the_focused_field_only() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::Username;
        type_text(&mut form, "bob");

        assert_eq!(form.profile.get(FieldId::Username), Some("bob"));
        assert_eq!(form.profile.get(FieldId::Id), None);
        assert_eq!(form.profile.get(FieldId::Password), None);
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::Url;
        type_text(&mut form, "https://x");
        form.backspace();

        assert_eq!(form.profile.get(FieldId::Url), Some("https://"));
    }

    #[test]
    fn backspace_on_an_untouched_field_leaves_it_absent() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::Proxy;
        form.backspace();

        assert_eq!(form.profile.get(FieldId::Proxy), None);
    }

    #[test]
    fn edits_never_clobber_other_fields() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::Username;
        type_text(&mut form, "bob");
        form.focus_next();
        type_text(&mut form, "secret");
        form.focus_prev();
        form.backspace();

        assert_eq!(form.profile.get(FieldId::Username), Some("bo"));
        assert_eq!(form.profile.get(FieldId::Password), Some("secret"));
    }

    #[test]
    fn secret_fields_render_as_asterisks() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::Password;
        type_text(&mut form, "secret");
        form.focused = FieldId::UserAgentPw;
        type_text(&mut form, "ua-pw");

        assert_eq!(form.display_value(FieldId::Password), "******");
        assert_eq!(form.display_value(FieldId::UserAgentPw), "*****");
        assert_eq!(form.profile.get(FieldId::Password), Some("secret"));
    }

    #[test]
    fn plain_fields_render_their_value() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::UserAgent;
        type_text(&mut form, "explorer/1.0");

        assert_eq!(form.display_value(FieldId::UserAgent), "explorer/1.0");
    }

    #[test]
    fn focus_saturates_at_both_ends() {
        let mut form = ConnectionForm::new();
        form.focus_prev();
        assert_eq!(form.focused, FieldId::Id);

        for _ in 0..FieldId::ALL.len() + 2 {
            form.focus_next();
        }
        assert_eq!(form.focused, FieldId::Proxy);
        assert!(form.at_last_field());
    }

    #[test]
    fn snapshots_are_independent_of_later_edits() {
        let mut form = ConnectionForm::new();
        form.focused = FieldId::Id;
        type_text(&mut form, "a");
        let first = form.snapshot();
        type_text(&mut form, "b");

        assert_eq!(first.get(FieldId::Id), Some("a"));
        assert_eq!(form.snapshot().get(FieldId::Id), Some("ab"));
    }
}
