use std::{
    io::{self, stdout},
    process,
};

use arboard::Clipboard;
use crossterm::{
    event::{DisableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, Clear, ClearType, LeaveAlternateScreen},
};

use super::components::types::{ScreenState, TAB_LIST_VISIBLE_ROWS};
use super::{SwitchboardUI, UIHandler};

impl UIHandler for SwitchboardUI {
    async fn handle_form_input(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> io::Result<()> {
        // While an error popup is shown it owns the keyboard.
        if self.submit_error_message.is_some() {
            match key {
                KeyCode::Enter | KeyCode::Esc => {
                    self.submit_error_message = None;
                }
                _ => {}
            }
            return Ok(());
        }

        match (key, modifiers) {
            (KeyCode::Esc, _) => quit_terminal(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            (KeyCode::Up, _) => self.form.focus_prev(),
            (KeyCode::Down, _) | (KeyCode::Tab, _) => self.form.focus_next(),
            (KeyCode::Enter, _) => {
                if self.form.at_last_field() {
                    self.submit().await;
                } else {
                    self.form.focus_next();
                }
            }
            (KeyCode::Char(c), _) => self.form.push_char(c),
            (KeyCode::Backspace, _) => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    async fn handle_tab_list_input(&mut self, key: KeyCode) -> io::Result<()> {
        match key {
            KeyCode::Up => {
                if self.selected_tab > 0 {
                    self.selected_tab -= 1;
                    if self.selected_tab < self.tabs_scroll {
                        self.tabs_scroll = self.selected_tab;
                    }
                }
            }
            KeyCode::Down => {
                if !self.tabs.is_empty() && self.selected_tab < self.tabs.len() - 1 {
                    self.selected_tab += 1;
                    if self.selected_tab >= self.tabs_scroll + TAB_LIST_VISIBLE_ROWS {
                        self.tabs_scroll = self.selected_tab - TAB_LIST_VISIBLE_ROWS + 1;
                    }
                }
            }
            KeyCode::Char('n') => {
                // The draft keeps whatever was entered before.
                self.current_screen = ScreenState::ConnectionForm;
            }
            KeyCode::Char('y') => {
                if let Some(tab) = self.tabs.get(self.selected_tab) {
                    match tab.export_json() {
                        Ok(json) => {
                            if let Err(e) = Clipboard::new().and_then(|mut ctx| ctx.set_text(json))
                            {
                                log::error!("Error copying profile to clipboard: {}", e);
                            }
                        }
                        Err(e) => {
                            log::error!("Error serializing profile for clipboard: {}", e);
                        }
                    }
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => quit_terminal(),
            _ => {}
        }
        Ok(())
    }
}

impl SwitchboardUI {
    /// Forward the current snapshot to the session host, exactly once per
    /// activation. The draft is kept as-is either way.
    pub async fn submit(&mut self) {
        let profile = self.form.snapshot();
        log::info!("Opening tab with: {:?}", profile.masked_map());

        match self.session_host.open_tab(profile).await {
            Ok(()) => {
                self.needs_tabs_refresh = true;
                self.current_screen = ScreenState::TabList;
            }
            Err(err) => {
                log::error!("Error opening tab: {}", err);
                self.submit_error_message = Some(err.to_string());
            }
        }
    }

    pub async fn refresh_tabs(&mut self) {
        if self.needs_tabs_refresh {
            self.tabs = self.session_host.tabs().await;
            if self.selected_tab >= self.tabs.len() {
                self.selected_tab = self.tabs.len().saturating_sub(1);
            }
            self.needs_tabs_refresh = false;
        }
    }
}

fn quit_terminal() -> ! {
    if let Err(e) = disable_raw_mode() {
        log::error!("Error disabling raw mode: {}", e);
    }
    if let Err(e) = execute!(
        stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        Clear(ClearType::All)
    ) {
        log::error!("Error cleaning up terminal: {}", e);
    }
    process::exit(0);
}
