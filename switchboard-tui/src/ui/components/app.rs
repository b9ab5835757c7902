use std::io;
use std::sync::Arc;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use switchboard_core::{SessionHost, SessionTab};

use crate::ui::utils::terminal_guard::TerminalGuard;
use crate::ui::{UIHandler, UIRenderer};

use super::{ConnectionForm, ScreenState};

pub struct SwitchboardUI {
    pub session_host: Arc<dyn SessionHost>,
    pub form: ConnectionForm,
    pub current_screen: ScreenState,
    pub tabs: Vec<SessionTab>,
    pub selected_tab: usize,
    pub tabs_scroll: usize,
    pub needs_tabs_refresh: bool,
    pub submit_error_message: Option<String>,
}

impl SwitchboardUI {
    pub fn new(session_host: Arc<dyn SessionHost>) -> Self {
        Self {
            session_host,
            form: ConnectionForm::new(),
            current_screen: ScreenState::ConnectionForm,
            tabs: Vec::new(),
            selected_tab: 0,
            tabs_scroll: 0,
            needs_tabs_refresh: true,
            submit_error_message: None,
        }
    }

    pub async fn run_ui(&mut self) -> Result<(), io::Error> {
        let _guard = TerminalGuard;
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let result = self.ui_loop(&mut terminal).await;

        terminal.clear()?;
        terminal.show_cursor()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            Clear(ClearType::All)
        )?;

        result
    }

    async fn ui_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            match self.current_screen {
                ScreenState::ConnectionForm => {
                    UIRenderer::render_connection_form_screen(self, terminal).await?
                }
                ScreenState::TabList => UIRenderer::render_tab_list_screen(self, terminal).await?,
            }

            if let Event::Key(key) = event::read()? {
                match self.current_screen {
                    ScreenState::ConnectionForm => {
                        UIHandler::handle_form_input(self, key.code, key.modifiers).await?;
                    }
                    ScreenState::TabList => {
                        UIHandler::handle_tab_list_input(self, key.code).await?;
                    }
                }
            }
        }
    }
}
