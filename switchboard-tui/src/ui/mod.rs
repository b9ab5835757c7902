
mod components;
mod handlers;
mod screens;
mod utils;

use std::io;

pub use components::app::SwitchboardUI;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{prelude::CrosstermBackend, Terminal};

pub trait UIHandler {
    async fn handle_form_input(&mut self, key: KeyCode, modifiers: KeyModifiers)
        -> io::Result<()>;
    async fn handle_tab_list_input(&mut self, key: KeyCode) -> io::Result<()>;
}

pub trait UIRenderer {
    async fn render_connection_form_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
    async fn render_tab_list_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()>;
}
