use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use switchboard_core::models::FieldId;

use super::components::types::TAB_LIST_VISIBLE_ROWS;
use super::{SwitchboardUI, UIRenderer};

impl UIRenderer for SwitchboardUI {
    async fn render_connection_form_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal.draw(|f| {
            let size = f.area();
            let vertical_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [
                        Constraint::Percentage(20),
                        Constraint::Min(FieldId::ALL.len() as u16 + 2),
                        Constraint::Percentage(20),
                        Constraint::Percentage(10),
                    ]
                    .as_ref(),
                )
                .split(size);

            let horizontal_layout = centered_rect(60, vertical_chunks[1]);

            let block = Block::default()
                .title("Add a Connection")
                .borders(Borders::ALL)
                .title_alignment(Alignment::Center);

            let mut content: Vec<String> = FieldId::ALL
                .iter()
                .map(|field| format!("{}: {}", field.label(), self.form.display_value(*field)))
                .collect();

            content[self.form.focused_index()].push_str(" <");

            let input_paragraph = Paragraph::new(content.join("\n"))
                .block(block)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Left);

            f.render_widget(input_paragraph, horizontal_layout);

            if let Some(error_message) = &self.submit_error_message {
                let error_block = Block::default()
                    .title("Error")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Red))
                    .title_alignment(Alignment::Center);

                let error_paragraph = Paragraph::new(error_message.clone())
                    .block(error_block)
                    .style(Style::default().fg(Color::White))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });

                let error_area = centered_rect(50, vertical_chunks[1]);
                f.render_widget(Clear, error_area);
                f.render_widget(error_paragraph, error_area);
            } else {
                let help_message = vec![Line::from(vec![
                    Span::styled(
                        "Enter",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" to confirm input, "),
                    Span::styled(
                        "Up/Down",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" to navigate fields, "),
                    Span::styled(
                        "Ctrl+S",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" to open a tab, "),
                    Span::styled(
                        "Esc",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" to quit"),
                ])];

                let help_paragraph = Paragraph::new(help_message)
                    .style(Style::default().fg(Color::White))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });

                f.render_widget(help_paragraph, vertical_chunks[2]);
            }
        })?;

        Ok(())
    }

    async fn render_tab_list_screen(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        self.refresh_tabs().await;

        let visible_tabs: Vec<ListItem> = self
            .tabs
            .iter()
            .enumerate()
            .skip(self.tabs_scroll)
            .take(TAB_LIST_VISIBLE_ROWS)
            .map(|(i, tab)| {
                let line = format!("{}  (opened {})", tab.title, tab.opened_at.format("%H:%M:%S"));
                if i == self.selected_tab {
                    ListItem::new(line).style(
                        Style::default()
                            .bg(Color::Yellow)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(line).style(Style::default().fg(Color::White))
                }
            })
            .collect();

        let position = if self.tabs.is_empty() {
            0
        } else {
            self.selected_tab + 1
        };

        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [
                        Constraint::Percentage(30),
                        Constraint::Percentage(40),
                        Constraint::Percentage(30),
                    ]
                    .as_ref(),
                )
                .split(size);

            let horizontal_layout = centered_rect(60, chunks[1]);

            let block = Block::default()
                .title(format!("Open Tabs ({}/{})", position, self.tabs.len()))
                .borders(Borders::ALL)
                .title_alignment(Alignment::Center);

            if self.tabs.is_empty() {
                let empty_paragraph = Paragraph::new("No open tabs yet.")
                    .block(block)
                    .style(Style::default().fg(Color::White))
                    .alignment(Alignment::Center);
                f.render_widget(empty_paragraph, horizontal_layout);
            } else {
                let tab_list_widget = List::new(visible_tabs).block(block).highlight_style(
                    Style::default()
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                );
                f.render_widget(tab_list_widget, horizontal_layout);
            }

            let help_message = vec![Line::from(vec![
                Span::styled(
                    "Up",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("/"),
                Span::styled(
                    "Down",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to navigate, "),
                Span::styled(
                    "n",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to add a connection, "),
                Span::styled(
                    "y",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to copy the profile, "),
                Span::styled(
                    "q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to quit"),
            ])];

            let help_paragraph = Paragraph::new(help_message)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });

            f.render_widget(help_paragraph, chunks[2]);
        })?;

        Ok(())
    }
}

fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    popup_layout[1]
}
