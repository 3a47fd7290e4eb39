//! Home screen: the guild headquarters menu.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::navigator::View;

const DESTINATIONS: [(View, &str, &str); 3] = [
    (
        View::Kitchen,
        "DICE KITCHEN",
        "Lancez le D20 pour décider du dîner",
    ),
    (
        View::Tavern,
        "SONIC TAVERN",
        "La taverne sonore et son juke-box",
    ),
    (
        View::Inventory,
        "GRIMOIRE",
        "Parcourir, chercher et écrire des recettes",
    ),
];

pub struct HomeScreen {
    pub cursor: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < DESTINATIONS.len() {
            self.cursor += 1;
        }
    }

    pub fn selected_view(&self) -> View {
        DESTINATIONS[self.cursor].0
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(6), // Banner
                Constraint::Length(1), // Spacer
                Constraint::Length(9), // Menu
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let banner = vec![
            Line::from(""),
            Line::from(Span::styled(
                "COOK & ROLL",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Cuisine. Musique. Jets de dés.",
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "< SYSTEM: bienvenue au QG, aventurier >",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            chunks[0],
        );

        let mut menu_lines = Vec::new();
        for (i, (_, name, tagline)) in DESTINATIONS.iter().enumerate() {
            let selected = i == self.cursor;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            menu_lines.push(Line::from(Span::styled(
                format!("{}{}", marker, name),
                style,
            )));
            menu_lines.push(Line::from(Span::styled(
                format!("    {}", tagline),
                Style::default().fg(Color::DarkGray),
            )));
            menu_lines.push(Line::from(""));
        }
        let menu = Paragraph::new(menu_lines)
            .block(Block::default().borders(Borders::ALL).title(" Destinations "))
            .alignment(Alignment::Left);
        f.render_widget(menu, chunks[2]);

        let controls = Paragraph::new("[↑/↓] Choisir    [Enter] Partir    [q] Quitter")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[4]);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}
