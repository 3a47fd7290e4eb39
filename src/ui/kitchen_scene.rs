//! Dice Kitchen: the d20 dashboard and the gate into focus mode.
//!
//! The screen owns the presented recipe and the active cooking session;
//! focus-mode rendering itself lives in `focus_scene`.

use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::ROLL_SUSPENSE_TICKS;
use crate::game_state::GameState;
use crate::recipe::Recipe;
use crate::rewards::gold_for;
use crate::roll;
use crate::session::{tick_session, CookingSession};

pub struct KitchenScreen {
    /// Remaining dice-animation ticks; the roll resolves when this hits 0.
    pub rolling_ticks: u32,
    /// The raw d20 value of the last roll. None for a manual selection.
    pub last_roll: Option<u8>,
    pub current: Option<Recipe>,
    pub session: Option<CookingSession>,
    /// Checklist cursor while a session is in Prep.
    pub prep_cursor: usize,
}

impl KitchenScreen {
    pub fn new() -> Self {
        Self {
            rolling_ticks: 0,
            last_roll: None,
            current: None,
            session: None,
            prep_cursor: 0,
        }
    }

    /// Fresh state for a new kitchen visit.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Receives a recipe picked manually from the grimoire.
    pub fn set_selected(&mut self, recipe: Recipe) {
        self.last_roll = None;
        self.rolling_ticks = 0;
        self.current = Some(recipe);
    }

    /// Kicks off the dice animation. The actual draw happens when the
    /// suspense runs out, in `tick`.
    pub fn start_roll(&mut self, state: &mut GameState) {
        if self.rolling_ticks > 0 || self.session.is_some() {
            return;
        }
        if state.repository.is_empty() {
            state
                .journal
                .add("Le dé refuse de rouler : aucune recette chargée.", false);
            return;
        }
        self.current = None;
        self.last_roll = None;
        self.rolling_ticks = ROLL_SUSPENSE_TICKS;
    }

    /// Per-tick upkeep: dice suspense and the active session.
    pub fn tick(&mut self, state: &mut GameState, rng: &mut impl Rng, delta: f64) {
        if let Some(session) = self.session.as_mut() {
            tick_session(session, delta);
        }
        if self.rolling_ticks > 0 {
            self.rolling_ticks -= 1;
            if self.rolling_ticks == 0 {
                self.resolve_roll(state, rng);
            }
        }
    }

    fn resolve_roll(&mut self, state: &mut GameState, rng: &mut impl Rng) {
        match roll::roll(&state.repository, rng, &mut state.progress) {
            Ok(rolled) => {
                self.last_roll = Some(rolled.value);
                self.current = rolled.source.resolve(&state.repository);
                let title = self
                    .current
                    .as_ref()
                    .map(|r| r.title.clone())
                    .unwrap_or_default();
                match rolled.value {
                    1 => state
                        .journal
                        .add(format!("D20: 1 — ÉCHEC CRITIQUE ! {}", title), true),
                    20 => state
                        .journal
                        .add(format!("D20: 20 — RÉUSSITE CRITIQUE ! {}", title), true),
                    value => state.journal.add(format!("D20: {} — {}", value, title), false),
                }
            }
            Err(e) => state.journal.add(e.to_string(), false),
        }
    }

    /// Enters focus mode over the presented recipe.
    pub fn start_session(&mut self) {
        if let Some(recipe) = self.current.clone() {
            self.session = Some(CookingSession::new(recipe));
            self.prep_cursor = 0;
        }
    }

    /// Abandons or completes focus mode. Already-granted rewards stay.
    pub fn quit_session(&mut self) {
        self.session = None;
        self.prep_cursor = 0;
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, state: &GameState) {
        if self.rolling_ticks > 0 {
            self.draw_rolling(f, area);
        } else if let Some(recipe) = &self.current {
            self.draw_recipe_card(f, area, recipe);
        } else {
            self.draw_idle(f, area, state);
        }
    }

    fn draw_idle(&self, f: &mut Frame, area: Rect, state: &GameState) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "QUE MANGER CE SOIR ?",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "┌─────────┐",
                Style::default().fg(Color::Magenta),
            )),
            Line::from(Span::styled(
                "│   D20   │",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "└─────────┘",
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("< SYSTEM: {} recipes loaded. >", state.repository.len()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "< WARNING: Critical failures may result in Pizza. >",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[r] Lancer le dé    [Esc] Retour au QG",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Dice Kitchen "))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn draw_rolling(&self, f: &mut Frame, area: Rect) {
        let frame_chars = ["◐", "◓", "◑", "◒"];
        let spin = frame_chars[(self.rolling_ticks as usize) % frame_chars.len()];
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Le dé roule... {}", spin, spin),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Dice Kitchen "))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn draw_recipe_card(&self, f: &mut Frame, area: Rect, recipe: &Recipe) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Roll + title + tags
                Constraint::Length(3), // Description
                Constraint::Min(6),    // Components / incantation
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let roll_span = match self.last_roll {
            Some(value) => {
                let style = if recipe.is_critical_fail {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else if recipe.is_critical_success {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD)
                };
                Span::styled(format!(" {} ", value), style)
            }
            None => Span::styled(" ◆ ", Style::default().fg(Color::Magenta)),
        };

        let header_lines = vec![
            Line::from(vec![
                roll_span,
                Span::styled(
                    recipe.title.to_uppercase(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(" DIFFICULTY: {} ", recipe.difficulty.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" CAST TIME: {} ", recipe.prep_time),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!(" REWARD: {}g ", gold_for(recipe)),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(Span::styled(
                format!(" Gain: {}", recipe.stat_bonus),
                Style::default().fg(Color::Green),
            )),
        ];
        f.render_widget(
            Paragraph::new(header_lines)
                .block(Block::default().borders(Borders::ALL).title(" Dice Kitchen ")),
            chunks[0],
        );

        let description = Paragraph::new(Line::from(Span::styled(
            format!("\"{}\"", recipe.description),
            Style::default().fg(Color::Gray),
        )))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::LEFT));
        f.render_widget(description, chunks[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        let component_lines: Vec<Line> = recipe
            .ingredients
            .iter()
            .map(|ing| {
                Line::from(vec![
                    Span::styled(ing.name.clone(), Style::default().fg(Color::White)),
                    Span::raw("  "),
                    Span::styled(ing.quantity.clone(), Style::default().fg(Color::Magenta)),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(component_lines)
                .block(Block::default().borders(Borders::ALL).title(" COMPOSANTS ")),
            columns[0],
        );

        let incantation_lines: Vec<Line> = recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| Line::from(format!("{}. {}", i + 1, step)))
            .collect();
        f.render_widget(
            Paragraph::new(incantation_lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" INCANTATION ")),
            columns[1],
        );

        let controls =
            Paragraph::new("[Enter] START RITUAL    [r] REROLL    [Esc] Retour au QG")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[3]);
    }
}

impl Default for KitchenScreen {
    fn default() -> Self {
        Self::new()
    }
}
