//! Grimoire inventory: the searchable, paginated recipe browser.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::recipe_form::RecipeFormScreen;
use super::throbber;
use crate::constants::RECIPES_PER_PAGE;
use crate::game_state::GameState;
use crate::recipe::Recipe;
use crate::repository::RecipeRepository;
use crate::rewards::xp_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryFocus {
    Grid,
    Search,
}

/// Things the inventory asks the main loop to do (the loop owns the
/// navigator and the fetch worker).
#[derive(Debug, Clone)]
pub enum InventoryAction {
    Select(Recipe),
    RemoteSearch(String),
    FetchRandom,
}

pub struct InventoryScreen {
    pub search_input: String,
    pub focus: InventoryFocus,
    /// 0-based; rendered 1-based.
    pub page: usize,
    /// Cursor within the current page.
    pub cursor: usize,
    pub form: Option<RecipeFormScreen>,
}

impl InventoryScreen {
    pub fn new() -> Self {
        Self {
            search_input: String::new(),
            focus: InventoryFocus::Grid,
            page: 0,
            cursor: 0,
            form: None,
        }
    }

    pub fn matches<'a>(&self, repo: &'a RecipeRepository) -> Vec<&'a Recipe> {
        repo.search(&self.search_input)
    }

    pub fn total_pages(&self, repo: &RecipeRepository) -> usize {
        let count = self.matches(repo).len();
        ((count + RECIPES_PER_PAGE - 1) / RECIPES_PER_PAGE).max(1)
    }

    /// The slice of matches visible on the current page.
    pub fn page_slice<'a>(&self, repo: &'a RecipeRepository) -> Vec<&'a Recipe> {
        self.matches(repo)
            .into_iter()
            .skip(self.page * RECIPES_PER_PAGE)
            .take(RECIPES_PER_PAGE)
            .collect()
    }

    /// Keeps page and cursor valid after the filter or collection changed.
    pub fn clamp(&mut self, repo: &RecipeRepository) {
        let last_page = self.total_pages(repo) - 1;
        if self.page > last_page {
            self.page = last_page;
        }
        let page_len = self.page_slice(repo).len();
        if self.cursor >= page_len {
            self.cursor = page_len.saturating_sub(1);
        }
    }

    /// Typing into the search box resets pagination, like the live filter.
    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.page = 0;
        self.cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.page = 0;
        self.cursor = 0;
    }

    pub fn next_page(&mut self, repo: &RecipeRepository) {
        if self.page + 1 < self.total_pages(repo) {
            self.page += 1;
            self.cursor = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.cursor = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, repo: &RecipeRepository) {
        if self.cursor + 1 < self.page_slice(repo).len() {
            self.cursor += 1;
        }
    }

    pub fn selected_recipe(&self, repo: &RecipeRepository) -> Option<Recipe> {
        self.page_slice(repo).get(self.cursor).map(|r| (*r).clone())
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header / status
                Constraint::Length(3), // Search box
                Constraint::Min(5),    // Recipe list
                Constraint::Length(3), // Pagination
                Constraint::Length(1), // Controls
            ])
            .split(area);

        self.draw_header(f, chunks[0], state);
        self.draw_search(f, chunks[1]);
        self.draw_list(f, chunks[2], state);
        self.draw_pagination(f, chunks[3], &state.repository);

        let controls = match self.focus {
            InventoryFocus::Grid => {
                "[↑/↓] Naviguer  [←/→] Page  [Enter] Charger  [/] Chercher  [n] Nouveau  [r] Injection aléatoire  [Esc] QG"
            }
            InventoryFocus::Search => "[Enter] WEB_SEARCH  [Esc] Retour à la grille",
        };
        f.render_widget(
            Paragraph::new(controls)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[4],
        );

        // The authoring window floats over everything
        if let Some(form) = &self.form {
            let popup = centered_rect(70, 80, area);
            form.draw(f, popup);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, state: &GameState) {
        let status = if state.loading {
            Line::from(vec![
                Span::styled(
                    format!("{} ", throbber::spinner_char()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    throbber::sync_message(state.repository.len() as u64),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!(
                    "DATABASE_STATUS: ONLINE // {} ENTRIES FOUND",
                    state.repository.len()
                ),
                Style::default().fg(Color::Cyan),
            ))
        };
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "GRIMOIRE_V2.0",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            status,
        ]);
        f.render_widget(header, area);
    }

    fn draw_search(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == InventoryFocus::Search;
        let border_style = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if focused { "_" } else { "" };
        let content = if self.search_input.is_empty() && !focused {
            Span::styled("SEARCH_DATABASE...", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                format!("{}{}", self.search_input, cursor),
                Style::default().fg(Color::White),
            )
        };
        let search = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" RECHERCHE "),
        );
        f.render_widget(search, area);
    }

    fn draw_list(&self, f: &mut Frame, area: Rect, state: &GameState) {
        let page = self.page_slice(&state.repository);

        if page.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "ERROR_404: RECIPE_NOT_FOUND",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "// TRY A DIFFERENT SEARCH QUERY OR CHECK CONNECTION.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let lines: Vec<Line> = page
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                let selected = self.focus == InventoryFocus::Grid && i == self.cursor;
                let marker = if selected { "▶ " } else { "  " };
                let title_style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{:<38}", truncate(&recipe.title, 38)), title_style),
                    Span::styled(
                        format!(" +{}XP ", xp_for(recipe.difficulty)),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!(" {} ", recipe.prep_time),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(
                        format!(" ID: {}", recipe.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn draw_pagination(&self, f: &mut Frame, area: Rect, repo: &RecipeRepository) {
        let total_pages = self.total_pages(repo);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio((self.page + 1) as f64 / total_pages as f64)
            .label(format!("PAGE_{} // {}", self.page + 1, total_pages));
        f.render_widget(gauge, area);
    }
}

impl Default for InventoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Centers a percentage-sized popup inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
