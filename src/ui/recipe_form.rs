//! The recipe authoring form (WIZARD_CREATOR.EXE).

use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::game_state::GameState;
use crate::progress::Reward;
use crate::recipe::{fresh_recipe_id, Difficulty, RecipeDraft};
use crate::rewards::{AUTHORED_RECIPE_GOLD, AUTHORED_RECIPE_XP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    PrepTime,
    Difficulty,
    Ingredients,
    Instructions,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::Description,
        FormField::PrepTime,
        FormField::Difficulty,
        FormField::Ingredients,
        FormField::Instructions,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Recipe_Name",
            FormField::Description => "Lore_Description",
            FormField::PrepTime => "Cast_Time",
            FormField::Difficulty => "Difficulty_Level",
            FormField::Ingredients => "Ingredients_List (1 par ligne)",
            FormField::Instructions => "Execution_Steps (1 par ligne)",
        }
    }

    /// Multi-line fields, where Enter inserts a newline instead of saving.
    fn is_textarea(&self) -> bool {
        matches!(self, FormField::Ingredients | FormField::Instructions)
    }
}

/// What a keypress did to the form, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    None,
    /// Draft validated, recipe added, bonus granted.
    Saved,
}

pub struct RecipeFormScreen {
    pub draft: RecipeDraft,
    pub focus: FormField,
    pub error: Option<String>,
}

impl RecipeFormScreen {
    pub fn new() -> Self {
        Self {
            draft: RecipeDraft {
                difficulty: Some(Difficulty::Level1),
                ..Default::default()
            },
            focus: FormField::Title,
            error: None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Description => Some(&mut self.draft.description),
            FormField::PrepTime => Some(&mut self.draft.prep_time),
            FormField::Ingredients => Some(&mut self.draft.ingredients_text),
            FormField::Instructions => Some(&mut self.draft.instructions_text),
            FormField::Difficulty => None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if self.focus == FormField::Difficulty {
            if c == ' ' {
                self.cycle_difficulty();
            }
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        let index = FormField::ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ORDER[(index + 1) % FormField::ORDER.len()];
    }

    pub fn prev_field(&mut self) {
        let index = FormField::ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ORDER[(index + FormField::ORDER.len() - 1) % FormField::ORDER.len()];
    }

    fn cycle_difficulty(&mut self) {
        let current = self.draft.difficulty.unwrap_or(Difficulty::Level1);
        self.draft.difficulty = Some(current.cycle());
    }

    /// Enter: newline in a textarea, tier cycling on the difficulty row,
    /// save attempt anywhere else.
    pub fn handle_enter(&mut self, state: &mut GameState, rng: &mut impl Rng) -> FormEvent {
        if self.focus.is_textarea() {
            if let Some(text) = self.focused_text_mut() {
                text.push('\n');
            }
            return FormEvent::None;
        }
        if self.focus == FormField::Difficulty {
            self.cycle_difficulty();
            return FormEvent::None;
        }
        self.try_save(state, rng)
    }

    /// Validates and commits the draft: fresh id, unconditional append,
    /// immediate authoring bonus.
    pub fn try_save(&mut self, state: &mut GameState, rng: &mut impl Rng) -> FormEvent {
        if let Err(message) = self.draft.validate() {
            self.error = Some(message);
            return FormEvent::None;
        }
        let recipe = self.draft.build(fresh_recipe_id(rng));
        let title = recipe.title.clone();
        state.repository.add(recipe);
        state.progress.apply(Reward::xp(AUTHORED_RECIPE_XP));
        state.progress.apply(Reward::gold(AUTHORED_RECIPE_GOLD));
        state.journal.add(
            format!("Nouveau sort transcrit : {} (+150 XP, +20g)", title),
            true,
        );
        FormEvent::Saved
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);

        let window = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" WIZARD_CREATOR.EXE ");
        let inner = window.inner(area);
        f.render_widget(window, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(2), // Description
                Constraint::Length(2), // Cast time
                Constraint::Length(2), // Difficulty
                Constraint::Min(3),    // Ingredients
                Constraint::Min(3),    // Instructions
                Constraint::Length(2), // Status bar
            ])
            .split(inner);

        self.draw_text_field(f, chunks[0], FormField::Title, &self.draft.title);
        self.draw_text_field(f, chunks[1], FormField::Description, &self.draft.description);
        self.draw_text_field(f, chunks[2], FormField::PrepTime, &self.draft.prep_time);

        let difficulty = self.draft.difficulty.unwrap_or(Difficulty::Level1);
        self.draw_text_field(f, chunks[3], FormField::Difficulty, difficulty.label());

        self.draw_text_field(f, chunks[4], FormField::Ingredients, &self.draft.ingredients_text);
        self.draw_text_field(f, chunks[5], FormField::Instructions, &self.draft.instructions_text);

        let status = match &self.error {
            Some(error) => Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(vec![
                Span::styled("MEMORY: 640K OK", Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
                Span::styled(
                    "[Tab] Champ suivant  [Enter] SAVE_DATA  [Esc] Annuler",
                    Style::default().fg(Color::Gray),
                ),
            ]),
        };
        f.render_widget(Paragraph::new(status), chunks[6]);
    }

    fn draw_text_field(&self, f: &mut Frame, area: Rect, field: FormField, value: &str) {
        let focused = self.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "_" } else { "" };
        // Newlines render as a pilcrow so multi-line content stays on one row
        let display = value.replace('\n', " ¶ ");
        let lines = vec![Line::from(vec![
            Span::styled(format!("{}: ", field.label()), label_style),
            Span::styled(
                format!("{}{}", display, cursor),
                Style::default().fg(Color::White),
            ),
        ])];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}

impl Default for RecipeFormScreen {
    fn default() -> Self {
        Self::new()
    }
}
