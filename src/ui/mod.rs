//! Terminal UI: scene structs and the top-level frame layout.
//!
//! Every screen owns its interactive state (cursors, inputs, the active
//! session); the main loop feeds them events and this module lays out the
//! HUD header, the active scene and the journal footer.

pub mod focus_scene;
pub mod home_scene;
pub mod inventory_scene;
pub mod kitchen_scene;
pub mod recipe_form;
pub mod tavern_scene;
mod throbber;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::build_info;
use crate::game_state::GameState;
use crate::navigator::View;
use home_scene::HomeScreen;
use inventory_scene::InventoryScreen;
use kitchen_scene::KitchenScreen;
use tavern_scene::TavernScreen;

/// All per-screen interactive state, owned by the main loop.
pub struct Screens {
    pub home: HomeScreen,
    pub kitchen: KitchenScreen,
    pub tavern: TavernScreen,
    pub inventory: InventoryScreen,
}

impl Screens {
    pub fn new() -> Self {
        Self {
            home: HomeScreen::new(),
            kitchen: KitchenScreen::new(),
            tavern: TavernScreen::new(),
            inventory: InventoryScreen::new(),
        }
    }
}

impl Default for Screens {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws one frame. An active cooking session takes over the whole
/// terminal, exactly like the original full-screen ritual overlay.
pub fn draw_ui(frame: &mut Frame, state: &GameState, screens: &Screens) {
    let size = frame.size();

    if state.navigator.view == View::Kitchen {
        if let Some(session) = &screens.kitchen.session {
            focus_scene::render_focus(frame, size, session, screens.kitchen.prep_cursor);
            return;
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // HUD header
            Constraint::Min(10),   // Scene
            Constraint::Length(6), // Journal footer
        ])
        .split(size);

    draw_header(frame, chunks[0], state);

    match state.navigator.view {
        View::Home => screens.home.draw(frame, chunks[1]),
        View::Kitchen => screens.kitchen.draw(frame, chunks[1], state),
        View::Tavern => screens.tavern.draw(frame, chunks[1], &state.music),
        View::Inventory => screens.inventory.draw(frame, chunks[1], state),
    }

    draw_footer(frame, chunks[2], state);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let progress = &state.progress;
    let music_note = if state.music.playing { "►" } else { "❚❚" };
    let track = state.music.current_track();

    let mut spans = vec![
        Span::styled(
            " COOK & ROLL ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" LVL {} ", progress.level()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} XP ", progress.total_xp),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" {}g ", progress.gold),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {} — {}", music_note, track.title, track.artist),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if state.loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} sync", throbber::spinner_char()),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1)])
        .split(area);

    let entries: Vec<Line> = state
        .journal
        .recent(3)
        .map(|entry| {
            let style = if entry.highlight {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("> {}", entry.message), style))
        })
        .collect();
    let journal = Paragraph::new(entries)
        .block(Block::default().borders(Borders::ALL).title(" JOURNAL "));
    frame.render_widget(journal, chunks[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "Fait avec ❤ et de la Techno. Niveau {} atteint.  —  grimoire {} ({})",
            state.progress.level(),
            build_info::BUILD_DATE,
            build_info::BUILD_COMMIT
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[1]);
}
