//! Focus-mode overlay rendering.
//!
//! Takes over the whole frame while a cooking session runs: the Prep
//! checklist, the Cooking instruction card with its advisory countdown,
//! and the Victory recap. Floating reward pops render in the header.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::progress::RewardKind;
use crate::session::{CookingSession, SessionPhase};

pub fn render_focus(f: &mut Frame, area: Rect, session: &CookingSession, prep_cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Focus header with session totals + pops
            Constraint::Min(8),    // Phase content
            Constraint::Length(1), // Controls
        ])
        .split(area);

    draw_focus_header(f, chunks[0], session);

    match session.phase {
        SessionPhase::Prep => draw_prep(f, chunks[1], session, prep_cursor),
        SessionPhase::Cooking => draw_cooking(f, chunks[1], session),
        SessionPhase::Victory => draw_victory(f, chunks[1], session),
    }

    let controls = match session.phase {
        SessionPhase::Prep => "[↑/↓] Choisir  [Space] Cocher  [Enter] Lancer la cuisson  [Esc] Abandon",
        SessionPhase::Cooking => "[Enter] Étape suivante  [t] Timer start/pause  [Esc] Abandon",
        SessionPhase::Victory => "[Enter] Retourner au QG",
    };
    f.render_widget(
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

fn draw_focus_header(f: &mut Frame, area: Rect, session: &CookingSession) {
    let mut spans = vec![
        Span::styled(
            session.recipe.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("SESSION XP: {}", session.session_xp),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("LOOT: {}g", session.session_gold),
            Style::default().fg(Color::Yellow),
        ),
    ];

    // Active pops float at the right of the header
    for pop in &session.pops {
        let (suffix, color) = match pop.kind {
            RewardKind::Xp => ("XP", Color::Green),
            RewardKind::Gold => ("g", Color::Yellow),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("+{} {}", pop.amount, suffix),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" RITUEL EN COURS "));
    f.render_widget(header, area);
}

fn draw_prep(f: &mut Frame, area: Rect, session: &CookingSession, prep_cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Phase title
            Constraint::Min(4),    // Checklist
            Constraint::Length(2), // Gate status
        ])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            "INITIALISATION",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "// MISE EN PLACE DU RITUEL",
            Style::default().fg(Color::Magenta),
        )),
    ];
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    let items: Vec<Line> = session
        .recipe
        .ingredients
        .iter()
        .enumerate()
        .map(|(i, ing)| {
            let checked = session.checklist.get(i).copied().unwrap_or(false);
            let cursor = if i == prep_cursor { "▶ " } else { "  " };
            let box_char = if checked { "[x]" } else { "[ ]" };
            let name_style = if checked {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw(cursor),
                Span::styled(
                    box_char,
                    Style::default().fg(if checked { Color::Green } else { Color::Magenta }),
                ),
                Span::raw(" "),
                Span::styled(ing.name.clone(), name_style),
                Span::raw("  "),
                Span::styled(ing.quantity.clone(), Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(items).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let gate = if session.all_ingredients_checked() {
        Line::from(Span::styled(
            ">> LANCER LA CUISSON <<",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "RASSEMBLEZ VOS ARTEFACTS",
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(Paragraph::new(gate).alignment(Alignment::Center), chunks[2]);
}

fn draw_cooking(f: &mut Frame, area: Rect, session: &CookingSession) {
    let total = session.recipe.instructions.len();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(5),    // Instruction card
            Constraint::Length(3), // Timer
        ])
        .split(area);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio((session.instruction_index + 1) as f64 / total as f64)
        .label(format!("ÉTAPE {} / {}", session.instruction_index + 1, total));
    f.render_widget(progress, chunks[0]);

    let step = &session.recipe.instructions[session.instruction_index];
    let card = Paragraph::new(Line::from(Span::styled(
        step.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
    f.render_widget(card, chunks[1]);

    let timer_style = if session.timer.running {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let timer_status = if session.timer.running { "RUNNING" } else { "PAUSED" };
    let timer = Paragraph::new(Line::from(vec![
        Span::styled(session.timer.display(), timer_style),
        Span::raw("  "),
        Span::styled(timer_status, Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" MINUTEUR "));
    f.render_widget(timer, chunks[2]);
}

fn draw_victory(f: &mut Frame, area: Rect, session: &CookingSession) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUEST COMPLETE!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "RÉCOMPENSES",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("XP Total: +{} XP", session.session_xp),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("Gold: +{}g", session.session_gold),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::raw("Status: REPU")),
        Line::from(Span::styled(
            format!("Bonus: {}", session.recipe.stat_bonus),
            Style::default().fg(Color::Cyan),
        )),
    ];
    let recap = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(recap, area);
}
