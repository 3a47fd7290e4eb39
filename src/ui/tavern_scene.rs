//! Sonic Tavern scene: playlist, equalizer animation and the link form.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tavern::MusicState;

const EQUALIZER_COLUMNS: usize = 24;
const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub struct TavernScreen {
    /// When set, keystrokes edit the playlist URL instead of the player.
    pub link_input: Option<String>,
    /// Advanced by the main loop tick, drives the equalizer.
    pub anim_tick: u64,
}

impl TavernScreen {
    pub fn new() -> Self {
        Self {
            link_input: None,
            anim_tick: 0,
        }
    }

    pub fn open_link_form(&mut self, current_url: &str) {
        self.link_input = Some(current_url.to_string());
    }

    pub fn close_link_form(&mut self) {
        self.link_input = None;
    }

    pub fn is_editing(&self) -> bool {
        self.link_input.is_some()
    }

    /// Pseudo-equalizer bar heights: deterministic from the tick and the
    /// track BPM so the animation speeds up with faster songs.
    fn bar_heights(&self, bpm: u32, playing: bool) -> Vec<usize> {
        (0..EQUALIZER_COLUMNS)
            .map(|column| {
                if !playing {
                    return 0;
                }
                let phase = self
                    .anim_tick
                    .wrapping_mul(bpm as u64)
                    .wrapping_add(column as u64 * 37);
                ((phase.wrapping_mul(2654435761) >> 13) % BAR_GLYPHS.len() as u64) as usize
            })
            .collect()
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, music: &MusicState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Now playing
                Constraint::Length(4), // Equalizer
                Constraint::Min(6),    // Playlist
                Constraint::Length(3), // Link status / form
                Constraint::Length(1), // Controls
            ])
            .split(area);

        self.draw_now_playing(f, chunks[0], music);
        self.draw_equalizer(f, chunks[1], music);
        self.draw_playlist(f, chunks[2], music);
        self.draw_link(f, chunks[3], music);

        let controls = if self.is_editing() {
            "[Enter] ENREGISTRER & CONNECTER    [Esc] Annuler"
        } else {
            "[Space] Play/Pause    [n]/[p] Piste    [l] Lier une playlist    [Esc] QG"
        };
        f.render_widget(
            Paragraph::new(controls)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[4],
        );
    }

    fn draw_now_playing(&self, f: &mut Frame, area: Rect, music: &MusicState) {
        let track = music.current_track();
        let status = if music.playing { "► PLAYING" } else { "❚❚ PAUSED" };
        let lines = vec![
            Line::from(Span::styled(
                status,
                Style::default()
                    .fg(if music.playing { Color::Green } else { Color::DarkGray })
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    track.title.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  — {}", track.artist),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(Span::styled(
                format!("{}  |  {} BPM", track.duration, track.bpm),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" SONIC TAVERN ")),
            area,
        );
    }

    fn draw_equalizer(&self, f: &mut Frame, area: Rect, music: &MusicState) {
        let heights = self.bar_heights(music.current_track().bpm, music.playing);
        let bars: String = heights
            .iter()
            .map(|&h| BAR_GLYPHS[h.min(BAR_GLYPHS.len() - 1)])
            .collect();
        let equalizer = Paragraph::new(Line::from(Span::styled(
            bars,
            Style::default().fg(Color::Magenta),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(equalizer, area);
    }

    fn draw_playlist(&self, f: &mut Frame, area: Rect, music: &MusicState) {
        let lines: Vec<Line> = music
            .playlist
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let current = i == music.track_index;
                let marker = if current { "♪ " } else { "  " };
                let style = if current {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{}{:<22}", marker, track.title), style),
                    Span::styled(
                        format!("{:<14}", track.artist),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(track.duration.clone(), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" SET LIST ")),
            area,
        );
    }

    fn draw_link(&self, f: &mut Frame, area: Rect, music: &MusicState) {
        let content = match &self.link_input {
            Some(input) => Line::from(vec![
                Span::styled("URL: ", Style::default().fg(Color::Yellow)),
                Span::styled(format!("{}_", input), Style::default().fg(Color::White)),
            ]),
            None if music.linked => Line::from(Span::styled(
                format!(
                    "Compte lié — {}",
                    music.embed_url.as_deref().unwrap_or("(aucune URL)")
                ),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(
                "Aucune playlist liée. [l] pour connecter.",
                Style::default().fg(Color::DarkGray),
            )),
        };
        f.render_widget(
            Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" CONFIGURATION DU COMPTE "),
            ),
            area,
        );
    }
}

impl Default for TavernScreen {
    fn default() -> Self {
        Self::new()
    }
}
