//! Sonic Tavern: the decorative music player shell.
//!
//! No audio is produced here: the "player" delegates to an external
//! embedded widget, and this state only drives the HUD ticker, the
//! equalizer animation and the playlist display.

use serde::{Deserialize, Serialize};

use crate::progress::{PlayerProgress, Reward};
use crate::rewards::{PLAYLIST_LINK_GOLD, PLAYLIST_LINK_XP};

pub const DEFAULT_PLAYLIST_URL: &str =
    "https://open.spotify.com/playlist/0PLEVb9jlXz2Y9K4JMDa6C?si=5711e905448f4255";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub bpm: u32,
}

/// The fixed tavern set list.
pub fn default_playlist() -> Vec<Track> {
    let tracks = [
        ("1", "Neon Dungeon", "CyberBard", "4:20", 128),
        ("2", "Critical Bass", "D20 Drop", "3:45", 140),
        ("3", "Mana Potion", "Alchemist", "5:12", 124),
        ("4", "Boss Fight Techno", "Glitch Wizard", "6:00", 150),
    ];
    tracks
        .into_iter()
        .map(|(id, title, artist, duration, bpm)| Track {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            duration: duration.to_string(),
            bpm,
        })
        .collect()
}

/// Converts a standard Spotify URL into its embed form. Idempotent;
/// non-Spotify URLs pass through untouched.
pub fn to_embed_url(url: &str) -> String {
    if url.contains("open.spotify.com") && !url.contains("/embed") {
        url.replace("open.spotify.com", "open.spotify.com/embed")
    } else {
        url.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct MusicState {
    pub playing: bool,
    pub track_index: usize,
    pub linked: bool,
    pub playlist_url: String,
    pub embed_url: Option<String>,
    pub playlist: Vec<Track>,
}

impl MusicState {
    /// Starts linked to the default playlist, paused.
    pub fn new() -> Self {
        Self {
            playing: false,
            track_index: 0,
            linked: true,
            playlist_url: DEFAULT_PLAYLIST_URL.to_string(),
            embed_url: Some(to_embed_url(DEFAULT_PLAYLIST_URL)),
            playlist: default_playlist(),
        }
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist[self.track_index]
    }

    /// Play/pause toggle. Returns false when unlinked, so the caller can
    /// open the link form instead.
    pub fn toggle_play(&mut self) -> bool {
        if !self.linked {
            return false;
        }
        self.playing = !self.playing;
        true
    }

    pub fn next_track(&mut self) {
        if self.linked {
            self.track_index = (self.track_index + 1) % self.playlist.len();
            self.playing = true;
        }
    }

    pub fn prev_track(&mut self) {
        if self.linked {
            self.track_index =
                (self.track_index + self.playlist.len() - 1) % self.playlist.len();
            self.playing = true;
        }
    }

    /// Stores a playlist URL, marks the account linked and starts the
    /// visualizer. Grants the one-shot connection bonus. Blank input is
    /// rejected.
    pub fn link_playlist(&mut self, url: &str, progress: &mut PlayerProgress) -> bool {
        if url.trim().is_empty() {
            return false;
        }
        self.playlist_url = url.trim().to_string();
        self.embed_url = Some(to_embed_url(url.trim()));
        self.linked = true;
        self.playing = true;
        progress.apply(Reward::xp(PLAYLIST_LINK_XP));
        progress.apply(Reward::gold(PLAYLIST_LINK_GOLD));
        true
    }
}

impl Default for MusicState {
    fn default() -> Self {
        Self::new()
    }
}
