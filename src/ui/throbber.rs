//! Shared spinner utilities for loading animations.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Atmospheric messages shown while a provider batch is in flight.
const SYNC_MESSAGES: [&str; 8] = [
    "Consultation des archives du donjon...",
    "Déchiffrage des parchemins...",
    "Négociation avec le scribe...",
    "Invocation de la base de données...",
    "Les grimoires s'ouvrent...",
    "Traduction depuis la Langue Commune...",
    "Le scribe trempe sa plume...",
    "Reliure des nouveaux sorts...",
];

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Current spinner character, cycling every 100ms.
pub fn spinner_char() -> char {
    SPINNER[((current_millis() / 100) % 10) as usize]
}

/// A sync flavor message, stable for a given seed.
pub fn sync_message(seed: u64) -> &'static str {
    SYNC_MESSAGES[(seed.wrapping_mul(7) as usize) % SYNC_MESSAGES.len()]
}
