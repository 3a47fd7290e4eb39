use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use grimoire::build_info;
use grimoire::constants::TICK_INTERVAL_MS;
use grimoire::game_state::GameState;
use grimoire::navigator::View;
use grimoire::provider::{self, ProviderError};
use grimoire::recipe::Recipe;
use grimoire::session::{advance, begin_cooking, toggle_ingredient, SessionPhase};
use grimoire::ui::inventory_scene::{InventoryAction, InventoryFocus};
use grimoire::ui::recipe_form::{FormEvent, RecipeFormScreen};
use grimoire::ui::{self, Screens};

/// Which batch a background worker is fetching, for journal reporting.
enum FetchKind {
    Starter,
    Random,
    Search(String),
}

impl FetchKind {
    fn label(&self) -> String {
        match self {
            FetchKind::Starter => "Synchronisation initiale".to_string(),
            FetchKind::Random => "Injection aléatoire".to_string(),
            FetchKind::Search(term) => format!("WEB_SEARCH « {} »", term),
        }
    }
}

type FetchHandle = JoinHandle<Result<Vec<Recipe>, ProviderError>>;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "grimoire {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Grimoire - Terminal Recipe RPG\n");
                println!("Usage: grimoire [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'grimoire --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut state = GameState::new();
    let mut screens = Screens::new();

    // Populate the grimoire in the background; the UI stays responsive and
    // simply shows the sync spinner until the batch lands.
    state.loading = true;
    state
        .journal
        .add("Connexion aux archives du donjon...", false);
    let mut fetch: Option<(FetchKind, FetchHandle)> = Some((
        FetchKind::Starter,
        thread::spawn(provider::fetch_starter_batch),
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();

    loop {
        // Check if a background fetch completed
        if let Some((kind, handle)) = fetch.take() {
            if handle.is_finished() {
                finish_fetch(&mut state, &mut screens, kind, handle);
            } else {
                // Not finished yet, put it back
                fetch = Some((kind, handle));
            }
        }

        terminal.draw(|frame| ui::draw_ui(frame, &state, &screens))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match state.navigator.view {
                    View::Home => {
                        if handle_home_key(key.code, &mut state, &mut screens) {
                            break;
                        }
                    }
                    View::Kitchen => handle_kitchen_key(key.code, &mut state, &mut screens),
                    View::Tavern => handle_tavern_key(key.code, &mut state, &mut screens),
                    View::Inventory => {
                        if let Some(action) =
                            handle_inventory_key(key.code, &mut state, &mut screens)
                        {
                            apply_inventory_action(action, &mut state, &mut screens, &mut fetch);
                        }
                    }
                }
            }
        }

        // Game tick every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            let delta = TICK_INTERVAL_MS as f64 / 1000.0;
            let mut rng = rand::thread_rng();
            screens.kitchen.tick(&mut state, &mut rng, delta);
            screens.tavern.anim_tick = screens.tavern.anim_tick.wrapping_add(1);
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}

/// Merges a completed batch into the repository, or journals the failure.
/// Either way the loading flag clears and the repository keeps its prior
/// state on any error.
fn finish_fetch(state: &mut GameState, screens: &mut Screens, kind: FetchKind, handle: FetchHandle) {
    let label = kind.label();
    match handle.join() {
        Ok(Ok(batch)) => {
            if batch.is_empty() {
                state.journal.add(format!("{} : aucun résultat.", label), false);
            } else {
                let fetched = batch.len();
                let added = state.repository.merge(batch);
                state.journal.add(
                    format!(
                        "{} : +{} recettes ({} doublons, {} au total)",
                        label,
                        added,
                        fetched - added,
                        state.repository.len()
                    ),
                    added > 0,
                );
            }
        }
        Ok(Err(e)) => state.journal.add(format!("{} — échec : {}", label, e), false),
        Err(_) => state
            .journal
            .add(format!("{} — échec : worker perdu", label), false),
    }
    state.loading = false;
    screens.inventory.clamp(&state.repository);
}

/// Switches screens through the navigator, handing any pending recipe
/// selection to a freshly reset kitchen.
fn enter_view(state: &mut GameState, screens: &mut Screens, view: View) {
    state.navigator.change_view(view);
    if view == View::Kitchen {
        screens.kitchen.reset();
        if let Some(recipe) = state.navigator.take_pending() {
            screens.kitchen.set_selected(recipe);
        }
    }
}

/// Returns true when the player quits the game.
fn handle_home_key(code: KeyCode, state: &mut GameState, screens: &mut Screens) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Up | KeyCode::Char('k') => screens.home.move_up(),
        KeyCode::Down | KeyCode::Char('j') => screens.home.move_down(),
        KeyCode::Enter => {
            let view = screens.home.selected_view();
            enter_view(state, screens, view);
        }
        _ => {}
    }
    false
}

fn handle_kitchen_key(code: KeyCode, state: &mut GameState, screens: &mut Screens) {
    if screens.kitchen.session.is_some() {
        handle_focus_key(code, state, screens);
        return;
    }
    match code {
        KeyCode::Char('r') | KeyCode::Char('R') => screens.kitchen.start_roll(state),
        KeyCode::Enter => screens.kitchen.start_session(),
        KeyCode::Esc => enter_view(state, screens, View::Home),
        _ => {}
    }
}

fn handle_focus_key(code: KeyCode, state: &mut GameState, screens: &mut Screens) {
    let phase = match &screens.kitchen.session {
        Some(session) => session.phase,
        None => return,
    };

    match phase {
        SessionPhase::Prep => match code {
            KeyCode::Up => {
                screens.kitchen.prep_cursor = screens.kitchen.prep_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = screens
                    .kitchen
                    .session
                    .as_ref()
                    .map(|s| s.checklist.len())
                    .unwrap_or(0);
                if screens.kitchen.prep_cursor + 1 < count {
                    screens.kitchen.prep_cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                let index = screens.kitchen.prep_cursor;
                if let Some(session) = screens.kitchen.session.as_mut() {
                    toggle_ingredient(session, index, &mut state.progress);
                }
            }
            KeyCode::Enter => {
                if let Some(session) = screens.kitchen.session.as_mut() {
                    begin_cooking(session);
                }
            }
            KeyCode::Esc => abandon_session(state, screens),
            _ => {}
        },
        SessionPhase::Cooking => match code {
            KeyCode::Enter | KeyCode::Char('n') => {
                if let Some(session) = screens.kitchen.session.as_mut() {
                    advance(session, &mut state.progress);
                }
            }
            KeyCode::Char('t') | KeyCode::Char(' ') => {
                if let Some(session) = screens.kitchen.session.as_mut() {
                    session.timer.toggle();
                }
            }
            KeyCode::Esc => abandon_session(state, screens),
            _ => {}
        },
        SessionPhase::Victory => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                if let Some(session) = &screens.kitchen.session {
                    state.journal.add(
                        format!(
                            "Rituel accompli : {} (+{} XP, +{}g)",
                            session.recipe.title, session.session_xp, session.session_gold
                        ),
                        true,
                    );
                }
                screens.kitchen.quit_session();
            }
        }
    }
}

/// Abandon keeps everything already granted; only session-local state dies.
fn abandon_session(state: &mut GameState, screens: &mut Screens) {
    state
        .journal
        .add("Rituel abandonné. Les récompenses déjà acquises restent.", false);
    screens.kitchen.quit_session();
}

fn handle_tavern_key(code: KeyCode, state: &mut GameState, screens: &mut Screens) {
    if screens.tavern.is_editing() {
        match code {
            KeyCode::Char(c) => {
                if let Some(input) = screens.tavern.link_input.as_mut() {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = screens.tavern.link_input.as_mut() {
                    input.pop();
                }
            }
            KeyCode::Enter => {
                let url = screens.tavern.link_input.clone().unwrap_or_default();
                if state.music.link_playlist(&url, &mut state.progress) {
                    state
                        .journal
                        .add("Playlist connectée ! (+50 XP, +10g)", true);
                    screens.tavern.close_link_form();
                }
            }
            KeyCode::Esc => screens.tavern.close_link_form(),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char(' ') => {
            if !state.music.toggle_play() {
                // Unlinked player opens the account form instead
                let url = state.music.playlist_url.clone();
                screens.tavern.open_link_form(&url);
            }
        }
        KeyCode::Char('n') | KeyCode::Right => state.music.next_track(),
        KeyCode::Char('p') | KeyCode::Left => state.music.prev_track(),
        KeyCode::Char('l') => {
            let url = state.music.playlist_url.clone();
            screens.tavern.open_link_form(&url);
        }
        KeyCode::Esc => enter_view(state, screens, View::Home),
        _ => {}
    }
}

fn handle_inventory_key(
    code: KeyCode,
    state: &mut GameState,
    screens: &mut Screens,
) -> Option<InventoryAction> {
    if screens.inventory.form.is_some() {
        handle_form_key(code, state, screens);
        return None;
    }

    match screens.inventory.focus {
        InventoryFocus::Search => match code {
            KeyCode::Char(c) => screens.inventory.push_search_char(c),
            KeyCode::Backspace => screens.inventory.pop_search_char(),
            KeyCode::Enter => {
                let term = screens.inventory.search_input.trim().to_string();
                if !term.is_empty() && !state.loading {
                    return Some(InventoryAction::RemoteSearch(term));
                }
            }
            KeyCode::Esc => screens.inventory.focus = InventoryFocus::Grid,
            _ => {}
        },
        InventoryFocus::Grid => match code {
            KeyCode::Char('/') => screens.inventory.focus = InventoryFocus::Search,
            KeyCode::Char('n') => screens.inventory.form = Some(RecipeFormScreen::new()),
            KeyCode::Char('r') => {
                if !state.loading {
                    return Some(InventoryAction::FetchRandom);
                }
            }
            KeyCode::Up => screens.inventory.move_up(),
            KeyCode::Down => screens.inventory.move_down(&state.repository),
            KeyCode::Left => screens.inventory.prev_page(),
            KeyCode::Right => screens.inventory.next_page(&state.repository),
            KeyCode::Enter => {
                return screens
                    .inventory
                    .selected_recipe(&state.repository)
                    .map(InventoryAction::Select);
            }
            KeyCode::Esc => enter_view(state, screens, View::Home),
            _ => {}
        },
    }
    None
}

fn handle_form_key(code: KeyCode, state: &mut GameState, screens: &mut Screens) {
    let mut rng = rand::thread_rng();
    let Some(form) = screens.inventory.form.as_mut() else {
        return;
    };
    match code {
        KeyCode::Char(c) => form.handle_char(c),
        KeyCode::Backspace => form.handle_backspace(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => {
            if form.handle_enter(state, &mut rng) == FormEvent::Saved {
                screens.inventory.form = None;
                screens.inventory.clamp(&state.repository);
            }
        }
        KeyCode::Esc => screens.inventory.form = None,
        _ => {}
    }
}

fn apply_inventory_action(
    action: InventoryAction,
    state: &mut GameState,
    screens: &mut Screens,
    fetch: &mut Option<(FetchKind, FetchHandle)>,
) {
    match action {
        InventoryAction::Select(recipe) => {
            state.navigator.select_recipe(recipe);
            screens.kitchen.reset();
            if let Some(pending) = state.navigator.take_pending() {
                screens.kitchen.set_selected(pending);
            }
        }
        InventoryAction::RemoteSearch(term) => {
            if fetch.is_none() {
                state.loading = true;
                let query = term.clone();
                *fetch = Some((
                    FetchKind::Search(term),
                    thread::spawn(move || provider::search_remote(&query)),
                ));
            }
        }
        InventoryAction::FetchRandom => {
            if fetch.is_none() {
                state.loading = true;
                *fetch = Some((FetchKind::Random, thread::spawn(provider::fetch_random_batch)));
            }
        }
    }
}
