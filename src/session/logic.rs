//! Cooking session transitions and reward accounting.
//!
//! Every grant lands in three places at the same instant: a pop for the
//! overlay, the session totals, and the process-wide ledger. Abandoning a
//! session later never claws any of it back.

use super::types::{CookingSession, RewardPop, SessionPhase};
use crate::progress::{PlayerProgress, Reward, RewardKind};
use crate::rewards::{gold_for, INGREDIENT_CHECK_XP, STEP_COMPLETE_XP, VICTORY_XP};

fn grant(
    session: &mut CookingSession,
    amount: u64,
    kind: RewardKind,
    progress: &mut PlayerProgress,
) {
    progress.apply(Reward { amount, kind });
    match kind {
        RewardKind::Xp => session.session_xp += amount,
        RewardKind::Gold => session.session_gold += amount,
    }
    session.pops.push(RewardPop::new(amount, kind));
}

/// Flips checklist entry `index` during Prep.
///
/// A flip to true grants the ingredient XP on the spot; a flip back to
/// false grants nothing and revokes nothing, so check/uncheck churn
/// inflates totals. That matches the live game and stays until someone
/// decides otherwise.
pub fn toggle_ingredient(
    session: &mut CookingSession,
    index: usize,
    progress: &mut PlayerProgress,
) {
    if session.phase != SessionPhase::Prep || index >= session.checklist.len() {
        return;
    }
    session.checklist[index] = !session.checklist[index];
    if session.checklist[index] {
        grant(session, INGREDIENT_CHECK_XP, RewardKind::Xp, progress);
    }
}

/// Prep → Cooking. Only permitted once every ingredient is checked.
/// Returns whether the transition happened.
pub fn begin_cooking(session: &mut CookingSession) -> bool {
    if session.phase != SessionPhase::Prep || !session.all_ingredients_checked() {
        return false;
    }
    session.phase = SessionPhase::Cooking;
    true
}

/// Completes the current instruction step.
///
/// Grants the step XP, then either moves to the next instruction or, on
/// the last one, pays out the terminal gold + victory XP and enters
/// Victory.
pub fn advance(session: &mut CookingSession, progress: &mut PlayerProgress) {
    if session.phase != SessionPhase::Cooking {
        return;
    }
    grant(session, STEP_COMPLETE_XP, RewardKind::Xp, progress);

    if session.is_last_instruction() {
        let payout = gold_for(&session.recipe);
        grant(session, payout, RewardKind::Gold, progress);
        grant(session, VICTORY_XP, RewardKind::Xp, progress);
        session.phase = SessionPhase::Victory;
    } else {
        session.instruction_index += 1;
    }
}

/// Per-tick upkeep: ages pops out of existence and drives the countdown.
pub fn tick_session(session: &mut CookingSession, delta: f64) {
    session.pops.retain_mut(|pop| pop.tick(delta));
    session.timer.tick(delta);
}
