use super::state::{GameState, Stage};
use crate::model::action::{Action, NUM_ACTIONS};

/// Every action id the state would accept next.
///
/// Each candidate is applied to a clone of the state; the aggregate is a few
/// hundred bytes, so probing all ninety ids stays cheap. Empty once the deal
/// has reached Scoring or Error.
pub fn legal_action_ids(state: &GameState) -> Vec<u8> {
    if matches!(state.stage(), Stage::Scoring | Stage::Error) {
        return Vec::new();
    }
    (0..NUM_ACTIONS)
        .filter(|&id| {
            let Some(action) = Action::from_id(id) else {
                return false;
            };
            let mut probe = state.clone();
            match action {
                Action::Bid(bid) => probe.apply_bid(bid).is_ok(),
                Action::Call(call) => probe.apply_call(call).is_ok(),
                Action::Play(card) => probe.apply_play(card).is_ok(),
            }
        })
        .collect()
}
