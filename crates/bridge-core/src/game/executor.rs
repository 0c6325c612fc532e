use super::state::{GameError, GameState};
use crate::model::action::Action;
use crate::model::seat::Seat;
use tracing::{Level, event};

/// Who acted (as of when the action was attempted) and the raw action id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub actor: Option<Seat>,
    pub action: u8,
}

/// Outcome of one executor call: how many actions succeeded, the per-action
/// trace, and the first error if one latched. On error the failing action's
/// history entry is recorded but not counted in `applied`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    pub applied: usize,
    pub history: Vec<HistoryEntry>,
    pub error: Option<GameError>,
}

/// Applies an ordered sequence of action ids to the state, stopping at the
/// first illegal one. The first error moves the state to the absorbing Error
/// stage and is latched into the report; nothing after it is processed.
pub fn execute_actions(state: &mut GameState, action_ids: &[u8]) -> ExecutionReport {
    let mut history = Vec::with_capacity(action_ids.len());
    for (index, &id) in action_ids.iter().enumerate() {
        history.push(HistoryEntry {
            actor: state.next_to_act(),
            action: id,
        });
        let outcome = match Action::from_id(id) {
            Some(Action::Bid(bid)) => state.apply_bid(bid),
            Some(Action::Call(call)) => state.apply_call(call),
            Some(Action::Play(card)) => state.apply_play(card),
            None => Err(GameError::UnknownAction(id)),
        };
        match outcome {
            Ok(()) => {
                event!(
                    target: "bridge_core::executor",
                    Level::DEBUG,
                    index = index as u64,
                    action = u64::from(id),
                    "action applied"
                );
            }
            Err(error) => {
                state.mark_error();
                event!(
                    target: "bridge_core::executor",
                    Level::WARN,
                    index = index as u64,
                    action = u64::from(id),
                    %error,
                    "action rejected"
                );
                return ExecutionReport {
                    applied: index,
                    history,
                    error: Some(error),
                };
            }
        }
    }
    ExecutionReport {
        applied: action_ids.len(),
        history,
        error: None,
    }
}
