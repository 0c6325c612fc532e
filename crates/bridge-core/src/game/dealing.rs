use super::state::{GameError, GameState, Stage};
use crate::model::deck::Deck;
use crate::model::seat::Seat;

/// Registers a whole deck into a fresh state, card `i` going to seat `i` mod 4,
/// through the same registration path the play machine uses. A state dealt
/// this way knows every hand up front, so revoke detection becomes exact
/// instead of inferred.
pub fn deal_into(state: &mut GameState, deck: &Deck) -> Result<(), GameError> {
    if state.stage() != Stage::Bidding || state.cards_registered() != 0 {
        return Err(GameError::DealAfterStart);
    }
    for (index, &card) in deck.cards().iter().enumerate() {
        let seat = Seat::LOOP[index % 4];
        state.register_card(seat, card)?;
    }
    Ok(())
}
