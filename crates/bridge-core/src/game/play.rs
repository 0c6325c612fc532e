use super::state::{GameError, GameState, Stage};
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::CurrentTrick;

impl GameState {
    /// Plays a card for the seat on turn.
    ///
    /// The first failed check wins, but it does not short-circuit the
    /// follow-suit bookkeeping: a non-follow still collapses the length bound
    /// on the led suit before the error is reported.
    pub fn apply_play(&mut self, card: Card) -> Result<(), GameError> {
        if self.stage != Stage::Play {
            return Err(GameError::CardOutsidePlay);
        }
        let seat = self.seat_on_turn();
        let mut latched: Option<GameError> = None;

        if self.is_played(card) {
            latched = Some(GameError::CardAlreadyPlayed);
        }

        if let Some(lead) = self.trick.lead_suit() {
            if card.suit != lead {
                // A visible revoke: the seat is known to still hold the led
                // suit. Either way, the seat is now treated as exhausted in it.
                if self.holds_unplayed_in(seat, lead) {
                    latched.get_or_insert(GameError::Revoke);
                }
                self.lengths.mark_exhausted(seat, lead);
            }
        }

        if latched.is_none() && !self.is_dealt(seat, card) {
            if let Err(error) = self.register_card(seat, card) {
                latched = Some(error);
            }
        }

        if let Some(error) = latched {
            return Err(error);
        }

        self.played_cards[card.suit.index()][card.rank.index()] = true;
        let trump = self.trump_suit();
        self.trick.record(seat, card, trump);

        if !self.trick.is_complete() {
            self.next_to_act = Some(seat.next());
        } else {
            let winner = self
                .trick
                .winning()
                .expect("a complete trick has a winner")
                .seat;
            self.trick = CurrentTrick::empty();
            self.tricks_taken[winner.index()] += 1;
            if self.tricks_taken_total() == 13 {
                self.stage = Stage::Scoring;
                self.next_to_act = None;
            } else {
                self.next_to_act = Some(winner);
            }
        }
        Ok(())
    }

    /// Learns that `seat` holds `card`. Rejects a card owned elsewhere or
    /// already played, a fourteenth card, and any registration that pushes
    /// the seat's suit-length lower bound past an inferred upper bound.
    pub fn register_card(&mut self, seat: Seat, card: Card) -> Result<(), GameError> {
        for other in Seat::LOOP {
            if other != seat && self.is_dealt(other, card) {
                return Err(GameError::DuplicateCard);
            }
        }
        if self.is_played(card) {
            return Err(GameError::CardAlreadyPlayed);
        }
        if self.hand_size(seat) >= 13 {
            return Err(GameError::HandOverflow);
        }
        if self.is_dealt(seat, card) {
            return Ok(());
        }
        self.dealt_cards[seat.index()][card.suit.index()][card.rank.index()] = true;
        self.lengths
            .note_registered(seat, card.suit)
            .map_err(|_| GameError::InferredRevoke)
    }

    /// The trump suit in effect, `None` in a notrump contract.
    pub fn trump_suit(&self) -> Option<Suit> {
        self.standing_bid
            .and_then(|standing| standing.bid.strain.trump_suit())
    }

    fn holds_unplayed_in(&self, seat: Seat, suit: Suit) -> bool {
        Rank::ORDERED.iter().any(|rank| {
            self.dealt_cards[seat.index()][suit.index()][rank.index()]
                && !self.played_cards[suit.index()][rank.index()]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, GameError, GameState, Seat, Stage, Suit};
    use crate::model::bid::{Bid, Call, Level};
    use crate::model::rank::Rank;
    use crate::model::strain::Strain;

    /// Runs an uncontested auction so that South declares `strain` at the one
    /// level, leaving West on lead.
    fn start_play(strain: Strain) -> GameState {
        let mut state = GameState::new();
        state.apply_bid(Bid::new(Level::One, strain)).unwrap();
        for _ in 0..3 {
            state.apply_call(Call::Pass).unwrap();
        }
        assert_eq!(state.stage(), Stage::Play);
        assert_eq!(state.next_to_act(), Some(Seat::West));
        state
    }

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn playing_registers_the_card_and_advances_the_trick() {
        let mut state = start_play(Strain::NoTrump);
        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap();

        assert!(state.is_dealt(Seat::West, card(Rank::Two, Suit::Clubs)));
        assert!(state.is_played(card(Rank::Two, Suit::Clubs)));
        assert_eq!(state.lengths().get(Seat::West, Suit::Clubs).min(), 1);
        assert_eq!(state.trick().position(), 1);
        assert_eq!(state.trick().lead_suit(), Some(Suit::Clubs));
        assert_eq!(state.next_to_act(), Some(Seat::North));
    }

    #[test]
    fn the_trick_winner_leads_the_next_trick() {
        let mut state = start_play(Strain::NoTrump);
        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // West
        state.apply_play(card(Rank::Queen, Suit::Clubs)).unwrap(); // North
        state.apply_play(card(Rank::Three, Suit::Clubs)).unwrap(); // East
        state.apply_play(card(Rank::Four, Suit::Clubs)).unwrap(); // South

        assert_eq!(state.tricks_taken(Seat::North), 1);
        assert_eq!(state.next_to_act(), Some(Seat::North));
        assert_eq!(state.trick().position(), 0);
        assert_eq!(state.trick().lead_suit(), None);
    }

    #[test]
    fn a_trump_takes_the_trick_from_the_led_suit() {
        let mut state = start_play(Strain::Clubs);
        assert_eq!(state.trump_suit(), Some(Suit::Clubs));

        state.apply_play(card(Rank::Ace, Suit::Diamonds)).unwrap(); // West leads
        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // North ruffs
        state.apply_play(card(Rank::King, Suit::Diamonds)).unwrap(); // East
        state.apply_play(card(Rank::Queen, Suit::Diamonds)).unwrap(); // South

        assert_eq!(state.tricks_taken(Seat::North), 1);
        assert_eq!(state.next_to_act(), Some(Seat::North));
    }

    #[test]
    fn a_known_card_in_the_led_suit_makes_a_discard_a_revoke() {
        let mut state = start_play(Strain::NoTrump);
        state
            .register_card(Seat::North, card(Rank::Five, Suit::Clubs))
            .unwrap();

        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // West leads
        let result = state.apply_play(card(Rank::Two, Suit::Diamonds)); // North discards
        assert_eq!(result, Err(GameError::Revoke));
    }

    #[test]
    fn a_discard_collapses_the_length_bound() {
        let mut state = start_play(Strain::NoTrump);
        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // West
        state.apply_play(card(Rank::Two, Suit::Diamonds)).unwrap(); // North, out of clubs

        let bounds = state.lengths().get(Seat::North, Suit::Clubs);
        assert_eq!(bounds.max(), 0);
        assert_eq!(state.stage(), Stage::Play);
    }

    #[test]
    fn registering_into_an_exhausted_suit_is_an_inferred_revoke() {
        let mut state = start_play(Strain::NoTrump);
        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // West
        state.apply_play(card(Rank::Two, Suit::Diamonds)).unwrap(); // North discards
        state.apply_play(card(Rank::Three, Suit::Clubs)).unwrap(); // East
        state.apply_play(card(Rank::Four, Suit::Clubs)).unwrap(); // South wins

        // South leads clubs again; North now claims a club it cannot hold.
        state.apply_play(card(Rank::Five, Suit::Clubs)).unwrap(); // South
        state.apply_play(card(Rank::Six, Suit::Clubs)).unwrap(); // West
        let result = state.apply_play(card(Rank::Seven, Suit::Clubs)); // North
        assert_eq!(result, Err(GameError::InferredRevoke));
    }

    #[test]
    fn a_card_registered_to_another_seat_is_a_duplicate() {
        let mut state = start_play(Strain::NoTrump);
        state
            .register_card(Seat::West, card(Rank::Nine, Suit::Clubs))
            .unwrap();

        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // West
        let result = state.apply_play(card(Rank::Nine, Suit::Clubs)); // North
        assert_eq!(result, Err(GameError::DuplicateCard));
    }

    #[test]
    fn a_fourteenth_card_overflows_the_hand() {
        let mut state = GameState::new();
        for rank in Rank::ORDERED {
            state.register_card(Seat::West, card(rank, Suit::Clubs)).unwrap();
        }
        let result = state.register_card(Seat::West, card(Rank::Two, Suit::Hearts));
        assert_eq!(result, Err(GameError::HandOverflow));
    }

    #[test]
    fn replaying_a_card_latches_but_still_tightens_the_bound() {
        let mut state = start_play(Strain::NoTrump);
        state.apply_play(card(Rank::Two, Suit::Clubs)).unwrap(); // West
        state.apply_play(card(Rank::Three, Suit::Clubs)).unwrap(); // North
        state.apply_play(card(Rank::Four, Suit::Clubs)).unwrap(); // East
        state.apply_play(card(Rank::Five, Suit::Clubs)).unwrap(); // South wins

        state.apply_play(card(Rank::Two, Suit::Diamonds)).unwrap(); // South leads
        // West replays the two of clubs: off the led suit and already played.
        let result = state.apply_play(card(Rank::Two, Suit::Clubs)); // West
        assert_eq!(result, Err(GameError::CardAlreadyPlayed));
        assert_eq!(result.unwrap_err().to_string(), "Card already played");
        // The exhaustion inference on diamonds still landed.
        assert_eq!(state.lengths().get(Seat::West, Suit::Diamonds).max(), 0);
    }

    #[test]
    fn plays_are_rejected_during_the_auction() {
        let mut state = GameState::new();
        let result = state.apply_play(card(Rank::Two, Suit::Clubs));
        assert_eq!(result, Err(GameError::CardOutsidePlay));
    }
}
