use crate::inference::bounds::BoundsTable;
use crate::model::bid::{Contract, StandingBid};
use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::strain::Strain;
use crate::model::trick::CurrentTrick;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phase of a deal. Moves forward Bidding -> Play -> Scoring, or from any
/// phase to Error, which is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Bidding,
    Play,
    Scoring,
    Error,
}

/// Why an action was rejected. Every variant halts the deal for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("bid outside the auction")]
    BidOutsideAuction,
    #[error("call outside the auction")]
    CallOutsideAuction,
    #[error("card played outside the play stage")]
    CardOutsidePlay,
    #[error("Insufficient bid")]
    InsufficientBid,
    #[error("double before first bid")]
    DoubleBeforeBid,
    #[error("contract already doubled")]
    ContractAlreadyDoubled,
    #[error("double of own side's contract")]
    DoubleOwnSide,
    #[error("redouble before first bid")]
    RedoubleBeforeBid,
    #[error("redouble of undoubled contract")]
    RedoubleUndoubled,
    #[error("contract already redoubled")]
    ContractAlreadyRedoubled,
    #[error("redouble of other side's contract")]
    RedoubleOtherSide,
    #[error("Duplicate card")]
    DuplicateCard,
    #[error("Card already played")]
    CardAlreadyPlayed,
    #[error("14 cards in hand")]
    HandOverflow,
    #[error("Revoke")]
    Revoke,
    #[error("Revoke?")]
    InferredRevoke,
    #[error("deal into a deal already under way")]
    DealAfterStart,
    #[error("unknown action id {0}")]
    UnknownAction(u8),
}

/// Full status of one deal: what is known of the hands, the auction, and the
/// trick in progress. Every dimension is fixed (4 seats, 4 suits, 13 ranks,
/// 5 strains), so the whole aggregate is a few hundred bytes and cheap to
/// clone.
///
/// Hands are learned lazily: a card enters `dealt_cards` the first time its
/// owner plays it (or eagerly via [`crate::game::dealing::deal_into`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) dealt_cards: [[[bool; 13]; 4]; 4],
    pub(crate) played_cards: [[bool; 13]; 4],
    pub(crate) lengths: BoundsTable,
    pub(crate) first_to_mention: [[bool; 5]; 4],
    pub(crate) tricks_taken: [u8; 4],
    pub(crate) stage: Stage,
    pub(crate) next_to_act: Option<Seat>,
    pub(crate) pass_position: Option<u8>,
    pub(crate) standing_bid: Option<StandingBid>,
    pub(crate) declarer: Option<Seat>,
    pub(crate) trick: CurrentTrick,
}

impl GameState {
    /// The neutral opening configuration: South to act, auction open to any
    /// bid, nothing known about any hand.
    pub fn new() -> Self {
        Self {
            dealt_cards: [[[false; 13]; 4]; 4],
            played_cards: [[false; 13]; 4],
            lengths: BoundsTable::new(),
            first_to_mention: [[false; 5]; 4],
            tricks_taken: [0; 4],
            stage: Stage::Bidding,
            next_to_act: Some(Seat::South),
            pass_position: Some(0),
            standing_bid: None,
            declarer: None,
            trick: CurrentTrick::empty(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whose turn it is; `None` once the deal is over.
    pub fn next_to_act(&self) -> Option<Seat> {
        self.next_to_act
    }

    /// Consecutive passes since the last bid; `None` once play begins.
    pub fn pass_position(&self) -> Option<u8> {
        self.pass_position
    }

    pub fn standing_bid(&self) -> Option<StandingBid> {
        self.standing_bid
    }

    pub fn declarer(&self) -> Option<Seat> {
        self.declarer
    }

    pub fn trick(&self) -> &CurrentTrick {
        &self.trick
    }

    pub fn tricks_taken(&self, seat: Seat) -> u8 {
        self.tricks_taken[seat.index()]
    }

    pub fn tricks_taken_total(&self) -> u8 {
        self.tricks_taken.iter().sum()
    }

    pub fn lengths(&self) -> &BoundsTable {
        &self.lengths
    }

    pub fn first_to_mention(&self, seat: Seat, strain: Strain) -> bool {
        self.first_to_mention[seat.index()][strain.index()]
    }

    pub fn is_dealt(&self, seat: Seat, card: Card) -> bool {
        self.dealt_cards[seat.index()][card.suit.index()][card.rank.index()]
    }

    pub fn is_played(&self, card: Card) -> bool {
        self.played_cards[card.suit.index()][card.rank.index()]
    }

    /// How many cards are registered to the seat so far.
    pub fn hand_size(&self, seat: Seat) -> u8 {
        self.dealt_cards[seat.index()]
            .iter()
            .flatten()
            .filter(|&&held| held)
            .count() as u8
    }

    pub fn cards_registered(&self) -> u8 {
        Seat::LOOP.iter().map(|&seat| self.hand_size(seat)).sum()
    }

    /// The final contract, available once play has begun.
    pub fn contract(&self) -> Option<Contract> {
        let declarer = self.declarer?;
        let standing = self.standing_bid?;
        Some(Contract {
            declarer,
            level: standing.bid.level,
            strain: standing.bid.strain,
            doubling: standing.doubling,
        })
    }

    pub(crate) fn seat_on_turn(&self) -> Seat {
        self.next_to_act
            .expect("a seat is on turn while the deal is live")
    }

    pub(crate) fn mark_error(&mut self) {
        self.stage = Stage::Error;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, Stage};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    #[test]
    fn fresh_state_is_neutral() {
        let state = GameState::new();
        assert_eq!(state.stage(), Stage::Bidding);
        assert_eq!(state.next_to_act(), Some(Seat::South));
        assert_eq!(state.pass_position(), Some(0));
        assert!(state.standing_bid().is_none());
        assert!(state.declarer().is_none());
        assert!(state.contract().is_none());
        assert_eq!(state.cards_registered(), 0);
        for seat in Seat::LOOP {
            for suit in Suit::ALL {
                assert_eq!(state.lengths().get(seat, suit).min(), 0);
                assert_eq!(state.lengths().get(seat, suit).max(), 13);
            }
        }
    }

    #[test]
    fn hand_size_counts_registered_cards() {
        let mut state = GameState::new();
        state
            .register_card(Seat::West, Card::new(Rank::Two, Suit::Clubs))
            .unwrap();
        state
            .register_card(Seat::West, Card::new(Rank::Ace, Suit::Spades))
            .unwrap();
        assert_eq!(state.hand_size(Seat::West), 2);
        assert_eq!(state.hand_size(Seat::North), 0);
        assert_eq!(state.cards_registered(), 2);
    }
}
