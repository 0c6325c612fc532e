use crate::model::bid::{Bid, Call, Level};
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::strain::Strain;
use crate::model::suit::Suit;

/// How many distinct action ids exist: 35 bids, 3 calls, 52 plays.
pub const NUM_ACTIONS: u8 = 90;

/// One step of a deal in its wire encoding: a bid, a call, or a card play.
///
/// The id space is laid out as
/// `0..35` bids (level-major, strain-minor), `35..38` calls
/// (pass, double, redouble), `38..90` plays (suit-major, rank-minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Bid(Bid),
    Call(Call),
    Play(Card),
}

impl Action {
    /// Decodes an action id. Total over `0..90`, `None` outside.
    pub fn from_id(id: u8) -> Option<Action> {
        if id < 35 {
            let level = Level::from_index(usize::from(id / 5))?;
            let strain = Strain::from_index(usize::from(id % 5))?;
            Some(Action::Bid(Bid::new(level, strain)))
        } else if id < 38 {
            Call::from_index(usize::from(id - 35)).map(Action::Call)
        } else if id < NUM_ACTIONS {
            let offset = id - 38;
            let suit = Suit::from_index(usize::from(offset / 13))?;
            let rank = Rank::from_index(usize::from(offset % 13))?;
            Some(Action::Play(Card::new(rank, suit)))
        } else {
            None
        }
    }

    /// The inverse of [`Action::from_id`].
    pub fn id(self) -> u8 {
        match self {
            Action::Bid(bid) => (bid.level.index() * 5 + bid.strain.index()) as u8,
            Action::Call(call) => 35 + call.index() as u8,
            Action::Play(card) => 38 + (card.suit.index() * 13 + card.rank.index()) as u8,
        }
    }
}
