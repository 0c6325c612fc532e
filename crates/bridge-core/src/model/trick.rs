use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// The card currently winning a trick and who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningPlay {
    pub seat: Seat,
    pub card: Card,
}

/// The trick in progress: the led suit, how many cards have been played, and
/// the running winner under the trump rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTrick {
    position: u8,
    lead: Option<Suit>,
    winning: Option<WinningPlay>,
}

impl CurrentTrick {
    pub const fn empty() -> Self {
        Self {
            position: 0,
            lead: None,
            winning: None,
        }
    }

    /// Cards played to the trick so far.
    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead
    }

    pub fn winning(&self) -> Option<WinningPlay> {
        self.winning
    }

    pub fn is_complete(&self) -> bool {
        self.position == 4
    }

    /// Records a card: fixes the led suit on the opening card and keeps the
    /// running winner current.
    pub fn record(&mut self, seat: Seat, card: Card, trump: Option<Suit>) {
        if self.position == 0 {
            self.lead = Some(card.suit);
        }
        if self.position == 0 || self.beats_winner(card, trump) {
            self.winning = Some(WinningPlay { seat, card });
        }
        self.position += 1;
    }

    /// A trump beats any non-trump winner; within the winner's suit, higher
    /// rank wins; any other suit never wins.
    fn beats_winner(&self, card: Card, trump: Option<Suit>) -> bool {
        let Some(winning) = self.winning else {
            return true;
        };
        if trump == Some(card.suit) && trump != Some(winning.card.suit) {
            return true;
        }
        if card.suit != winning.card.suit {
            return false;
        }
        card.rank > winning.card.rank
    }
}
