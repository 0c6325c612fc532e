use super::state::{GameError, GameState, Stage};
use crate::model::bid::{Bid, Call, Doubling, StandingBid};
use crate::model::trick::CurrentTrick;

impl GameState {
    /// A bid must strictly outrank the standing bid under (level, strain)
    /// order. On success it becomes the standing bid, the bidder may become
    /// its partnership's first mention of the strain, and the pass count
    /// resets.
    pub fn apply_bid(&mut self, bid: Bid) -> Result<(), GameError> {
        if self.stage != Stage::Bidding {
            return Err(GameError::BidOutsideAuction);
        }
        let seat = self.seat_on_turn();
        if let Some(standing) = self.standing_bid {
            if bid <= standing.bid {
                return Err(GameError::InsufficientBid);
            }
        }
        self.standing_bid = Some(StandingBid {
            seat,
            bid,
            doubling: Doubling::Undoubled,
        });
        // First mention belongs to whichever partner named the strain earlier.
        if !self.first_to_mention[seat.partner().index()][bid.strain.index()] {
            self.first_to_mention[seat.index()][bid.strain.index()] = true;
        }
        self.pass_position = Some(0);
        self.next_to_act = Some(seat.next());
        Ok(())
    }

    pub fn apply_call(&mut self, call: Call) -> Result<(), GameError> {
        if self.stage != Stage::Bidding {
            return Err(GameError::CallOutsideAuction);
        }
        match call {
            Call::Pass => {
                self.apply_pass();
                Ok(())
            }
            Call::Double => self.apply_double(),
            Call::Redouble => self.apply_redouble(),
        }
    }

    fn apply_pass(&mut self) {
        let seat = self.seat_on_turn();
        match (self.pass_position, self.standing_bid) {
            // Fourth consecutive pass with no bid ever made: the deal is
            // passed out and goes straight to scoring.
            (Some(3), _) => {
                self.stage = Stage::Scoring;
                self.next_to_act = None;
                self.pass_position = Some(0);
            }
            // Third pass after a bid: the auction closes.
            (Some(2), Some(standing)) => {
                self.stage = Stage::Play;
                self.pass_position = None;
                self.trick = CurrentTrick::empty();
                let strain_ix = standing.bid.strain.index();
                let declarer = if self.first_to_mention[standing.seat.index()][strain_ix] {
                    standing.seat
                } else {
                    standing.seat.partner()
                };
                self.declarer = Some(declarer);
                self.next_to_act = Some(declarer.next());
            }
            _ => {
                self.pass_position = self.pass_position.map(|count| count + 1);
                self.next_to_act = Some(seat.next());
            }
        }
    }

    fn apply_double(&mut self) -> Result<(), GameError> {
        let seat = self.seat_on_turn();
        let Some(standing) = self.standing_bid.as_mut() else {
            return Err(GameError::DoubleBeforeBid);
        };
        if standing.doubling != Doubling::Undoubled {
            return Err(GameError::ContractAlreadyDoubled);
        }
        if standing.seat.same_side(seat) {
            return Err(GameError::DoubleOwnSide);
        }
        standing.doubling = Doubling::Doubled;
        self.pass_position = Some(0);
        self.next_to_act = Some(seat.next());
        Ok(())
    }

    fn apply_redouble(&mut self) -> Result<(), GameError> {
        let seat = self.seat_on_turn();
        let Some(standing) = self.standing_bid.as_mut() else {
            return Err(GameError::RedoubleBeforeBid);
        };
        match standing.doubling {
            Doubling::Undoubled => return Err(GameError::RedoubleUndoubled),
            Doubling::Redoubled => return Err(GameError::ContractAlreadyRedoubled),
            Doubling::Doubled => {}
        }
        if !standing.seat.same_side(seat) {
            return Err(GameError::RedoubleOtherSide);
        }
        standing.doubling = Doubling::Redoubled;
        self.pass_position = Some(0);
        self.next_to_act = Some(seat.next());
        Ok(())
    }
}
