use crate::model::seat::Seat;
use crate::model::strain::Strain;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
}

impl Level {
    pub const ORDERED: [Level; 7] = [
        Level::One,
        Level::Two,
        Level::Three,
        Level::Four,
        Level::Five,
        Level::Six,
        Level::Seven,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Level::One),
            1 => Some(Level::Two),
            2 => Some(Level::Three),
            3 => Some(Level::Four),
            4 => Some(Level::Five),
            5 => Some(Level::Six),
            6 => Some(Level::Seven),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Level::One => "1",
            Level::Two => "2",
            Level::Three => "3",
            Level::Four => "4",
            Level::Five => "5",
            Level::Six => "6",
            Level::Seven => "7",
        };
        f.write_str(text)
    }
}

/// A bid names a level and a strain. Sufficiency compares (level, strain)
/// lexicographically: a higher level outranks any strain, and at equal level a
/// strictly higher strain is required. The derived `Ord` encodes exactly that
/// because `level` is declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub level: Level,
    pub strain: Strain,
}

impl Bid {
    pub const fn new(level: Level, strain: Strain) -> Self {
        Self { level, strain }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Doubling {
    Undoubled,
    Doubled,
    Redoubled,
}

/// A non-bid action in the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Pass,
    Double,
    Redouble,
}

impl Call {
    pub const ALL: [Call; 3] = [Call::Pass, Call::Double, Call::Redouble];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Call::Pass),
            1 => Some(Call::Double),
            2 => Some(Call::Redouble),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The bid currently holding the auction, together with who made it and its
/// doubling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingBid {
    pub seat: Seat,
    pub bid: Bid,
    pub doubling: Doubling,
}

/// The final accepted bid once the auction closes: what is played, in what
/// strain, by whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    pub declarer: Seat,
    pub level: Level,
    pub strain: Strain,
    pub doubling: Doubling,
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)?;
        match self.doubling {
            Doubling::Undoubled => {}
            Doubling::Doubled => f.write_str("X")?,
            Doubling::Redoubled => f.write_str("XX")?,
        }
        write!(f, " by {}", self.declarer)
    }
}
