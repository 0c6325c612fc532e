mod bidding;
pub mod dealing;
pub mod executor;
pub mod legal;
mod play;
mod serialization;
pub mod state;
