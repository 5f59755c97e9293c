pub mod flavor;
pub mod progression;
pub mod session;
pub mod shop;

/// Domain failures for game commands. Commands translate these into short
/// embed replies; none of them ever escape as a process fault.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("That item doesn't exist in the shop!")]
    UnknownItem,
    #[error("You need {price} Crab Coins to buy that! You have {balance}.")]
    InsufficientFunds { price: u64, balance: u64 },
}
