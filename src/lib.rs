pub mod card;
pub mod classifier;
pub mod error;
pub mod hand;
pub mod notation;

pub use card::{Card, CardFace, CardSuit};
pub use classifier::{classify, Category, HAND_SIZE};
pub use error::ParseError;
pub use hand::Hand;
