mod combination;
mod instance;
mod solution;

#[doc(inline)]
pub use combination::Combination;
#[doc(inline)]
pub use instance::BinFitInstance;
#[doc(inline)]
pub use solution::Solution;
