/// Category round-robin, the featured arrangement
mod mix;
pub use mix::CategoryMix;

/// Plain sort orders
mod sorted;
pub use sorted::Sorted;
