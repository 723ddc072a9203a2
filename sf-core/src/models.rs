mod category;
pub use category::*;

mod listing;
pub use listing::*;

mod map;
pub use map::*;

mod page;
pub use page::*;

mod product;
pub use product::*;
