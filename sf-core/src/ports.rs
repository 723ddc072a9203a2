mod application;
mod product;

pub use application::Application;
pub use product::ProductRepository;
