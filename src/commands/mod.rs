pub mod check;
pub mod resolve;
pub mod template;

pub use check::check;
pub use resolve::resolve;
