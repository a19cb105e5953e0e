//! UI Components

pub mod favorite_star;
pub mod navbar;
pub mod starfield;
pub mod token_select;

pub use favorite_star::FavoriteStar;
pub use navbar::Navbar;
pub use starfield::Starfield;
pub use token_select::{TokenBadge, TokenSelect};
