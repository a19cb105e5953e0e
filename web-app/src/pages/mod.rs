//! Page modules

pub mod coming_soon;
pub mod markets;
pub mod swap;
pub mod wallet;

pub use coming_soon::ComingSoonPage;
pub use markets::MarketsPage;
pub use swap::SwapPage;
pub use wallet::WalletPage;
