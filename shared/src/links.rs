//! # External Link-Outs
//!
//! URL templates for block explorers and social share intents. All user or
//! project supplied text is percent-encoded before being placed in a query.

use crate::dto::Network;

/// Explorer page for an address on `network`.
///
/// ```rust
/// use shared::{links::explorer_address_url, Network};
///
/// assert_eq!(
///     explorer_address_url(Network::Ethereum, "0xabc"),
///     "https://etherscan.io/address/0xabc"
/// );
/// ```
pub fn explorer_address_url(network: Network, address: &str) -> String {
    format!("{}/address/{}", network.explorer_url(), address)
}

/// Social networks with a share intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    Telegram,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::Twitter, ShareTarget::Facebook, ShareTarget::Telegram];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Telegram => "Telegram",
        }
    }
}

/// Share intent URL for `target`. Facebook ignores `text`.
pub fn share_url(target: ShareTarget, text: &str, url: &str) -> String {
    let text = urlencoding::encode(text);
    let url = urlencoding::encode(url);
    match target {
        ShareTarget::Twitter => {
            format!("https://twitter.com/intent/tweet?text={}&url={}", text, url)
        }
        ShareTarget::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        ShareTarget::Telegram => format!("https://t.me/share/url?url={}&text={}", url, text),
    }
}
