use serde::{Deserialize, Serialize};

/// Icon shown next to a token.
///
/// A closed set: every variant has a glyph, and an unknown icon name in a
/// dataset fails to deserialize instead of rendering nothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenIcon {
    Eth,
    Usdc,
    Usdt,
    Btc,
    Dai,
    Bnb,
    #[default]
    Generic,
}

impl TokenIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            TokenIcon::Eth => "Ξ",
            TokenIcon::Usdc => "$",
            TokenIcon::Usdt => "₮",
            TokenIcon::Btc => "₿",
            TokenIcon::Dai => "◈",
            TokenIcon::Bnb => "◆",
            TokenIcon::Generic => "●",
        }
    }
}

/// A token offered by the swap screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    /// USD price; `None` when no quote is available.
    #[serde(default)]
    pub price: Option<f64>,
    /// Display balance, may contain `,` thousands separators.
    pub balance: String,
    #[serde(default)]
    pub icon: TokenIcon,
}

impl Token {
    /// Price usable as a rate operand: present, finite and non-zero.
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_defaults_to_generic() {
        let token: Token =
            serde_json::from_str(r#"{"symbol":"ABC","name":"Abc","balance":"1"}"#).unwrap();
        assert_eq!(token.icon, TokenIcon::Generic);
        assert_eq!(token.price, None);
    }

    #[test]
    fn test_usable_price_rejects_zero() {
        let token = Token {
            symbol: "Z".into(),
            name: "Zero".into(),
            price: Some(0.0),
            balance: "0".into(),
            icon: TokenIcon::Generic,
        };
        assert_eq!(token.usable_price(), None);
    }
}
