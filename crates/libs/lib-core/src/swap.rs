//! # Token Swap Calculator
//!
//! Two linked amount fields kept in sync through a live exchange rate.
//!
//! ## Rate
//!
//! ```text
//! exchange_rate = from.price / to.price      (default orientation)
//! exchange_rate = to.price / from.price      (after toggle_rate_direction)
//! ```
//!
//! A missing or zero price on either side makes the rate `0`, and edits that
//! cannot be converted clear the dependent field instead of failing.
//!
//! ## Numeric semantics
//!
//! Amounts are `f64` and are written back with six decimal places. Token
//! decimals and rounding direction are not modelled.
//!
//! ```rust
//! use lib_core::swap::SwapCalculator;
//!
//! let tokens = lib_core::data::swap_tokens()?;
//! let mut swap = SwapCalculator::with_defaults(tokens)?;
//! swap.handle_from_amount_change("1.5");
//! assert!(!swap.to_amount().is_empty());
//! assert_eq!(swap.min_received(0.0), swap.to_amount());
//! # Ok::<(), lib_core::CoreError>(())
//! ```

use lib_utils::{format_fixed, sanitize_decimal, strip_thousands};
use shared::Token;

use crate::error::{CoreError, Result};

/// Decimal places written into amount fields.
pub const AMOUNT_DECIMALS: usize = 6;

/// `amount × from.price / to.price`, or `0` when either price is unusable.
pub fn calculate_swap(from: &Token, to: &Token, amount: f64) -> f64 {
    match (from.usable_price(), to.usable_price()) {
        (Some(from_price), Some(to_price)) => amount * (from_price / to_price),
        _ => 0.0,
    }
}

/// State of the swap form.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapCalculator {
    from_token: Token,
    to_token: Token,
    from_amount: String,
    to_amount: String,
    is_rate_reversed: bool,
}

impl SwapCalculator {
    pub fn new(from_token: Token, to_token: Token) -> Self {
        Self {
            from_token,
            to_token,
            from_amount: String::new(),
            to_amount: String::new(),
            is_rate_reversed: false,
        }
    }

    /// Start a session with the first two distinct tokens of `tokens`.
    pub fn with_defaults(tokens: &[Token]) -> Result<Self> {
        let from = tokens
            .first()
            .ok_or_else(|| CoreError::InvalidInput("no tokens available to swap".to_string()))?;
        let to = tokens
            .iter()
            .find(|t| t.symbol != from.symbol)
            .ok_or_else(|| CoreError::InvalidInput("swap needs two distinct tokens".to_string()))?;
        Ok(Self::new(from.clone(), to.clone()))
    }

    pub fn from_token(&self) -> &Token {
        &self.from_token
    }

    pub fn to_token(&self) -> &Token {
        &self.to_token
    }

    pub fn from_amount(&self) -> &str {
        &self.from_amount
    }

    pub fn to_amount(&self) -> &str {
        &self.to_amount
    }

    pub fn is_rate_reversed(&self) -> bool {
        self.is_rate_reversed
    }

    /// Current rate in the selected orientation; `0` when a price is missing.
    pub fn exchange_rate(&self) -> f64 {
        let (numerator, denominator) = if self.is_rate_reversed {
            (&self.to_token, &self.from_token)
        } else {
            (&self.from_token, &self.to_token)
        };
        match (numerator.usable_price(), denominator.usable_price()) {
            (Some(n), Some(d)) => n / d,
            _ => 0.0,
        }
    }

    /// Replace the source token. Amounts are left as they are; see
    /// [`recalculate`](Self::recalculate).
    pub fn set_from_token(&mut self, token: Token) {
        self.from_token = token;
    }

    /// Replace the destination token. Amounts are left as they are.
    pub fn set_to_token(&mut self, token: Token) {
        self.to_token = token;
    }

    /// Store the sanitized source amount and derive the destination amount.
    pub fn handle_from_amount_change(&mut self, value: &str) {
        self.from_amount = sanitize_decimal(value);
        let rate = self.exchange_rate();
        self.to_amount = match parse_amount(&self.from_amount) {
            Some(amount) if rate != 0.0 => format_fixed(amount * rate, AMOUNT_DECIMALS),
            _ => String::new(),
        };
    }

    /// Store the sanitized destination amount and derive the source amount.
    pub fn handle_to_amount_change(&mut self, value: &str) {
        self.to_amount = sanitize_decimal(value);
        let rate = self.exchange_rate();
        self.from_amount = match parse_amount(&self.to_amount) {
            Some(amount) if rate != 0.0 => format_fixed(amount / rate, AMOUNT_DECIMALS),
            _ => String::new(),
        };
    }

    /// Fill the source field with the full balance of the source token.
    pub fn handle_max_click(&mut self) {
        let balance = strip_thousands(&self.from_token.balance);
        self.handle_from_amount_change(&balance);
    }

    /// Swap both the token selections and the amounts, without re-deriving.
    pub fn handle_swap_tokens(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    /// Flip the rate orientation. Amounts are untouched.
    pub fn toggle_rate_direction(&mut self) {
        self.is_rate_reversed = !self.is_rate_reversed;
    }

    /// Re-derive the destination amount from the current source amount,
    /// e.g. after a token selection changed.
    pub fn recalculate(&mut self) {
        let from_amount = self.from_amount.clone();
        self.handle_from_amount_change(&from_amount);
    }

    /// `to_amount × (1 − slippage/100)` with six decimals, `"0"` when the
    /// destination field is empty or not a number.
    pub fn min_received(&self, slippage_percent: f64) -> String {
        match parse_amount(&self.to_amount) {
            Some(amount) => format_fixed(amount * (1.0 - slippage_percent / 100.0), AMOUNT_DECIMALS),
            None => "0".to_string(),
        }
    }

    /// `1 ETH = 2000.000000 USDC`, following the current orientation.
    pub fn rate_label(&self) -> String {
        let rate = self.exchange_rate();
        if rate == 0.0 {
            return "Rate unavailable".to_string();
        }
        let (base, quote) = if self.is_rate_reversed {
            (&self.to_token.symbol, &self.from_token.symbol)
        } else {
            (&self.from_token.symbol, &self.to_token.symbol)
        };
        format!("1 {} = {} {}", base, format_fixed(rate, AMOUNT_DECIMALS), quote)
    }
}

fn parse_amount(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TokenIcon;

    fn token(symbol: &str, price: Option<f64>, balance: &str) -> Token {
        Token {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            price,
            balance: balance.to_string(),
            icon: TokenIcon::Generic,
        }
    }

    fn eth_usdc() -> SwapCalculator {
        SwapCalculator::new(
            token("ETH", Some(2000.0), "1,250.5"),
            token("USDC", Some(1.0), "500"),
        )
    }

    #[test]
    fn test_from_amount_derives_to_amount() {
        let mut swap = eth_usdc();
        swap.handle_from_amount_change("1.5");
        assert_eq!(swap.from_amount(), "1.5");
        assert_eq!(swap.to_amount(), "3000.000000");
    }

    #[test]
    fn test_tie_rounds_half_up() {
        let mut swap = SwapCalculator::new(token("DAI", Some(1.0), "10"), token("WBTC", Some(128.0), "1"));
        swap.handle_from_amount_change("1");
        assert_eq!(swap.to_amount(), "0.007813");
    }

    #[test]
    fn test_to_amount_derives_from_amount() {
        let mut swap = eth_usdc();
        swap.handle_to_amount_change("1000");
        assert_eq!(swap.from_amount(), "0.500000");
    }

    #[test]
    fn test_amount_invariant_within_rounding() {
        let mut swap = SwapCalculator::new(
            token("A", Some(3.7), "0"),
            token("B", Some(1.3), "0"),
        );
        for input in ["0.1", "7", "123.456", "0.000003"] {
            swap.handle_from_amount_change(input);
            let expected = input.parse::<f64>().unwrap() * swap.exchange_rate();
            let actual: f64 = swap.to_amount().parse().unwrap();
            assert!((actual - expected).abs() <= 1e-6, "{input}: {actual} vs {expected}");
        }
    }

    #[test]
    fn test_input_is_sanitized() {
        let mut swap = eth_usdc();
        swap.handle_from_amount_change("1a.2.3");
        assert_eq!(swap.from_amount(), "1.23");
        assert_eq!(swap.to_amount(), "2460.000000");
    }

    #[test]
    fn test_non_numeric_input_clears_dependent_field() {
        let mut swap = eth_usdc();
        swap.handle_from_amount_change("2");
        swap.handle_from_amount_change(".");
        assert_eq!(swap.from_amount(), ".");
        assert_eq!(swap.to_amount(), "");
        swap.handle_to_amount_change("");
        assert_eq!(swap.from_amount(), "");
    }

    #[test]
    fn test_missing_price_gives_zero_rate_and_blank_fields() {
        let mut swap = SwapCalculator::new(token("ETH", Some(2000.0), "1"), token("NEW", None, "0"));
        assert_eq!(swap.exchange_rate(), 0.0);
        swap.handle_from_amount_change("1");
        assert_eq!(swap.to_amount(), "");
        swap.handle_to_amount_change("5");
        assert_eq!(swap.from_amount(), "");
        assert_eq!(swap.rate_label(), "Rate unavailable");
    }

    #[test]
    fn test_max_click_strips_commas() {
        let mut swap = eth_usdc();
        swap.handle_max_click();
        assert_eq!(swap.from_amount(), "1250.5");
        assert_eq!(swap.to_amount(), "2501000.000000");
    }

    #[test]
    fn test_swap_tokens_is_an_involution() {
        let mut swap = eth_usdc();
        swap.handle_from_amount_change("2");
        let before = swap.clone();

        swap.handle_swap_tokens();
        assert_eq!(swap.from_token().symbol, "USDC");
        assert_eq!(swap.from_amount(), "4000.000000");
        assert_eq!(swap.to_amount(), "2");

        swap.handle_swap_tokens();
        assert_eq!(swap, before);
    }

    #[test]
    fn test_toggle_rate_direction_leaves_amounts() {
        let mut swap = eth_usdc();
        swap.handle_from_amount_change("1");
        swap.toggle_rate_direction();
        assert_eq!(swap.exchange_rate(), 1.0 / 2000.0);
        assert_eq!(swap.to_amount(), "2000.000000");
        assert_eq!(swap.rate_label(), "1 USDC = 0.000500 ETH");
    }

    #[test]
    fn test_min_received() {
        let mut swap = eth_usdc();
        assert_eq!(swap.min_received(0.5), "0");
        swap.handle_to_amount_change("100");
        assert_eq!(swap.min_received(0.5), "99.500000");
        assert_eq!(swap.min_received(0.0), "100.000000");
    }

    #[test]
    fn test_set_token_does_not_recompute_until_asked() {
        let mut swap = eth_usdc();
        swap.handle_from_amount_change("1");
        swap.set_to_token(token("DAI", Some(0.5), "0"));
        assert_eq!(swap.to_amount(), "2000.000000");
        swap.recalculate();
        assert_eq!(swap.to_amount(), "4000.000000");
    }

    #[test]
    fn test_calculate_swap() {
        let eth = token("ETH", Some(2000.0), "0");
        let usdc = token("USDC", Some(1.0), "0");
        let unpriced = token("X", None, "0");
        assert_eq!(calculate_swap(&eth, &usdc, 2.0), 4000.0);
        assert_eq!(calculate_swap(&eth, &unpriced, 2.0), 0.0);
    }

    #[test]
    fn test_with_defaults_picks_distinct_tokens() {
        let tokens = vec![
            token("ETH", Some(1.0), "0"),
            token("ETH", Some(1.0), "0"),
            token("USDC", Some(1.0), "0"),
        ];
        let swap = SwapCalculator::with_defaults(&tokens).unwrap();
        assert_eq!(swap.to_token().symbol, "USDC");
        assert!(SwapCalculator::with_defaults(&tokens[..2]).is_err());
        assert!(SwapCalculator::with_defaults(&[]).is_err());
    }
}
