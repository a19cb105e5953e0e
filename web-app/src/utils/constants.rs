//! Application constants

// Simulated latency of the mocked wallet (ms)
pub const CONNECT_DELAY_MS: u32 = 1_000;
pub const SWITCH_NETWORK_DELAY_MS: u32 = 800;
pub const SWAP_DELAY_MS: u32 = 1_500;

// Slippage presets, in percent
pub const SLIPPAGE_OPTIONS: &[f64] = &[0.1, 0.5, 1.0, 3.0];
pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 0.5;

// Background animation
pub const FRAME_INTERVAL_MS: u64 = 50;

pub const SHARE_TEXT: &str = "Tracking fixed and variable yield markets on XForce Yield";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slippage_is_a_preset() {
        assert!(SLIPPAGE_OPTIONS.contains(&DEFAULT_SLIPPAGE_PERCENT));
    }
}
