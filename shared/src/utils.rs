//! # Shared Utility Functions
//!
//! Address formatting used by the navbar, the wallet page and link-outs.
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x1f9c6a55b3d1a1e2c40c5f9d3b7e8a4c2d6be2a0";
//! assert_eq!(truncate_address(address), "0x1f9c...e2a0");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is too short to truncate meaningfully, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1f9c6a55b3d1a1e2c40c5f9d3b7e8a4c2d6be2a0";
/// assert_eq!(format_address(addr, 6, 4), "0x1f9c...e2a0");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii() || address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// `0x` plus four hex digits, an ellipsis and the last four digits.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Whether `address` looks like an EVM address (`0x` + 40 hex digits).
pub fn is_evm_address(address: &str) -> bool {
    address
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
