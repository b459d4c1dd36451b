//! Payload text encoding for the command line
//!
//! Payloads travel as hex. Whitespace, `:` separators and a leading `0x`
//! are ignored on input; `-` reads raw bytes from stdin instead.

use anyhow::{bail, Context};
use std::io::Read;

pub const STDIN_MARKER: &str = "-";

pub fn read_payload(input: &str) -> anyhow::Result<Vec<u8>> {
    if input == STDIN_MARKER {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read payload from stdin")?;
        return Ok(bytes);
    }

    decode_hex(input)
}

pub fn decode_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.is_empty() {
        bail!("Payload is empty");
    }

    hex::decode(&digits).context("Payload is not valid hex")
}

pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
