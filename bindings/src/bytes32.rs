use alloy_primitives::B256;
use thiserror::Error;

/// Errors converting between Rust strings and NUL-terminated `bytes32` values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Bytes32StringError {
    #[error("string of {0} bytes does not fit in bytes32 (max 31)")]
    TooLong(usize),
    #[error("bytes32 string is not null-terminated")]
    MissingNullTerminator,
    #[error("bytes32 string is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Encodes `text` as a zero-padded `bytes32`. The last byte is always left as the
/// terminator, so at most 31 bytes of UTF-8 fit.
pub fn format_bytes32_string(text: &str) -> Result<B256, Bytes32StringError> {
    let bytes = text.as_bytes();
    if bytes.len() > 31 {
        return Err(Bytes32StringError::TooLong(bytes.len()));
    }
    let mut word = B256::ZERO;
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(word)
}

/// Decodes a `bytes32` produced by [`format_bytes32_string`] (or by a Solidity
/// string literal), stopping at the first zero byte.
pub fn parse_bytes32_string(word: B256) -> Result<String, Bytes32StringError> {
    if word[31] != 0 {
        return Err(Bytes32StringError::MissingNullTerminator);
    }
    let end = word.iter().position(|byte| *byte == 0).unwrap_or(31);
    Ok(std::str::from_utf8(&word[..end])?.to_owned())
}

pub fn convert_string_array_to_bytes32(names: &[&str]) -> Result<Vec<B256>, Bytes32StringError> {
    names.iter().map(|name| format_bytes32_string(name)).collect()
}
