use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CryptoError;

/// String encodings accepted for binary inputs.
/// This is a property of the caller's transport, not of the key format:
/// the same raw Ed25519 key may arrive hex- or base64-encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEncoding {
    /// Lowercase or uppercase hex, with one optional `0x`/`0X` prefix.
    Hex,
    /// Standard-alphabet base64 with padding. The canonical encoding.
    Base64,
}

/// Decodes a string under an explicitly declared encoding.
///
/// # Errors
/// Returns `CryptoError::Hex` or `CryptoError::Base64` when the input does
/// not decode under the declared encoding.
pub fn decode_bytes(encoded: &str, encoding: InputEncoding) -> Result<Vec<u8>, CryptoError> {
    match encoding {
        InputEncoding::Hex => Ok(hex::decode(strip_hex_prefix(encoded))?),
        InputEncoding::Base64 => Ok(STANDARD.decode(encoded)?),
    }
}

/// Decodes key material without a declared encoding.
/// A `0x`-prefixed string is committed to hex; anything else is tried as hex
/// first and base64 second. A wrong-guess decode produces bytes of the wrong
/// length or structure, which the per-algorithm loaders reject.
///
/// # Errors
/// Returns `CryptoError::Hex` for an undecodable `0x`-prefixed string and
/// `CryptoError::Base64` when neither encoding decodes the input.
pub fn decode_key_material(encoded: &str) -> Result<Vec<u8>, CryptoError> {
    if encoded.starts_with("0x") || encoded.starts_with("0X") {
        return Ok(hex::decode(strip_hex_prefix(encoded))?);
    }
    hex::decode(encoded)
        .or_else(|_| STANDARD.decode(encoded))
        .map_err(CryptoError::Base64)
}

fn strip_hex_prefix(encoded: &str) -> &str {
    encoded
        .strip_prefix("0x")
        .or_else(|| encoded.strip_prefix("0X"))
        .unwrap_or(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex_with_prefix() {
        assert_eq!(
            decode_bytes("0xdeadbeef", InputEncoding::Hex).unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
        assert_eq!(
            decode_bytes("0XDEADBEEF", InputEncoding::Hex).unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
    }

    #[test]
    fn test_decode_hex_without_prefix() {
        assert_eq!(
            decode_bytes("deadbeef", InputEncoding::Hex).unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
    }

    #[test]
    fn test_decode_base64() {
        assert_eq!(
            decode_bytes("SGVsbG8=", InputEncoding::Base64).unwrap(),
            b"Hello".to_vec()
        );
    }

    #[test]
    fn test_decode_errors_carry_the_declared_encoding() {
        assert!(matches!(
            decode_bytes("not hex", InputEncoding::Hex).unwrap_err(),
            CryptoError::Hex(_)
        ));
        assert!(matches!(
            decode_bytes("not base64!!!", InputEncoding::Base64).unwrap_err(),
            CryptoError::Base64(_)
        ));
    }

    #[test]
    fn test_key_material_prefers_hex() {
        // "deadbeef" is also valid base64; the hex reading wins
        assert_eq!(
            decode_key_material("deadbeef").unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
    }

    #[test]
    fn test_key_material_falls_back_to_base64() {
        assert_eq!(decode_key_material("SGVsbG8=").unwrap(), b"Hello".to_vec());
    }

    #[test]
    fn test_prefixed_key_material_is_hex_only() {
        assert_eq!(
            decode_key_material("0xdeadbeef").unwrap(),
            vec![0xde, 0xad, 0xbe, 0xef]
        );
        // no base64 fallback once the prefix commits the input to hex
        assert!(matches!(
            decode_key_material("0xSGVsbG8=").unwrap_err(),
            CryptoError::Hex(_)
        ));
    }

    #[test]
    fn test_key_material_rejects_garbage() {
        assert!(matches!(
            decode_key_material("*** definitely not encoded ***").unwrap_err(),
            CryptoError::Base64(_)
        ));
    }
}
