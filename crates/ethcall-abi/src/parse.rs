//! Parsing typed values from their textual form
//!
//! Accepted forms:
//! - `bool`: `true`, `false`, `1`, `0`
//! - `uintN`: decimal, or `0x`-prefixed hex
//! - `address`, `bytesN`, `bytes`: `0x`-prefixed hex
//! - `string`: taken verbatim
//! - `T[]`: `[a,b,c]`, elements in the form of `T`
//!
//! Array elements may be wrapped in double quotes, which lets a `string[]`
//! element hold `,`, `[` or `]`: `["a,b", "c]"]`. One pair of surrounding
//! quotes is stripped from each element. There is no escape sequence, so a
//! quoted element cannot itself contain `"`.

use ethcall_primitives::{hex, Address, AddressError, U256};

use crate::{AbiError, AbiType, AbiValue};

/// Parse `input` as a value of type `ty`
pub fn parse_value(ty: &AbiType, input: &str) -> Result<AbiValue, AbiError> {
    match ty {
        AbiType::Bool => match input.trim() {
            "true" | "1" => Ok(AbiValue::bool(true)),
            "false" | "0" => Ok(AbiValue::bool(false)),
            other => Err(AbiError::InvalidValue(format!("{:?} is not a bool", other))),
        },
        AbiType::Uint(bits) => parse_uint(*bits, input.trim()),
        AbiType::Address => Address::from_hex(input)
            .map(AbiValue::address)
            .map_err(|e| match e {
                AddressError::InvalidLength(got) => AbiError::InvalidLength {
                    expected: Address::LEN,
                    got,
                },
                AddressError::InvalidHex(msg) => AbiError::InvalidValue(msg),
            }),
        AbiType::FixedBytes(size) => AbiValue::fixed_bytes(*size, &decode_hex(input)?),
        AbiType::Bytes => Ok(AbiValue::bytes(decode_hex(input)?)),
        AbiType::String => Ok(AbiValue::string(input)),
        AbiType::Array(element) => {
            let inner = input
                .trim()
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .ok_or_else(|| {
                    AbiError::InvalidValue(format!("{:?} is not a {} literal", input, ty))
                })?;
            let items = split_elements(inner)?
                .into_iter()
                .map(|item| parse_value(element, unquote(item)))
                .collect::<Result<Vec<_>, _>>()?;
            AbiValue::array((**element).clone(), items)
        }
    }
}

/// Parse one value per type, pairing them in order
pub fn parse_values(types: &[AbiType], inputs: &[impl AsRef<str>]) -> Result<Vec<AbiValue>, AbiError> {
    if types.len() != inputs.len() {
        return Err(AbiError::ArgumentMismatch(format!(
            "expected {} values, got {}",
            types.len(),
            inputs.len()
        )));
    }
    types
        .iter()
        .zip(inputs)
        .map(|(ty, input)| parse_value(ty, input.as_ref()))
        .collect()
}

fn parse_uint(bits: usize, input: &str) -> Result<AbiValue, AbiError> {
    let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) else {
        return AbiValue::uint_from_dec_str(bits, input);
    };

    if digits.is_empty() {
        return Err(AbiError::InvalidValue(format!("{:?} has no hex digits", input)));
    }
    let bytes = decode_hex(&pad_odd(digits))?;
    let significant = bytes
        .iter()
        .position(|b| *b != 0)
        .map_or(&bytes[..0], |start| &bytes[start..]);
    if significant.len() > 32 {
        return Err(AbiError::InvalidValue(format!("{} exceeds 256 bits", input)));
    }
    AbiValue::uint(bits, U256::from_big_endian(significant))
}

fn pad_odd(digits: &str) -> String {
    if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>, AbiError> {
    hex::decode_prefixed(input).map_err(|e| AbiError::InvalidValue(e.to_string()))
}

fn unquote(item: &str) -> &str {
    item.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(item)
}

/// Split on top-level commas, leaving nested `[...]` and `"..."` intact
fn split_elements(inner: &str) -> Result<Vec<&str>, AbiError> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '"' => quoted = !quoted,
            _ if quoted => {}
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    AbiError::InvalidValue(format!("unbalanced brackets in {:?}", inner))
                })?
            }
            ',' if depth == 0 => {
                items.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if quoted {
        return Err(AbiError::InvalidValue(format!("unterminated quote in {:?}", inner)));
    }
    if depth != 0 {
        return Err(AbiError::InvalidValue(format!(
            "unbalanced brackets in {:?}",
            inner
        )));
    }
    items.push(inner[start..].trim());
    Ok(items)
}
