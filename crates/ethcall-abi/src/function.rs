//! Function descriptors for a known contract interface

use std::fmt;
use std::str::FromStr;

use ethcall_primitives::hex;

use crate::codec::{CallCodec, Selector};
use crate::types::parse_type_list;
use crate::{AbiError, AbiType, AbiValue};

/// A contract function: name, input types and expected return types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    inputs: Vec<AbiType>,
    outputs: Vec<AbiType>,
    selector: Selector,
}

impl Function {
    /// Create a new function definition
    pub fn new(name: impl Into<String>, inputs: Vec<AbiType>, outputs: Vec<AbiType>) -> Self {
        let name = name.into();
        let selector = CallCodec::new().selector(&canonical(&name, &inputs));
        Self {
            name,
            inputs,
            outputs,
            selector,
        }
    }

    /// Parse `name(in1,in2)` with an optional `returns (out1,out2)` clause
    pub fn parse(signature: &str) -> Result<Self, AbiError> {
        let invalid = || AbiError::InvalidSignature(signature.to_string());
        let s = signature.trim();

        let open = s.find('(').ok_or_else(invalid)?;
        let name = s[..open].trim();
        if !is_identifier(name) {
            return Err(invalid());
        }

        let close = open + s[open..].find(')').ok_or_else(invalid)?;
        let inputs = parse_type_list(&s[open + 1..close])?;

        let rest = s[close + 1..].trim();
        let outputs = if rest.is_empty() {
            Vec::new()
        } else {
            let list = rest
                .strip_prefix("returns")
                .unwrap_or(rest)
                .trim()
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .ok_or_else(invalid)?;
            parse_type_list(list)?
        };

        Ok(Self::new(name, inputs, outputs))
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input types
    pub fn inputs(&self) -> &[AbiType] {
        &self.inputs
    }

    /// Return types
    pub fn outputs(&self) -> &[AbiType] {
        &self.outputs
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        canonical(&self.name, &self.inputs)
    }

    /// Function selector
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Encode a call after checking `args` against the declared inputs
    pub fn encode_input(&self, args: &[AbiValue]) -> Result<Vec<u8>, AbiError> {
        if args.len() != self.inputs.len() {
            return Err(AbiError::ArgumentMismatch(format!(
                "{} expects {} arguments, got {}",
                self.signature(),
                self.inputs.len(),
                args.len()
            )));
        }
        for (index, (arg, expected)) in args.iter().zip(&self.inputs).enumerate() {
            let actual = arg.abi_type();
            if actual != *expected {
                return Err(AbiError::ArgumentMismatch(format!(
                    "argument {} of {} is {}, expected {}",
                    index,
                    self.signature(),
                    actual,
                    expected
                )));
            }
        }
        Ok(CallCodec::new().encode(&self.name, args))
    }

    /// Decode return data against the declared outputs
    pub fn decode_output(&self, data: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
        CallCodec::new().decode(data, &self.outputs)
    }

    /// Decode calldata addressed to this function back into its arguments
    pub fn decode_input(&self, calldata: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
        let found = calldata.get(..4).ok_or(AbiError::TruncatedInput {
            offset: 0,
            needed: 4,
            remaining: calldata.len(),
        })?;
        if found != self.selector {
            return Err(AbiError::SelectorMismatch {
                expected: hex::encode_prefixed(self.selector),
                got: hex::encode_prefixed(found),
            });
        }
        CallCodec::new().decode(&calldata[4..], &self.inputs)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())?;
        if !self.outputs.is_empty() {
            let outputs: Vec<String> = self.outputs.iter().map(AbiType::to_string).collect();
            write!(f, " returns ({})", outputs.join(","))?;
        }
        Ok(())
    }
}

impl FromStr for Function {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn canonical(name: &str, inputs: &[AbiType]) -> String {
    let types: Vec<String> = inputs.iter().map(AbiType::to_string).collect();
    format!("{}({})", name, types.join(","))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
