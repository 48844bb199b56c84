//! Selector command

use clap::Args;
use ethcall_abi::Function;
use ethcall_primitives::hex;

use crate::{output::Output, CliError};

/// Compute a function selector
#[derive(Debug, Args)]
pub struct SelectorCommand {
    /// Function signature, e.g. "transfer(address,uint256)"
    pub signature: String,
}

impl SelectorCommand {
    pub fn execute(self, json: bool) -> Result<(), CliError> {
        let function = Function::parse(&self.signature)?;
        let selector = hex::encode_prefixed(function.selector());

        Output::new(json)
            .field("signature", &function.signature())
            .field("selector", &selector)
            .message(&selector)
            .print();

        Ok(())
    }
}
