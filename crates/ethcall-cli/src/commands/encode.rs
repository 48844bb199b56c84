//! Encode command

use clap::Args;
use ethcall_abi::{parse_values, Function};
use ethcall_primitives::hex;

use crate::{output::Output, CliError};

/// Encode a function call
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Function signature, e.g. "baz(uint32,bool)"
    pub signature: String,

    /// Argument values, one per declared input
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl EncodeCommand {
    pub fn execute(self, json: bool) -> Result<(), CliError> {
        let function = Function::parse(&self.signature)?;
        let args = parse_values(function.inputs(), &self.values)?;
        let data = hex::encode_prefixed(function.encode_input(&args)?);

        Output::new(json)
            .field("signature", &function.signature())
            .field("selector", &hex::encode_prefixed(function.selector()))
            .field("data", &data)
            .message(&data)
            .print();

        Ok(())
    }
}
