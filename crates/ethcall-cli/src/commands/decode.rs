//! Decode command

use clap::Args;
use ethcall_abi::{decode, parse_type_list, AbiType, AbiValue, Function};
use ethcall_primitives::hex;
use serde_json::{json, Value};

use crate::{config::Config, output::Output, CliError};

/// Decode static return values
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Comma-separated return types, e.g. "uint256,bool"
    #[arg(long, conflicts_with = "function", required_unless_present = "function")]
    pub types: Option<String>,

    /// Known function name from the config, or a full signature with a returns clause
    #[arg(long)]
    pub function: Option<String>,

    /// 0x-prefixed return data
    pub data: String,
}

impl DecodeCommand {
    pub fn execute(self, config: &Config, json: bool) -> Result<(), CliError> {
        let slots = self.slots(config)?;
        let data = hex::decode_prefixed(&self.data)?;
        let values = decode(&data, &slots)?;

        let entries: Vec<Value> = values
            .iter()
            .map(|value| json!({ "type": value.type_name(), "value": value.to_string() }))
            .collect();
        let lines: Vec<String> = values.iter().map(AbiValue::to_string).collect();

        Output::new(json)
            .field_value("values", Value::Array(entries))
            .message(&lines.join("\n"))
            .print();

        Ok(())
    }

    fn slots(&self, config: &Config) -> Result<Vec<AbiType>, CliError> {
        match (&self.types, &self.function) {
            (Some(types), _) => Ok(parse_type_list(types)?),
            (None, Some(function)) if function.contains('(') => {
                Ok(Function::parse(function)?.outputs().to_vec())
            }
            (None, Some(name)) => Ok(config.function(name)?.outputs().to_vec()),
            (None, None) => Err(CliError::InvalidInput(
                "either --types or --function is required".to_string(),
            )),
        }
    }
}
