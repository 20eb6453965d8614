use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::SubaccountId;
use crate::error::{Result, ValidationError};
use crate::gate::MessageGate;
use crate::msgs::Msg;
use crate::params::ProtocolParams;
use crate::validation::{parse_address, subaccount_owner};

#[derive(Parser)]
#[command(name = "dexgate")]
#[command(version = "0.1.0")]
#[command(about = "Stateless admission checks for exchange transaction messages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (default.toml, <DEXGATE_ENV>.toml)
    #[arg(short, long, global = true, default_value = "config")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a message or a transaction (JSON array of messages)
    Validate {
        /// JSON file to read, or "-" for stdin
        input: String,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the subaccount id of an address
    Subaccount {
        /// Bech32 account address
        address: String,
        /// Subaccount index (0 is the default subaccount)
        #[arg(short, long, default_value = "0")]
        index: u32,
    },
    /// Print the owner of a subaccount id
    Owner {
        /// 0x-prefixed subaccount id
        subaccount_id: String,
    },
}

/// Outcome of a `validate` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admitted { count: usize },
    Rejected { index: usize, count: usize, error: ValidationError },
}

impl Verdict {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admitted { .. })
    }

    pub fn to_json(&self) -> Value {
        match self {
            Verdict::Admitted { count } => json!({
                "admitted": true,
                "messages": count,
            }),
            Verdict::Rejected { index, count, error } => json!({
                "admitted": false,
                "messages": count,
                "index": index,
                "codespace": error.codespace(),
                "code": error.code(),
                "detail": error.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Admitted { .. } => write!(f, "admitted"),
            Verdict::Rejected { index, count, error } => {
                write!(f, "rejected [{}:{}] {}", error.codespace(), error.code(), error)?;
                if *count > 1 {
                    write!(f, " (message {})", index)?;
                }
                Ok(())
            }
        }
    }
}

/// Decode one message, or a JSON array of them, into a transaction.
pub fn parse_messages(text: &str) -> Result<Vec<Msg>> {
    let value: Value = serde_json::from_str(text)?;
    let msgs = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(msgs)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(Path::new(input))?)
}

/// Run the gate over the transaction read from `input`.
pub fn validate_input(gate: &MessageGate, input: &str) -> Result<Verdict> {
    let msgs = parse_messages(&read_input(input)?)?;
    Ok(check_transaction(gate, &msgs))
}

pub fn check_transaction(gate: &MessageGate, msgs: &[Msg]) -> Verdict {
    let count = msgs.len();
    match gate.admit_all(msgs) {
        Ok(()) => Verdict::Admitted { count },
        Err((index, error)) => Verdict::Rejected { index, count, error },
    }
}

/// Subaccount id of `address` at `index`.
pub fn subaccount_of(address: &str, index: u32, params: &ProtocolParams) -> Result<SubaccountId> {
    let owner = parse_address(address, params)?;
    Ok(SubaccountId::with_index(&owner, index)?)
}

/// Bech32 owner of a subaccount id.
pub fn owner_of(subaccount_id: &str, params: &ProtocolParams) -> Result<String> {
    let owner = subaccount_owner(subaccount_id)?;
    Ok(owner.to_bech32(&params.bech32_prefix)?)
}
