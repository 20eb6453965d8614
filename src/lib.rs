pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod msgs;
pub mod params;
pub mod validation;

pub use config::AppConfig;
pub use domain::{AccAddress, Coin, Dec, OracleType, OrderType, SubaccountId};
pub use error::{DexGateError, Result, ValidationError};
pub use gate::MessageGate;
pub use msgs::Msg;
pub use params::ProtocolParams;
