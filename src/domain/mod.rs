pub mod address;
pub mod coin;
pub mod decimal;
pub mod market;
pub mod order;
pub mod subaccount;

pub use address::*;
pub use coin::*;
pub use decimal::*;
pub use market::*;
pub use order::*;
pub use subaccount::*;
