//! Message Gate
//!
//! Front door for exchange messages: every message passes the stateless
//! checks here before it may be executed. The gate holds no mutable state,
//! so one instance can be shared freely across threads.

use tracing::{debug, info};

use crate::error::ValidationError;
use crate::msgs::Msg;
use crate::params::ProtocolParams;

#[derive(Debug, Clone, Default)]
pub struct MessageGate {
    params: ProtocolParams,
}

impl MessageGate {
    pub fn new(params: ProtocolParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    /// Admit or reject a single message.
    pub fn admit(&self, msg: &Msg) -> Result<(), ValidationError> {
        match msg.validate_basic(&self.params) {
            Ok(()) => {
                debug!(msg_type = msg.type_name(), "message admitted");
                Ok(())
            }
            Err(e) => {
                info!(
                    msg_type = msg.type_name(),
                    codespace = e.codespace(),
                    code = e.code(),
                    "message rejected: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Admit a whole transaction. The first failing message rejects it,
    /// reported with its position in `msgs`.
    pub fn admit_all(&self, msgs: &[Msg]) -> Result<(), (usize, ValidationError)> {
        for (index, msg) in msgs.iter().enumerate() {
            if let Err(e) = self.admit(msg) {
                info!(index, total = msgs.len(), "transaction rejected");
                return Err((index, e));
            }
        }
        debug!(total = msgs.len(), "transaction admitted");
        Ok(())
    }
}
