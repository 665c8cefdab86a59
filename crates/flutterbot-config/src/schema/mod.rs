//! Configuration schema types for FlutterBot.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the hosted FlutterBot page.

mod gateway;
mod session;
mod system;

pub use gateway::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for FlutterBot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlutterbotConfig {
    pub gateway: GatewaySection,
    pub session: SessionSection,
    pub logging: LoggingConfig,
}
