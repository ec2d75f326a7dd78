use std::net::SocketAddr;

use serde::Deserialize;

use matstats_core::error::{MatStatsError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MatStatsError::UnsupportedVersion);
        }

        self.gateway.validate()?;

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(1024..=16_777_216).contains(&self.max_body_bytes) {
            return Err(MatStatsError::BadRequest(
                "gateway.max_body_bytes must be between 1024 and 16777216".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the listen address, applying an optional port override
    /// (the `PORT` environment variable at the binary edge).
    pub fn listen_addr(&self, port_override: Option<&str>) -> Result<SocketAddr> {
        let mut addr: SocketAddr = self.listen.parse().map_err(|e| {
            MatStatsError::BadRequest(format!("gateway.listen is not a socket address: {e}"))
        })?;

        if let Some(raw) = port_override {
            let port: u16 = raw
                .parse()
                .map_err(|e| MatStatsError::BadRequest(format!("PORT is not a port: {e}")))?;
            addr.set_port(port);
        }

        Ok(addr)
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_max_body_bytes() -> usize {
    1_048_576
}
