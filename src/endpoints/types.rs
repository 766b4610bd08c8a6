// Standard library
use std::fmt;

// 3rd party crates
use serde::Deserialize;

/// Protocol family an endpoint is checked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcFamily {
    /// Ethereum-style JSON-RPC (`eth_blockNumber`)
    Evm,
    /// Cosmos SDK node REST (`/status`)
    Cosmos,
}

impl fmt::Display for RpcFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcFamily::Evm => write!(f, "EVM"),
            RpcFamily::Cosmos => write!(f, "Cosmos"),
        }
    }
}

/// The endpoints to probe, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointList {
    pub evm: Vec<String>,
    pub cosmos: Vec<String>,
}

impl EndpointList {
    /// Every endpoint tagged with its family, EVM first.
    pub fn tagged(&self) -> impl Iterator<Item = (&str, RpcFamily)> {
        self.evm
            .iter()
            .map(|url| (url.as_str(), RpcFamily::Evm))
            .chain(
                self.cosmos
                    .iter()
                    .map(|url| (url.as_str(), RpcFamily::Cosmos)),
            )
    }

    pub fn len(&self) -> usize {
        self.evm.len() + self.cosmos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
