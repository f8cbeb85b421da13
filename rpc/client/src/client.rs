use crate::{error::Error, result::Result};
use kaspa_archival_core::{debug, info};
use kaspa_grpc_client::GrpcClient;
use kaspa_rpc_core::api::rpc::RpcApi;
use kaspa_wrpc_client::{
    KaspaRpcClient, WrpcEncoding,
    client::{ConnectOptions, ConnectStrategy},
};
use std::{fmt, str::FromStr, sync::Arc, time::Duration};

/// Address of a kaspad RPC server.
///
/// `grpc://host:port` selects gRPC, `ws://` and `wss://` select Borsh encoded wRPC.
/// An address without a scheme is taken as gRPC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeUrl {
    Grpc(String),
    Wrpc(String),
}

impl FromStr for NodeUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("grpc://") {
            Ok(NodeUrl::Grpc(s.to_string()))
        } else if s.starts_with("ws://") || s.starts_with("wss://") {
            Ok(NodeUrl::Wrpc(s.to_string()))
        } else if s.is_empty() || s.contains("://") {
            Err(Error::AddressSchema(s.to_string()))
        } else {
            Ok(NodeUrl::Grpc(format!("grpc://{}", s)))
        }
    }
}

impl fmt::Display for NodeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeUrl::Grpc(url) | NodeUrl::Wrpc(url) => f.write_str(url),
        }
    }
}

/// A connected RPC client of either transport
pub enum NodeClient {
    Grpc(Arc<GrpcClient>),
    Wrpc(Arc<KaspaRpcClient>),
}

impl NodeClient {
    pub async fn connect(url: &NodeUrl, connect_timeout: Duration) -> Result<Self> {
        info!("Connecting to kaspad at {}", url);
        let client = match url {
            NodeUrl::Grpc(url) => {
                let client = tokio::time::timeout(connect_timeout, GrpcClient::connect(url.clone()))
                    .await
                    .map_err(|_| Error::Timeout(connect_timeout))??;
                NodeClient::Grpc(Arc::new(client))
            }
            NodeUrl::Wrpc(url) => {
                let client = KaspaRpcClient::new(WrpcEncoding::Borsh, Some(url.as_str()), None, None, None)?;
                let options = ConnectOptions {
                    block_async_connect: true,
                    connect_timeout: Some(connect_timeout),
                    strategy: ConnectStrategy::Fallback,
                    ..Default::default()
                };
                client.connect(Some(options)).await?;
                NodeClient::Wrpc(Arc::new(client))
            }
        };
        debug!("Connected to kaspad at {}", url);
        Ok(client)
    }

    pub fn rpc_api(&self) -> Arc<dyn RpcApi> {
        match self {
            NodeClient::Grpc(client) => client.clone() as Arc<dyn RpcApi>,
            NodeClient::Wrpc(client) => client.clone(),
        }
    }

    pub async fn disconnect(&self) -> Result<()> {
        match self {
            NodeClient::Grpc(client) => client.disconnect().await?,
            NodeClient::Wrpc(client) => client.disconnect().await?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_url() {
        let cases = [
            ("grpc://localhost:16110", Some(NodeUrl::Grpc("grpc://localhost:16110".to_string()))),
            ("localhost:16110", Some(NodeUrl::Grpc("grpc://localhost:16110".to_string()))),
            (" 127.0.0.1:16110 ", Some(NodeUrl::Grpc("grpc://127.0.0.1:16110".to_string()))),
            ("ws://127.0.0.1:17110", Some(NodeUrl::Wrpc("ws://127.0.0.1:17110".to_string()))),
            ("wss://node.example:443", Some(NodeUrl::Wrpc("wss://node.example:443".to_string()))),
            ("http://localhost:16110", None),
            ("", None),
        ];
        for (input, expected) in cases {
            let parsed = input.parse::<NodeUrl>().ok();
            assert_eq!(parsed, expected, "input: '{}'", input);
        }
    }

    #[test]
    fn test_node_url_display() {
        assert_eq!("localhost:16110".parse::<NodeUrl>().unwrap().to_string(), "grpc://localhost:16110");
    }
}
