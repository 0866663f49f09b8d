use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use log::debug;

use super::{PacketSender, SendError};

/// Fire-and-forget sender over a connectionless UDP socket bound to an
/// ephemeral local port
pub struct UdpPacketSender {
    socket: UdpSocket,
    engine_addr: SocketAddr,
}

impl UdpPacketSender {
    pub fn connect(engine_addr: SocketAddr) -> Result<Self, SendError> {
        if engine_addr.port() == 0 {
            return Err(SendError::InvalidDestination {
                destination: engine_addr.to_string(),
                reason: "port 0 cannot receive datagrams".to_string(),
            });
        }
        let local_ip = match engine_addr {
            SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        };
        let socket = UdpSocket::bind(SocketAddr::new(local_ip, 0)).map_err(|err| SendError::Io {
            destination: engine_addr.to_string(),
            reason: err.to_string(),
        })?;
        debug!(
            "UDP sender bound to {:?}, targeting {}",
            socket.local_addr().ok(),
            engine_addr
        );
        Ok(Self {
            socket,
            engine_addr,
        })
    }

    /// Resolves `host:port` and connects to the first address found
    pub fn resolve(host: &str, port: u16) -> Result<Self, SendError> {
        let destination = format!("{}:{}", host, port);
        let engine_addr = (host, port)
            .to_socket_addrs()
            .map_err(|err| SendError::InvalidDestination {
                destination: destination.clone(),
                reason: err.to_string(),
            })?
            .next()
            .ok_or_else(|| SendError::InvalidDestination {
                destination,
                reason: "host resolved to no addresses".to_string(),
            })?;
        Self::connect(engine_addr)
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr().ok()
    }
}

impl PacketSender for UdpPacketSender {
    fn send(&self, payload: &[u8]) -> Result<(), SendError> {
        match self.socket.send_to(payload, self.engine_addr) {
            Ok(_) => Ok(()),
            Err(err) => Err(SendError::Io {
                destination: self.engine_addr.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    fn engine_addr(&self) -> SocketAddr {
        self.engine_addr
    }
}
