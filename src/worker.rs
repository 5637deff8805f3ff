//! ZeroMQ REP endpoint serving match requests.

use std::thread;
use std::time::Duration;

const REBIND_ATTEMPTS: u32 = 10;
const REBIND_DELAY: Duration = Duration::from_millis(100);

/// REP socket bound to a fixed endpoint.
///
/// A REP socket that fails to send stays in its send state and rejects every
/// further receive, so [`Responder::reply`] replaces it with a fresh socket.
pub struct Responder {
    context: zmq::Context,
    address: String,
    socket: zmq::Socket,
}

impl Responder {
    pub fn bind(context: &zmq::Context, address: &str) -> Result<Self, zmq::Error> {
        let socket = open_socket(context, address)?;
        Ok(Self {
            context: context.clone(),
            address: address.to_string(),
            socket,
        })
    }

    pub fn recv(&self) -> Result<Vec<u8>, zmq::Error> {
        self.socket.recv_bytes(0)
    }

    /// Send `payload` as the reply to the last request.
    ///
    /// A failed send is logged and the socket is rebound; the returned error
    /// means the endpoint could not be restored.
    pub fn reply(&mut self, payload: &[u8]) -> Result<(), zmq::Error> {
        match self.socket.send(payload, 0) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("Failed to send reply on {}: {e}; rebinding", self.address);
                self.rebind()
            }
        }
    }

    fn rebind(&mut self) -> Result<(), zmq::Error> {
        if let Err(e) = self.socket.set_linger(0) {
            log::warn!("Failed to set linger on {}: {e}", self.address);
        }
        if let Err(e) = self.socket.unbind(&self.address) {
            log::warn!("Failed to unbind {}: {e}", self.address);
        }

        let mut attempt = 1;
        loop {
            match open_socket(&self.context, &self.address) {
                Ok(socket) => {
                    self.socket = socket;
                    return Ok(());
                }
                Err(e) if attempt < REBIND_ATTEMPTS => {
                    log::warn!("Rebind attempt {attempt} on {} failed: {e}", self.address);
                    attempt += 1;
                    thread::sleep(REBIND_DELAY);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn open_socket(context: &zmq::Context, address: &str) -> Result<zmq::Socket, zmq::Error> {
    let socket = context.socket(zmq::REP)?;
    socket.bind(address)?;
    Ok(socket)
}
