use std::sync::Arc;

use crate::server::Config;

impl Config {
    /// Create a config with defaults
    pub fn new() -> Config {
        Config {
            listen_port: 8000,
            receive_buffer_size: 2048,
        }
    }
    /// Port the listening socket is bound to on all interfaces
    ///
    /// Port zero lets the OS pick one; see `local_addr`.
    pub fn port(&mut self, value: u16) -> &mut Self {
        self.listen_port = value;
        self
    }
    /// Size of the reusable buffer a single `read` call receives into
    ///
    /// One buffer is shared by all connections; it only bounds how much
    /// one readiness drain iteration picks up, not request sizes.
    pub fn receive_buffer_size(&mut self, value: usize) -> &mut Self {
        self.receive_buffer_size = value;
        self
    }
    /// Create a Arc'd config clone to pass to the constructor
    ///
    /// This is just a convenience method.
    pub fn done(&mut self) -> Arc<Config> {
        Arc::new(self.clone())
    }
}
