use std::env;

use log::info;
use mio::Token;

use mio_http::server::{Config, Connection, Dispatcher, TcpServer};

/// Echoes every received chunk back to its sender.
struct Echo;

impl Dispatcher for Echo {
    fn data_received(&mut self, conn: &mut Connection, data: &[u8]) {
        info!("{} bytes from {:?}", data.len(), conn.token());
        conn.write(data, None);
    }

    fn connection_closed(&mut self, token: Token) {
        info!("{:?} disconnected", token);
    }
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init().expect("init logging");

    let cfg = Config::new().port(8000).done();
    let mut server = TcpServer::bind(&cfg, Echo).expect("bind server");
    info!("listening on {}", server.local_addr().expect("local addr"));
    server.start().expect("run server");
}
