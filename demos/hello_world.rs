use std::env;

use log::info;

use mio_http::server::{Config, Handler, HttpServer};
use mio_http::{HeaderField, Request, Response, Status};

#[derive(Clone)]
struct HelloWorld;

const BODY: &'static str = "Hello World!";

impl Handler for HelloWorld {
    fn handle(&mut self, request: Request) -> Response {
        info!("{:?} {}", request.method, request.path);

        let mut response = Response::new(Status::Ok);
        response.set_reason(Status::Ok.reason());
        response.add_field(HeaderField::new("Server",
            concat!("mio-http/", env!("CARGO_PKG_VERSION"))));
        response.add_field(HeaderField::new("Content-Type", "text/plain"));
        response.add_field(HeaderField::new("Content-Length",
            BODY.len().to_string()));
        response.set_body(BODY.as_bytes().to_vec());

        // hang up after responding when the client asks for it
        let wants_close = request.header_fields().iter().any(|field| {
            field.name == "connection"
                && field.value.eq_ignore_ascii_case("close")
        });
        response.set_close(wants_close);
        response
    }
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init().expect("init logging");

    let cfg = Config::new().port(8080).done();
    let mut server = HttpServer::bind(&cfg, HelloWorld).expect("bind server");
    info!("listening on {}", server.local_addr().expect("local addr"));
    server.start().expect("run server");
}
