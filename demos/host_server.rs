//! Serves a tiny device dashboard over TCP.
//!
//! ```text
//! MICROWEB_BIND=127.0.0.1:8080 cargo run --example host_server --features std
//! curl 'http://127.0.0.1:8080/api/led?state=on'
//! ```

use dotenvy::dotenv;
use microweb::network::Bind;
use microweb::network::application::http::{ContentType, HttpError, Request};
use microweb::network::error::Error;
use microweb::network::tcp::{TcpAcceptor, TcpConnection};
use serde::Serialize;
use std::env;

const INDEX_HTML: &str = "<html><body><h1>microweb</h1>\
    <a href=\"/api/led?state=on\">on</a> <a href=\"/api/led?state=off\">off</a>\
    </body></html>";

#[derive(Serialize)]
struct LedState<'a> {
    led: bool,
    source: &'a str,
}

fn main() -> Result<(), Error> {
    dotenv().ok();
    let address = env::var("MICROWEB_BIND").unwrap_or("127.0.0.1:8080".to_string());

    let mut acceptor = TcpAcceptor::new();
    let mut led = false;

    loop {
        let conn = acceptor.bind(&address)?;
        let mut request = Request::new(conn);

        // Errors here only concern this one client.
        let _ = route(&mut request, &mut led);
    }
}

fn route(request: &mut Request<TcpConnection>, led: &mut bool) -> Result<(), Error> {
    if request.query().len() > 4 {
        request.reject(HttpError::BadRequest)?;
    }

    request.redirect("/", "/index.html")?;
    request.serve_url("/index.html", ContentType::Html, |req| req.print(INDEX_HTML))?;
    request.serve_url("/api/led", ContentType::Json, |req| {
        match req.value("state") {
            Some("on") => *led = true,
            Some("off") => *led = false,
            _ => {}
        }
        let from_query = req.query().contains("state");
        req.write_json(&LedState {
            led: *led,
            source: if from_query { "query" } else { "memory" },
        })
    })?;
    request.serve_url("/uptime", ContentType::Text, |req| req.println("up"))?;
    Ok(())
}
