#![cfg(feature = "std")]

use dotenvy::dotenv;
use microweb::network::Bind;
use microweb::network::application::http::{ContentType, Request};
use microweb::network::tcp::TcpAcceptor;
use std::env;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

fn listen() -> TcpAcceptor {
    dotenv().ok();
    let address = env::var("TEST_HTTP_BIND").unwrap_or("127.0.0.1:0".to_string());
    let listener = TcpListener::bind(address.as_str()).expect("Failed to bind listener");
    TcpAcceptor::from_listener(listener)
}

fn fetch(acceptor: &TcpAcceptor, request: &'static str) -> thread::JoinHandle<String> {
    let address = acceptor.local_addr().expect("acceptor is not listening");
    thread::spawn(move || {
        let mut stream = TcpStream::connect(address).expect("Failed to connect to server");
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        stream.write_all(request.as_bytes()).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    })
}

#[test]
fn test_tcp_serve() {
    let mut acceptor = listen();
    let client = fetch(&acceptor, "GET /hello?name=tcp HTTP/1.1\r\nHost: localhost\r\n\r\n");

    let conn = acceptor.bind("").expect("Failed to accept");
    {
        let mut request = Request::new(conn);
        assert_eq!(request.path(), "/hello");
        let served = request
            .serve_url("/hello", ContentType::Text, |req| {
                req.print("hello, ")?;
                req.print("tcp")
            })
            .unwrap();
        assert!(served);
    }

    let response = client.join().unwrap();
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Content-Type: text/plain; charset=utf-8\r\n"));
    assert!(response.ends_with("\r\n\r\nhello, tcp"));
}

#[test]
fn test_tcp_not_found_on_drop() {
    let mut acceptor = listen();
    let client = fetch(&acceptor, "GET /missing HTTP/1.1\r\n\r\n");

    let conn = acceptor.bind("").expect("Failed to accept");
    let request = Request::new(conn);
    drop(request);

    let response = client.join().unwrap();
    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_tcp_acceptor_serves_consecutive_connections() {
    let mut acceptor = listen();

    for path in ["/one", "/two"] {
        let client = fetch(&acceptor, "GET /one HTTP/1.1\r\n\r\n");
        let conn = acceptor.bind("").expect("Failed to accept");
        let mut request = Request::new(conn);
        request.redirect(path, "/moved").unwrap();
        drop(request);

        let response = client.join().unwrap();
        if path == "/one" {
            assert!(response.contains("Location: /moved\r\n"));
        } else {
            assert!(response.starts_with("HTTP/1.1 404 "));
        }
    }
}
