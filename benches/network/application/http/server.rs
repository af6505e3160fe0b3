use criterion::{BatchSize, Criterion, Throughput};
use microweb::network::application::http::{ContentType, QueryTable, Request};
use microweb::network::error::Error;
use microweb::network::{Close, Connection, Read, Write};
use std::hint::black_box;

const REQUEST: &[u8] =
    b"GET /api/led?pin=13&state=on&blink=250 HTTP/1.1\r\nHost: device.local\r\nAccept: */*\r\n\r\n";

/// Replays one request and throws the response away
struct ReplayConnection {
    data: &'static [u8],
    read_pos: usize,
    open: bool,
}

impl ReplayConnection {
    fn new(data: &'static [u8]) -> Self {
        Self {
            data,
            read_pos: 0,
            open: true,
        }
    }
}

impl Read for ReplayConnection {
    type Error = Error;

    fn available(&mut self) -> bool {
        self.read_pos < self.data.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let to_read = core::cmp::min(buf.len(), self.data.len() - self.read_pos);
        buf[..to_read].copy_from_slice(&self.data[self.read_pos..self.read_pos + to_read]);
        self.read_pos += to_read;
        Ok(to_read)
    }
}

impl Write for ReplayConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for ReplayConnection {
    type Error = Error;

    fn is_connected(&self) -> bool {
        self.open
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.open = false;
        Ok(())
    }
}

impl Connection for ReplayConnection {}

pub fn bench_parse_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_request");
    group.throughput(Throughput::Bytes(REQUEST.len() as u64));
    group.bench_function("parse_request", |b| {
        b.iter_batched_ref(
            || ReplayConnection::new(REQUEST),
            |conn| {
                let request = Request::new(conn);
                black_box(request.value("state"));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_serve_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("serve_route");
    group.throughput(Throughput::Bytes(REQUEST.len() as u64));
    group.bench_function("serve_route", |b| {
        b.iter_batched_ref(
            || ReplayConnection::new(REQUEST),
            |conn| {
                let mut request = Request::new(conn);
                request.redirect("/", "/index.html").expect("Failed to redirect");
                request
                    .serve_url("/index.html", ContentType::Html, |req| req.print("index"))
                    .expect("Failed to serve");
                request
                    .serve_url("/api/led", ContentType::Json, |req| {
                        let on = req.value("state") == Some("on");
                        req.print(if on { r#"{"led":true}"# } else { r#"{"led":false}"# })
                    })
                    .expect("Failed to serve");
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_query_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_lookup");
    let query = "a=1&b=2&c=3&d=4&e=5&f=6&g=7&h=8&a=9";
    group.throughput(Throughput::Bytes(query.len() as u64));
    group.bench_function("parse_and_get", |b| {
        let mut table: QueryTable<128, 16> = QueryTable::new();
        b.iter(|| {
            table.parse(black_box(query)).expect("Failed to parse");
            black_box(table.get("a"));
            black_box(table.get("missing"));
        })
    });
    group.finish();
}
