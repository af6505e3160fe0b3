use criterion::{criterion_group, criterion_main};

mod network;

criterion_group!(
    benches,
    network::application::http::server::bench_parse_request,
    network::application::http::server::bench_serve_route,
    network::application::http::server::bench_query_lookup
);
criterion_main!(benches);
