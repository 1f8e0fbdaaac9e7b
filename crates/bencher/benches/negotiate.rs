use std::hint::black_box;
use bencher::{TEST_CASES, TestCase};
use bytes::Bytes;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use http::StatusCode;
use micro_rest::negotiation::{AcceptHeader, ContentNegotiator};
use micro_rest::{FormatMapper, HttpClient, MimeType, NegotiationConfig, ResponseBuilder};

fn benchmark_negotiate(criterion: &mut Criterion) {
    let config = NegotiationConfig::default();
    let negotiator = ContentNegotiator::new(&config);
    let mut group = criterion.benchmark_group("negotiate");

    for case in &TEST_CASES {
        group.throughput(Throughput::Bytes(case.accept().len() as u64));
        let id = BenchmarkId::new(format!("{:?}", case.group()), case.name());
        group.bench_with_input(id, case, |b, case: &TestCase| {
            let header = AcceptHeader::from_string(case.accept());
            b.iter(|| {
                let mime_type = negotiator.negotiate(black_box(&header)).expect("case should be negotiable");
                black_box(mime_type);
            });
        });
    }

    group.finish();
}

fn benchmark_format_mapper(criterion: &mut Criterion) {
    let mapper = FormatMapper::from_config(&NegotiationConfig::default());
    let xml: MimeType = "application/xml".parse().expect("static mime type is valid");

    criterion.bench_function("by_mime_type", |b| {
        b.iter(|| black_box(mapper.by_mime_type(black_box(&xml)).expect("xml is configured")));
    });
}

fn benchmark_response_builder(criterion: &mut Criterion) {
    let json: MimeType = "application/json".parse().expect("static mime type is valid");
    let client = HttpClient::new(json, "en");
    let content = Bytes::from_static(br#"{"name":"Bonbon","weight":100}"#);
    let mut group = criterion.benchmark_group("response_builder");

    for status in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        group.bench_with_input(BenchmarkId::from_parameter(status.as_u16()), &status, |b, status| {
            b.iter(|| {
                let response = ResponseBuilder::new()
                    .content(content.clone())
                    .status(*status)
                    .client(client.clone())
                    .build()
                    .expect("response parts are valid");
                black_box(response);
            });
        });
    }

    group.finish();
}

criterion_group!(negotiation, benchmark_negotiate, benchmark_format_mapper, benchmark_response_builder);
criterion_main!(negotiation);
