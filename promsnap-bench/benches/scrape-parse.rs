use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use indoc::indoc;

const PAYLOADS: &[(&'static str, &'static str)] = &[
    (
        "gauge",
        indoc! {r#"
            # HELP queue_depth Jobs waiting for a worker
            # TYPE queue_depth gauge
            queue_depth 4
        "#},
    ),
    (
        "histogram",
        indoc! {r#"
            # HELP request_seconds Time spent handling requests
            # TYPE request_seconds histogram
            request_seconds_bucket{le="0.5"} 5
            request_seconds_bucket{le="1.0"} 7
            request_seconds_bucket{le="+Inf"} 15
            request_seconds_sum 2
            request_seconds_count 15
        "#},
    ),
    (
        "labelled_counters",
        indoc! {r#"
            http_requests{method="GET",code="200"} 1027
            http_requests{method="GET",code="404"} 3
            http_requests{method="POST",code="200"} 12
            http_requests{method="POST",code="500"} 1
        "#},
    ),
    (
        "interleaved_garbage",
        indoc! {r#"
            up 1
            this line matches nothing at all
            up 0

            up 1
        "#},
    ),
];

#[inline]
fn do_payload<A>(group: &mut criterion::BenchmarkGroup<A>, name: &str, payload: &str)
where
    A: criterion::measurement::Measurement,
{
    group.bench_function(BenchmarkId::new(name, "promsnap"), |b| {
        b.iter(|| {
            promsnap::parse(payload).values().count();
        })
    });

    group.bench_function(BenchmarkId::new(name, "openmetrics-parser"), |b| {
        b.iter(
            || match openmetrics_parser::prometheus::parse_prometheus(payload) {
                Ok(data) => {
                    data.families.values().count();
                }
                Err(_) => {}
            },
        )
    });
}

fn scrape_parse(cr: &mut Criterion) {
    {
        let mut group = cr.benchmark_group("payloads");
        for (name, payload) in PAYLOADS {
            do_payload(&mut group, name, payload);
        }
    }

    {
        // One scrape-sized payload, the shape a real poll returns.
        let big: String = (0..1_000)
            .map(|shard| {
                format!(
                    "http_requests{{code=\"200\",shard=\"{}\"}} {}\n",
                    shard, shard
                )
            })
            .collect();

        let mut group = cr.benchmark_group("full_scrape");
        do_payload(&mut group, "sharded_counters", &big);
    }
}

criterion_group!(scrape_benches, scrape_parse);
criterion_main!(scrape_benches);
