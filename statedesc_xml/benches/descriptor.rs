use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use statedesc_xml::*;
use std::hint::black_box;

#[inline(always)]
fn attributes() -> AttributeMap {
    [
        (ATTR_MIN, "-40"),
        (ATTR_MAX, "125.5"),
        (ATTR_STEP, "0.1"),
        (ATTR_PATTERN, "%.1f °C"),
        (ATTR_READ_ONLY, "true"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[inline(always)]
fn options(len: usize) -> Vec<GenericNode> {
    let children = (0..len)
        .map(|i| {
            let attributes = AttributeMap::from([(ATTR_VALUE.to_string(), i.to_string())]);
            GenericNode::leaf(TAG_OPTION, attributes, format!("Option {i}"))
        })
        .collect();
    vec![GenericNode::list(TAG_OPTIONS, children)]
}

#[inline(always)]
fn document(len: usize) -> String {
    let mut xml = String::from("<thing-descriptions>");
    for _ in 0..len {
        xml.push_str(
            r#"<channel-type><label>Mode</label><state pattern="%s"><options><option value="A">Auto</option><option value="M">Manual</option></options></state></channel-type>"#,
        );
    }
    xml.push_str("</thing-descriptions>");
    xml
}

fn criterion_benchmark(c: &mut Criterion) {
    let attributes = attributes();
    c.bench_function("scalars", |b| {
        b.iter(|| parse_state(black_box(&attributes), &[]))
    });
    for len in [1, 10, 100] {
        let children = options(len);
        c.bench_with_input(BenchmarkId::new("options", len), &children, |b, children| {
            b.iter(|| parse_state(&attributes, black_box(children)))
        });
    }
    for len in [1, 100] {
        let xml = document(len);
        c.bench_with_input(BenchmarkId::new("document", len), &xml, |b, xml| {
            b.iter(|| from_str(black_box(xml)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
