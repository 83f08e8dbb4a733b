use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solmap::SourceMapDecoder;
use std::collections::BTreeMap;

fn synthetic_source(lines: usize) -> String {
    "        uint256 value = value + 1;\n".repeat(lines)
}

// alternates explicit and fully-inherited entries, the shape solc output
// actually has
fn synthetic_map(entries: usize, source_len: usize) -> String {
    let mut map = String::new();
    for i in 0..entries {
        if i > 0 {
            map.push(';');
        }
        if i % 3 != 2 {
            let offset = (i * 13) % (source_len - 20);
            map.push_str(&format!("{}:{}:0:-", offset, 12));
        }
    }
    map
}

fn benchmark_decode(c: &mut Criterion) {
    let source = synthetic_source(2000);
    let decoder = SourceMapDecoder::new()
        .with_source_text(0, &source)
        .with_file_name(0, "Bench.sol");

    for entries in [100usize, 10_000] {
        let map = synthetic_map(entries, source.len());
        let indices = (0..entries as u32)
            .map(|i| (i * 2, i))
            .collect::<BTreeMap<_, _>>();

        c.bench_function(&format!("decode({entries} entries)"), |b| {
            b.iter(|| decoder.decode(black_box(&map), black_box(&indices)).unwrap())
        });
    }
}

criterion_group!(decode, benchmark_decode);
criterion_main!(decode);
