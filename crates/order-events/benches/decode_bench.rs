//! 解码归一化管道性能基准测试
//!
//! 覆盖空条目、典型条目数与大条目数三档载荷，观察条目规模对解码
//! 吞吐的影响。

use criterion::{Criterion, criterion_group, criterion_main};
use order_events::decode_order_created;
use serde_json::json;
use std::hint::black_box;

/// 构造含指定条目数的线上载荷
fn payload_with_items(count: usize) -> Vec<u8> {
    let items: Vec<_> = (0..count)
        .map(|i| json!({"produto": format!("produto-{i}"), "quantidade": i % 5 + 1, "preco": 9.9}))
        .collect();

    serde_json::to_vec(&json!({
        "codigoPedido": 123,
        "codigoClient": 456,
        "itens": items
    }))
    .unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_order_created");

    for count in [0, 10, 100] {
        let payload = payload_with_items(count);
        group.bench_function(format!("items_{count}"), |b| {
            b.iter(|| decode_order_created(black_box(&payload)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
