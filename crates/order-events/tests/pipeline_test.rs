//! 解码归一化管道端到端测试
//!
//! 按消费循环的真实调用方式（原始字节进、规范事件出）覆盖完整管道，
//! 包括命名漂移、顺序保持与幂等性。

use order_events::{OrderEventError, decode_order_created};
use serde_json::json;

fn encode(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

#[test]
fn test_wire_payload_to_canonical_event() {
    let payload = encode(json!({
        "codigoPedido": 123,
        "codigoClient": 456,
        "itens": [
            {"produto": "caneta", "quantidade": 2, "preco": 3.5},
            {"produto": "caderno", "quantidade": 1, "preco": 12.0}
        ]
    }));

    let event = decode_order_created(&payload).unwrap();

    assert_eq!(event.order_code(), 123);
    assert_eq!(event.customer_code(), 456);
    assert_eq!(event.items().len(), 2);
    // 条目原样透传，字段不被解释或改写
    assert_eq!(event.items()[0].as_value()["produto"], "caneta");
    assert_eq!(event.items()[1].as_value()["preco"], 12.0);
}

#[test]
fn test_items_order_preserved() {
    let payload = encode(json!({
        "codigoPedido": 1,
        "codigoClient": 2,
        "itens": [{"seq": "i1"}, {"seq": "i2"}, {"seq": "i3"}]
    }));

    let event = decode_order_created(&payload).unwrap();

    let seqs: Vec<_> = event
        .items()
        .iter()
        .map(|item| item.as_value()["seq"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(seqs, vec!["i1", "i2", "i3"]);
}

#[test]
fn test_normalization_is_idempotent() {
    // 规范事件序列化后再过一遍管道，结果与第一次完全相同
    let payload = encode(json!({
        "codigoPedido": 123,
        "codigoClient": 456,
        "itens": [{"produto": "caneta"}]
    }));

    let first = decode_order_created(&payload).unwrap();
    let reserialized = serde_json::to_vec(&first).unwrap();
    let second = decode_order_created(&reserialized).unwrap();

    assert_eq!(second, first);
}

#[test]
fn test_alternate_customer_spellings_accepted() {
    // 映射表收录的每个客户编号拼写都归一到 customerCode
    for spelling in ["codigoClient", "codigoCliente", "clientCode", "customerCode"] {
        let payload = format!(r#"{{"codigoPedido": 7, "{spelling}": 99, "itens": []}}"#);

        let event = decode_order_created(payload.as_bytes()).unwrap();
        assert_eq!(event.customer_code(), 99, "拼写 {spelling} 归一化失败");
    }
}

#[test]
fn test_missing_client_field_is_malformed() {
    let payload = encode(json!({"codigoPedido": 123, "itens": []}));

    let err = decode_order_created(&payload).unwrap_err();
    match err {
        OrderEventError::MalformedEvent { field, .. } => assert_eq!(field, "codigoClient"),
        other => panic!("期望 MalformedEvent，实际 {other:?}"),
    }
}

#[test]
fn test_renamed_client_field_is_unknown_mapping() {
    // 生产方改名而映射表未更新：显式失败而非悄悄错配
    let payload = encode(json!({
        "codigoPedido": 123,
        "codigoDoCliente": 456,
        "itens": []
    }));

    let err = decode_order_created(&payload).unwrap_err();
    match err {
        OrderEventError::UnknownFieldMapping { ref field } => assert_eq!(field, "codigoDoCliente"),
        other => panic!("期望 UnknownFieldMapping，实际 {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[test]
fn test_extra_unknown_field_is_unknown_mapping() {
    // 必填字段齐全但混入未收录字段名，同样按漂移报告
    let payload = encode(json!({
        "codigoPedido": 123,
        "codigoClient": 456,
        "itens": [],
        "observacao": "entrega rapida"
    }));

    let err = decode_order_created(&payload).unwrap_err();
    assert_eq!(err.code(), "UNKNOWN_FIELD_MAPPING");
    assert_eq!(err.field(), "observacao");
}

#[test]
fn test_mistyped_fields_are_malformed() {
    let cases = [
        (json!({"codigoPedido": "123", "codigoClient": 456, "itens": []}), "codigoPedido"),
        (json!({"codigoPedido": 123, "codigoClient": null, "itens": []}), "codigoClient"),
        (json!({"codigoPedido": 123, "codigoClient": 456, "itens": 7}), "itens"),
    ];

    for (payload, expected_field) in cases {
        let err = decode_order_created(&encode(payload)).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_EVENT");
        assert_eq!(err.field(), expected_field);
    }
}

#[test]
fn test_one_bad_payload_does_not_affect_others() {
    // 错误只绑定单条载荷：失败之后继续解码后续载荷不受影响
    let bad = encode(json!({"codigoPedido": 1}));
    let good = encode(json!({"codigoPedido": 2, "codigoClient": 3, "itens": []}));

    assert!(decode_order_created(&bad).is_err());
    let event = decode_order_created(&good).unwrap();
    assert_eq!(event.order_code(), 2);
}

#[test]
fn test_concurrent_decoding_needs_no_coordination() {
    // 管道无共享状态，多个线程各自解码互不干扰
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let payload = encode(json!({
                    "codigoPedido": i,
                    "codigoClient": i * 10,
                    "itens": [{"seq": i}]
                }));
                decode_order_created(&payload).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let event = handle.join().unwrap();
        assert_eq!(event.order_code(), i as i64);
        assert_eq!(event.customer_code(), (i * 10) as i64);
    }
}
