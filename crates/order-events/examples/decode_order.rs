//! 解码归一化演示
//!
//! 运行: cargo run -p order-events --example decode_order

use anyhow::Result;
use order_events::decode_order_created;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let payloads: [(&str, &[u8]); 3] = [
        (
            "线上载荷",
            br#"{"codigoPedido": 123, "codigoClient": 456, "itens": [{"produto": "caneta", "quantidade": 2}]}"#,
        ),
        ("缺少客户编号", br#"{"codigoPedido": 123, "itens": []}"#),
        (
            "生产方改名漂移",
            br#"{"codigoPedido": 123, "codigoDoCliente": 456, "itens": []}"#,
        ),
    ];

    for (label, payload) in payloads {
        println!("--- {label} ---");
        match decode_order_created(payload) {
            Ok(event) => println!(
                "orderCode={} customerCode={} items={}",
                event.order_code(),
                event.customer_code(),
                event.items().len()
            ),
            Err(e) => println!("{} [{}]", e, e.code()),
        }
        println!();
    }

    Ok(())
}
