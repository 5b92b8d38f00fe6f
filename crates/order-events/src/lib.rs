//! 订单创建事件的解码与归一化
//!
//! 上游订单系统通过消息队列发出"订单已创建"通知，载荷用葡语词汇拼写
//! 字段名（`codigoPedido` / `codigoClient` / `itens`），其中客户编号的
//! 拼写与语义不符，下游统一使用 `orderCode` / `customerCode` / `items`。
//! 本 crate 实现消费侧的解码与归一化契约，不包含 broker 连接、位点
//! 管理、落库和下游业务规则——那些属于外围服务。
//!
//! # 管道
//!
//! ```text
//! 原始载荷 --> Schema 解码器 --> 候选事件 --> 字段归一化器 --> 规范 OrderCreated
//!              (decoder)                      (normalizer)
//! ```
//!
//! 字段名只通过 [`mapping`] 的固定版本化表解析：生产方改名而表未更新时
//! 管道显式失败（[`OrderEventError::UnknownFieldMapping`]），不会把值
//! 悄悄写进猜测的字段。整个管道是无状态纯转换，每次调用完全隔离，
//! 调用方可以并发处理任意多条载荷而无需协调。
//!
//! # 使用
//!
//! ```
//! use order_events::decode_order_created;
//!
//! let payload = br#"{"codigoPedido": 123, "codigoClient": 456, "itens": []}"#;
//! let event = decode_order_created(payload).unwrap();
//!
//! assert_eq!(event.order_code(), 123);
//! assert_eq!(event.customer_code(), 456);
//! assert!(event.items().is_empty());
//! ```

pub mod decoder;
pub mod error;
pub mod event;
pub mod mapping;
pub mod normalizer;

// Re-export core types
pub use decoder::{CandidateEvent, decode};
pub use error::{OrderEventError, Result};
pub use event::{OrderCreated, OrderCreatedHandler, OrderItemEvent};
pub use mapping::{CanonicalField, TABLE_VERSION, resolve};
pub use normalizer::{decode_order_created, normalize};
