//! 字段归一化器
//!
//! 把结构校验通过的候选事件收敛为规范 `OrderCreated` 值：字段值逐位
//! 不变、条目顺序不变，只有命名从线上词汇换成下游词汇。命名解析完全
//! 依赖 [`crate::mapping`] 的固定表，表中没有的字段名定性为 schema
//! 漂移并立即失败——这是部署/版本问题，重试同一条消息没有意义。

use tracing::{debug, warn};

use crate::decoder::{self, CandidateEvent};
use crate::error::{OrderEventError, Result};
use crate::event::OrderCreated;
use crate::mapping::{self, CanonicalField};

/// 将候选事件归一化为规范事件
///
/// 纯转换。候选事件携带未识别字段名时返回 `UnknownFieldMapping`，
/// 错误指向第一个（字典序）未识别的字段名。
pub fn normalize(candidate: CandidateEvent) -> Result<OrderCreated> {
    if let Some(field) = candidate.unmapped.first() {
        warn!(
            field = %field,
            table_version = mapping::TABLE_VERSION,
            "字段名未收录于映射表，疑似生产方 schema 漂移"
        );
        return Err(OrderEventError::UnknownFieldMapping {
            field: field.clone(),
        });
    }

    let order_code = require(candidate.order_code, CanonicalField::OrderCode)?;
    let customer_code = require(candidate.customer_code, CanonicalField::CustomerCode)?;
    let items = require(candidate.items, CanonicalField::Items)?;

    debug!(order_code, customer_code, items = items.len(), "事件已归一化");

    Ok(OrderCreated::new(order_code, customer_code, items))
}

/// 解码 + 归一化的一站式入口
///
/// 消费循环对每条入站载荷调用一次，拿到规范事件后交给
/// [`crate::event::OrderCreatedHandler`] 的实现。
pub fn decode_order_created(payload: &[u8]) -> Result<OrderCreated> {
    normalize(decoder::decode(payload)?)
}

/// 候选字段没有未识别字段兜底时必须已就位，缺失按结构错误报出
fn require<T>(slot: Option<T>, field: CanonicalField) -> Result<T> {
    slot.ok_or_else(|| OrderEventError::malformed(field.primary_wire_name(), "缺少必填字段"))
}
