//! Schema 解码器
//!
//! 将原始序列化载荷解码为候选事件：校验载荷是 JSON 对象、已识别字段的
//! 类型正确、必填字段齐全。纯转换，一条载荷对应一个事件，无任何副作用。
//!
//! 字段名通过 [`crate::mapping`] 的固定表识别。表中没有的字段名不在此处
//! 判死刑——它可能是生产方改名后的漂移拼写，收进 `unmapped` 由归一化器
//! 统一定性为 `UnknownFieldMapping`，避免同一种漂移在两处报出两种错误。

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{OrderEventError, Result};
use crate::event::OrderItemEvent;
use crate::mapping::{self, CanonicalField};

// ---------------------------------------------------------------------------
// CandidateEvent — 候选事件（线上形态）
// ---------------------------------------------------------------------------

/// 结构校验通过的候选事件
///
/// 字段值已按线上拼写提取并完成类型校验，但尚未定性命名漂移。
/// 某个字段为 `None` 只会发生在载荷同时携带未识别字段名时——
/// 该字段名可能正是改名后的拼写，留给归一化器裁决；载荷中没有
/// 未识别字段时，缺失的必填字段在解码阶段就会直接报错。
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEvent {
    pub order_code: Option<i64>,
    pub customer_code: Option<i64>,
    pub items: Option<Vec<OrderItemEvent>>,
    /// 映射表未收录的顶层字段名，按字典序排列
    pub unmapped: Vec<String>,
}

// ---------------------------------------------------------------------------
// decode — 原始载荷 -> 候选事件
// ---------------------------------------------------------------------------

/// 解码单条入站载荷
///
/// 失败时错误尽可能指向出问题的线上字段名；载荷整体不可解析时
/// `field` 为 `"payload"`。
pub fn decode(payload: &[u8]) -> Result<CandidateEvent> {
    let value: Value = serde_json::from_slice(payload).map_err(|e| {
        warn!(error = %e, "载荷 JSON 解析失败");
        OrderEventError::malformed("payload", format!("JSON 解析失败: {e}"))
    })?;

    let Value::Object(object) = value else {
        return Err(OrderEventError::malformed("payload", "载荷必须是 JSON 对象"));
    };

    // 同一规范字段可能以多个拼写出现，记录命中的拼写用于冲突检测
    let mut order_code: Option<(String, i64)> = None;
    let mut customer_code: Option<(String, i64)> = None;
    let mut items: Option<(String, Vec<OrderItemEvent>)> = None;
    let mut unmapped = Vec::new();

    for (key, val) in &object {
        match mapping::resolve(key) {
            Some(CanonicalField::OrderCode) => assign_code(&mut order_code, key, val)?,
            Some(CanonicalField::CustomerCode) => assign_code(&mut customer_code, key, val)?,
            Some(CanonicalField::Items) => assign_items(&mut items, key, val)?,
            None => unmapped.push(key.clone()),
        }
    }
    unmapped.sort();

    // 载荷中没有未识别字段时，缺失必填字段是明确的结构错误，
    // 用主拼写报出，便于与上游对照线上载荷排查
    if unmapped.is_empty() {
        for field in CanonicalField::all() {
            let present = match field {
                CanonicalField::OrderCode => order_code.is_some(),
                CanonicalField::CustomerCode => customer_code.is_some(),
                CanonicalField::Items => items.is_some(),
            };
            if !present {
                warn!(field = field.primary_wire_name(), "载荷缺少必填字段");
                return Err(OrderEventError::malformed(
                    field.primary_wire_name(),
                    "缺少必填字段",
                ));
            }
        }
    }

    debug!(unmapped = unmapped.len(), "载荷解码为候选事件");

    Ok(CandidateEvent {
        order_code: order_code.map(|(_, v)| v),
        customer_code: customer_code.map(|(_, v)| v),
        items: items.map(|(_, v)| v),
        unmapped,
    })
}

/// 提取整数编号字段
///
/// JSON null、浮点数、字符串数字都按类型错误拒绝；同一规范字段以两个
/// 拼写出现且取值不同视为歧义载荷，取值相同则接受（部分生产方在灰度
/// 期间会同时发送新旧拼写）。
fn assign_code(slot: &mut Option<(String, i64)>, key: &str, value: &Value) -> Result<()> {
    let code = value
        .as_i64()
        .ok_or_else(|| OrderEventError::malformed(key, "期望 JSON 整数"))?;

    match slot {
        Some((prev_key, prev)) if *prev != code => Err(OrderEventError::malformed(
            key,
            format!("与字段 {prev_key} 的取值冲突"),
        )),
        Some(_) => Ok(()),
        None => {
            *slot = Some((key.to_string(), code));
            Ok(())
        }
    }
}

/// 提取订单条目列表
///
/// 条目本身不做解释，逐个包成不透明结构并保持原有顺序。
fn assign_items(
    slot: &mut Option<(String, Vec<OrderItemEvent>)>,
    key: &str,
    value: &Value,
) -> Result<()> {
    let Value::Array(array) = value else {
        return Err(OrderEventError::malformed(key, "期望 JSON 数组"));
    };
    let parsed: Vec<OrderItemEvent> = array.iter().cloned().map(OrderItemEvent::new).collect();

    match slot {
        Some((prev_key, prev)) if *prev != parsed => Err(OrderEventError::malformed(
            key,
            format!("与字段 {prev_key} 的取值冲突"),
        )),
        Some(_) => Ok(()),
        None => {
            *slot = Some((key.to_string(), parsed));
            Ok(())
        }
    }
}
