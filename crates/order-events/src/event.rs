//! 规范事件模型与下游交接抽象
//!
//! 定义归一化产出的规范 `OrderCreated` 值、不透明的订单条目结构，
//! 以及把规范事件交给下游订单逻辑的 `OrderCreatedHandler` trait。
//! 下游如何落库、触发业务规则不在本 crate 范围内。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::OrderEventError;

// ---------------------------------------------------------------------------
// OrderItemEvent — 订单条目（透传结构）
// ---------------------------------------------------------------------------

/// 订单条目
///
/// 上游尚未公布条目的字段 schema，核心按不透明 JSON 值解码并原样转发，
/// 不解释也不校验内部字段。拿到真实 schema 后再替换为强类型结构。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemEvent(serde_json::Value);

impl OrderItemEvent {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for OrderItemEvent {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// OrderCreated — 规范形态的订单创建事件
// ---------------------------------------------------------------------------

/// 规范形态的订单创建事件
///
/// 解码与归一化完成后产出的不可变值：字段私有、只提供只读访问器，
/// 产出后不再变化，要改只能构造新实例。序列化为 camelCase
/// （`orderCode` / `customerCode` / `items`），即下游词汇表的规范拼写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    order_code: i64,
    customer_code: i64,
    items: Vec<OrderItemEvent>,
}

impl OrderCreated {
    pub fn new(order_code: i64, customer_code: i64, items: Vec<OrderItemEvent>) -> Self {
        Self {
            order_code,
            customer_code,
            items,
        }
    }

    /// 上游系统内唯一的订单编号
    pub fn order_code(&self) -> i64 {
        self.order_code
    }

    /// 下单客户编号（线上 `codigoClient` 字段归一化后的规范字段）
    pub fn customer_code(&self) -> i64 {
        self.customer_code
    }

    /// 订单条目，顺序与线上载荷一致
    pub fn items(&self) -> &[OrderItemEvent] {
        &self.items
    }

    pub fn into_items(self) -> Vec<OrderItemEvent> {
        self.items
    }
}

// ---------------------------------------------------------------------------
// OrderCreatedHandler trait — 下游交接抽象
// ---------------------------------------------------------------------------

/// 规范事件的下游处理器抽象
///
/// 消费循环把解码归一化后的事件交给此 trait 的实现，之后的落库、
/// 业务规则、通知都发生在实现方。核心只定义交接的形状与时机：
/// 每条入站载荷最多调用一次，事件按值传入，处理器拿到的是独占副本。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderCreatedHandler: Send + Sync {
    async fn on_order_created(&self, event: OrderCreated) -> Result<(), OrderEventError>;
}
