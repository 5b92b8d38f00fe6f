//! 线上字段名到规范字段的映射表
//!
//! 生产方与消费方的词汇存在已知漂移：线上的订单载荷用葡语拼写
//! （`codigoPedido` / `codigoClient` / `itens`），而下游统一使用
//! `orderCode` / `customerCode` / `items`。其中客户编号的线上拼写
//! `codigoClient` 与语义（cliente/customer）并不一致，历史上曾因此
//! 出现过把客户编号写进错误字段的事故。
//!
//! 因此映射关系收敛为一张编译期固定、带版本号的表：解码与归一化都
//! 只通过本表解析字段名。生产方改名而映射表未同步更新时，管道显式
//! 失败（`UnknownFieldMapping`），而不是把值悄悄塞进猜测的字段。

use std::fmt;

/// 映射表版本号，新增或删除线上拼写时递增
pub const TABLE_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// CanonicalField — 规范字段枚举
// ---------------------------------------------------------------------------

/// 规范事件的字段集合
///
/// 每个规范字段持有一组已收录的线上拼写，表中第一个拼写为主拼写，
/// 报缺字段错误时引用主拼写，便于与上游排查时直接对照线上载荷。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    OrderCode,
    CustomerCode,
    Items,
}

impl CanonicalField {
    /// 全部规范字段，三者都是必填
    pub fn all() -> [CanonicalField; 3] {
        [Self::OrderCode, Self::CustomerCode, Self::Items]
    }

    /// 规范名称（下游词汇，也是规范事件序列化后的字段名）
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::OrderCode => "orderCode",
            Self::CustomerCode => "customerCode",
            Self::Items => "items",
        }
    }

    /// 已收录的线上拼写
    ///
    /// 规范名称本身也收录在内，使已经是规范形态的载荷可以原样再过一遍
    /// 管道而结果不变（幂等）。`clientCode` 收录的是上游文档中出现过的
    /// 英语化拼写，与 `codigoClient` 指向同一语义字段。
    pub fn wire_names(&self) -> &'static [&'static str] {
        match self {
            Self::OrderCode => &["codigoPedido", "orderCode"],
            Self::CustomerCode => &["codigoClient", "codigoCliente", "clientCode", "customerCode"],
            Self::Items => &["itens", "items"],
        }
    }

    /// 主拼写（线上实际发送的拼写），用于错误信息
    pub fn primary_wire_name(&self) -> &'static str {
        self.wire_names()[0]
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

// ---------------------------------------------------------------------------
// resolve — 拼写解析
// ---------------------------------------------------------------------------

/// 将线上字段名解析为规范字段
///
/// 匹配区分大小写：拼写差异正是本表要显式管理的对象，大小写容错
/// 会把未收录的漂移悄悄放进来。未收录的拼写返回 `None`，由归一化器
/// 判定为 schema 漂移。
pub fn resolve(wire_key: &str) -> Option<CanonicalField> {
    CanonicalField::all()
        .into_iter()
        .find(|field| field.wire_names().contains(&wire_key))
}
