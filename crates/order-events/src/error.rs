//! 统一错误处理模块
//!
//! 定义解码与归一化管道的错误分类，使用 thiserror 提供良好的错误信息。
//! 两类错误都只影响单条载荷：结构非法属于载荷本身的问题，字段映射未知
//! 属于部署/版本问题，核心不做任何恢复，重试与死信路由由调用方决定。

use thiserror::Error;

/// 订单事件处理错误
#[derive(Debug, Error)]
pub enum OrderEventError {
    /// 载荷结构不符合预期 schema：缺少必填字段、字段类型不对、条目列表非数组等。
    /// `field` 尽可能指向出问题的线上字段名。
    #[error("事件结构非法: 字段 {field} - {reason}")]
    MalformedEvent { field: String, reason: String },

    /// 线上字段名在当前映射表中没有对应的规范字段（schema 漂移）。
    /// 生产方改名而映射表未同步更新时出现，需要发版修正而非重试。
    #[error("字段无法映射到规范名称: {field}")]
    UnknownFieldMapping { field: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, OrderEventError>;

impl OrderEventError {
    /// 构造结构非法错误的便捷方法
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedEvent {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedEvent { .. } => "MALFORMED_EVENT",
            Self::UnknownFieldMapping { .. } => "UNKNOWN_FIELD_MAPPING",
        }
    }

    /// 是否为可重试错误
    ///
    /// 两类错误都与单条载荷或映射表版本绑定，重试同一条消息必然得到
    /// 相同结果，因此一律不可重试。
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// 出问题的字段名
    pub fn field(&self) -> &str {
        match self {
            Self::MalformedEvent { field, .. } => field,
            Self::UnknownFieldMapping { field } => field,
        }
    }
}
