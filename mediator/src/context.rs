use bon::Builder;
use serde::{Deserialize, Serialize};

/// 调度上下文（Dispatch Context）
///
/// 承载一次调度（命令/查询）随行的横切信息，例如：
/// - 关联追踪 `correlation_id` 与因果链 `causation_id`；
/// - 幂等键（`idempotency_key`）：用于在上层实现请求幂等（如重复提交保护）。
///
/// 调度器只负责把上下文原样传入处理器，从不读取或解释其中任何字段。
///
/// 典型用法：
/// ```rust
/// use mediator::context::DispatchContext;
///
/// let ctx = DispatchContext::builder()
///     .maybe_correlation_id(Some("cor-123".into()))
///     .maybe_causation_id(Some("cau-abc".into()))
///     .maybe_idempotency_key(Some("idem-xyz".into()))
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// ```
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct DispatchContext {
    /// 关联ID
    correlation_id: Option<String>,
    /// 因果ID
    causation_id: Option<String>,
    /// 幂等键（可选）：为空则由上层决定是否参与幂等
    idempotency_key: Option<String>,
}

impl DispatchContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }
}
