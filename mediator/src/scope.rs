use crate::registry::{CommandFn, HandlerRegistry, QueryFn};
use std::any::TypeId;
use std::sync::Arc;

/// 解析作用域（Resolver Scope）
///
/// 调度器在构造时绑定一个作用域，并在自身生命周期内通过它解析处理器；
/// 调度器被丢弃时负责调用 `release` 释放作用域（含错误路径）。
/// - `resolve_*` 缺失返回 `None`，不构成错误；
/// - 实现方应说明单个作用域是否支持并发解析（见 [`RegistryScope`]）。
pub trait ResolverScope: Send + Sync {
    fn resolve_command(&self, key: TypeId) -> Option<CommandFn>;

    fn resolve_query(&self, key: (TypeId, TypeId)) -> Option<QueryFn>;

    /// 释放作用域持有的资源；释放后所有解析都应返回 `None`
    fn release(&mut self);
}

/// 作用域提供方（Scope Provider）
///
/// 任何能够按需开启解析作用域的容器均可作为调度器的构造入参；
/// 调度器只依赖这一窄能力，不依赖具体容器实现。
pub trait ScopeProvider {
    type Scope: ResolverScope;

    fn create_scope(&self) -> Self::Scope;
}

/// 基于 [`HandlerRegistry`] 的作用域实现
///
/// 持有注册表的共享句柄；解析是对冻结后注册表的纯读操作，
/// 因此同一作用域支持并发解析。`release` 后句柄被丢弃，解析恒为 `None`。
pub struct RegistryScope {
    registry: Option<Arc<HandlerRegistry>>,
}

impl ResolverScope for RegistryScope {
    fn resolve_command(&self, key: TypeId) -> Option<CommandFn> {
        self.registry.as_ref().and_then(|r| r.resolve_command(key))
    }

    fn resolve_query(&self, key: (TypeId, TypeId)) -> Option<QueryFn> {
        self.registry.as_ref().and_then(|r| r.resolve_query(key))
    }

    fn release(&mut self) {
        self.registry = None;
    }
}

impl ScopeProvider for Arc<HandlerRegistry> {
    type Scope = RegistryScope;

    fn create_scope(&self) -> RegistryScope {
        RegistryScope {
            registry: Some(self.clone()),
        }
    }
}
