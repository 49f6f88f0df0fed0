use crate::{
    command::Command, context::DispatchContext, error::Error, query::Query,
    scope::{ResolverScope, ScopeProvider},
};
use std::any::{TypeId, type_name};

/// 进程内调度器（Mediator）
///
/// 无状态的路由逻辑：按命令的具体类型定位唯一处理器并调用之。
/// - 构造时从 [`ScopeProvider`] 开启一个解析作用域并持有至自身被丢弃，
///   丢弃时释放作用域（所有退出路径一致）；
/// - 解析是对“先注册、后冻结”注册表的纯读操作，基于
///   [`RegistryScope`](crate::scope::RegistryScope) 的调度器支持同一实例并发调用；
///   若注入的自定义作用域不可重入，应由其实现方自行声明使用约束；
/// - 解析失败立即同步返回错误，不发生任何部分调用；
///   处理器内部的失败原样透传，不捕获、不包装、不重试。
///
/// 两个入口对应两种命令形态，由调用方按静态类型选择：
/// - [`dispatch`](Mediator::dispatch)：即发即弃命令，无返回数据；
/// - [`query`](Mediator::query)：查询命令，返回 `Q::Output`。
pub struct Mediator<S>
where
    S: ResolverScope,
{
    scope: S,
}

impl<S> Mediator<S>
where
    S: ResolverScope,
{
    /// 构造调度器并绑定一个新的解析作用域
    pub fn new<P>(provider: &P) -> Self
    where
        P: ScopeProvider<Scope = S>,
    {
        Self {
            scope: provider.create_scope(),
        }
    }

    /// 分发即发即弃命令到其唯一处理器
    ///
    /// 未注册处理器时返回 [`Error::HandlerNotFound`]，
    /// 携带命令的完整类型名。
    pub async fn dispatch<C>(&self, ctx: &DispatchContext, cmd: C) -> Result<(), Error>
    where
        C: Command,
    {
        let Some(f) = self.scope.resolve_command(TypeId::of::<C>()) else {
            return Err(Error::HandlerNotFound(type_name::<C>()));
        };

        (f)(Box::new(cmd), ctx).await
    }

    /// 分发查询命令到其唯一处理器，原样返回处理器产出的结果
    pub async fn query<Q>(&self, ctx: &DispatchContext, q: Q) -> Result<Q::Output, Error>
    where
        Q: Query,
    {
        let key = (TypeId::of::<Q>(), TypeId::of::<Q::Output>());
        let Some(f) = self.scope.resolve_query(key) else {
            return Err(Error::HandlerNotFound(type_name::<Q>()));
        };

        let out = (f)(Box::new(q), ctx).await?;

        // 对不一致注册表的防御性复核：产出类型与声明不符按“未找到处理器”上报
        match out.downcast::<Q::Output>() {
            Ok(v) => Ok(*v),
            Err(_) => Err(Error::HandlerNotFound(type_name::<Q>())),
        }
    }
}

impl<S> Drop for Mediator<S>
where
    S: ResolverScope,
{
    fn drop(&mut self) {
        self.scope.release();
    }
}
