use crate::{
    command::Command, command_handler::CommandHandler, context::DispatchContext, error::Error,
    query::Query, query_handler::QueryHandler,
};
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxAnySend = Box<dyn Any + Send>;

pub type CommandFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>>;

/// 命令处理器的类型擦除形态：入参为装箱后的命令与调度上下文
pub type CommandFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a DispatchContext) -> CommandFuture<'a> + Send + Sync>;

pub type QueryFuture<'a> =
    Pin<Box<dyn Future<Output = Result<BoxAnySend, Error>> + Send + 'a>>;

/// 查询处理器的类型擦除形态：结果同样以装箱形式返回，由调度端还原
pub type QueryFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a DispatchContext) -> QueryFuture<'a> + Send + Sync>;

/// 处理器注册表（Handler Registry）
///
/// 维护“命令静态身份 -> 唯一处理器”的映射：
/// - 命令以 `TypeId` 为键；查询以 `(查询 TypeId, 结果 TypeId)` 复合键，
///   避免同一查询类型按不同结果类型注册时互相冲突；
/// - 同一键重复注册会被拒绝并返回 `AlreadyRegistered*` 错误；
/// - 约定“先注册、后冻结”：全部注册应在创建首个解析作用域之前完成，
///   此后注册表只读，并发解析因此天然安全。
pub struct HandlerRegistry {
    commands: DashMap<TypeId, (&'static str, CommandFn)>,
    queries: DashMap<(TypeId, TypeId), (&'static str, QueryFn)>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self {
            commands: DashMap::new(),
            queries: DashMap::new(),
        }
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器
    pub fn register_command<C, H>(&self, handler: Arc<H>) -> Result<(), Error>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let key = TypeId::of::<C>();

        let f: CommandFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_cmd, ctx| {
                let handler = handler.clone();

                Box::pin(async move {
                    // 正常情况下 downcast 不会失败（键与闭包同一泛型 C）；
                    // 失败说明注册表内容与键不一致，按“未找到处理器”上报
                    match boxed_cmd.downcast::<C>() {
                        Ok(cmd) => handler.handle(ctx, *cmd).await,
                        Err(_) => Err(Error::HandlerNotFound(type_name::<C>())),
                    }
                })
            })
        };

        if self.commands.contains_key(&key) {
            return Err(Error::AlreadyRegisteredCommand { command: C::NAME });
        }

        self.commands.insert(key, (C::NAME, f));

        Ok(())
    }

    /// 注册查询处理器
    pub fn register_query<Q, H>(&self, handler: Arc<H>) -> Result<(), Error>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let key = (TypeId::of::<Q>(), TypeId::of::<Q::Output>());

        let f: QueryFn = {
            let handler = handler.clone();

            Arc::new(move |boxed_q, ctx| {
                let handler = handler.clone();

                Box::pin(async move {
                    match boxed_q.downcast::<Q>() {
                        Ok(q) => {
                            let out = handler.handle(ctx, *q).await?;
                            Ok(Box::new(out) as BoxAnySend)
                        }
                        Err(_) => Err(Error::HandlerNotFound(type_name::<Q>())),
                    }
                })
            })
        };

        if self.queries.contains_key(&key) {
            return Err(Error::AlreadyRegisteredQuery {
                query: Q::NAME,
                result: type_name::<Q::Output>(),
            });
        }

        self.queries.insert(key, (Q::NAME, f));

        Ok(())
    }

    /// 解析命令处理器；缺失是一种正常结果，不构成错误
    pub fn resolve_command(&self, key: TypeId) -> Option<CommandFn> {
        self.commands.get(&key).map(|e| e.value().1.clone())
    }

    /// 解析查询处理器；缺失是一种正常结果，不构成错误
    pub fn resolve_query(&self, key: (TypeId, TypeId)) -> Option<QueryFn> {
        self.queries.get(&key).map(|e| e.value().1.clone())
    }

    /// 获取已注册的命令名列表（只读视图）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.commands.iter().map(|e| e.value().0).collect()
    }

    /// 获取已注册的查询名列表（只读视图）
    pub fn registered_queries(&self) -> Vec<&'static str> {
        self.queries.iter().map(|e| e.value().0).collect()
    }

    /// 当前绑定总数（命令 + 查询）
    pub fn binding_count(&self) -> usize {
        self.commands.len() + self.queries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mediator::Mediator;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Ping;

    impl Command for Ping {
        const NAME: &'static str = "Ping";
    }

    struct PingHandler;

    #[async_trait]
    impl CommandHandler<Ping> for PingHandler {
        async fn handle(&self, _ctx: &DispatchContext, _cmd: Ping) -> Result<(), Error> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Get;

    impl Query for Get {
        const NAME: &'static str = "Get";
        type Output = usize;
    }

    struct GetHandler;

    #[async_trait]
    impl QueryHandler<Get> for GetHandler {
        async fn handle(&self, _ctx: &DispatchContext, _q: Get) -> Result<usize, Error> {
            Ok(1)
        }
    }

    #[test]
    fn duplicate_command_registration_is_rejected() {
        let registry = HandlerRegistry::new();
        registry
            .register_command::<Ping, _>(Arc::new(PingHandler))
            .unwrap();

        let err = registry
            .register_command::<Ping, _>(Arc::new(PingHandler))
            .unwrap_err();
        match err {
            Error::AlreadyRegisteredCommand { command } => assert_eq!(command, "Ping"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(registry.binding_count(), 1);
    }

    #[test]
    fn duplicate_query_registration_is_rejected() {
        let registry = HandlerRegistry::new();
        registry
            .register_query::<Get, _>(Arc::new(GetHandler))
            .unwrap();

        let err = registry
            .register_query::<Get, _>(Arc::new(GetHandler))
            .unwrap_err();
        match err {
            Error::AlreadyRegisteredQuery { query, result } => {
                assert_eq!(query, "Get");
                assert!(result.contains("usize"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn registered_names_are_listed() {
        let registry = HandlerRegistry::new();
        registry
            .register_command::<Ping, _>(Arc::new(PingHandler))
            .unwrap();
        registry
            .register_query::<Get, _>(Arc::new(GetHandler))
            .unwrap();

        assert_eq!(registry.registered_commands(), vec!["Ping"]);
        assert_eq!(registry.registered_queries(), vec!["Get"]);
        assert_eq!(registry.binding_count(), 2);
    }

    #[test]
    fn missing_entry_resolves_to_none() {
        let registry = HandlerRegistry::new();
        assert!(registry.resolve_command(TypeId::of::<Ping>()).is_none());
        assert!(
            registry
                .resolve_query((TypeId::of::<Get>(), TypeId::of::<usize>()))
                .is_none()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn inconsistent_query_entry_reports_handler_not_found() {
        // 手动插入一个错误的条目：键是 (Get, usize)，但闭包返回 String
        let registry = HandlerRegistry::new();
        let f: QueryFn = Arc::new(|_boxed_q, _ctx| {
            Box::pin(async move { Ok(Box::new("wrong".to_string()) as BoxAnySend) })
        });
        registry.queries.insert(
            (TypeId::of::<Get>(), TypeId::of::<usize>()),
            (Get::NAME, f),
        );

        let mediator = Mediator::new(&Arc::new(registry));
        let ctx = DispatchContext::default();
        let err = mediator.query(&ctx, Get).await.unwrap_err();
        match err {
            Error::HandlerNotFound(name) => assert!(name.contains("Get")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
