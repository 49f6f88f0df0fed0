/// 即发即弃命令（Command）
///
/// 表达“意图”的写操作请求，不向调用方返回业务数据。
/// - 与 [`Query`](crate::query::Query) 互斥：一个类型应只实现其中之一；
/// - 命令的静态身份（具体类型）在定义处即固定，调度按该身份路由；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateUser`、`CloseOrder`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于重复注册诊断与注册表清单。
///   路由本身不依赖该名称（按 `TypeId` 路由），避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;
}
