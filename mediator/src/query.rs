/// 查询命令（Query）
///
/// 表达需要返回结果的请求。
/// - 与 [`Command`](crate::command::Command) 互斥：一个类型应只实现其中之一；
/// - 结果类型 `Output` 在定义处与查询绑定，构成静态身份的一部分：
///   注册与路由均以 `(查询类型, 结果类型)` 复合键进行，
///   同一查询类型可按不同结果类型分别注册。
pub trait Query: Send + Sync + 'static {
    /// 查询的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 查询返回的结果类型
    type Output: Send + 'static;
}
