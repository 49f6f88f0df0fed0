#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 按命令的完整类型名无法找到对应处理器。
    /// 该错误属于启动/注册期缺陷，调用方不应退避重试。
    #[error("Command executor interface for command \"{0}\" not found")]
    HandlerNotFound(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("handler already registered: query={query}, result={result}")]
    AlreadyRegisteredQuery {
        query: &'static str,
        result: &'static str,
    },

    /// 处理器内部失败的透传载体：调度器不捕获、不包装、不重试，
    /// 调用方可通过 `downcast_ref` 还原原始错误类型。
    #[error(transparent)]
    Execution(#[from] anyhow::Error),
}
