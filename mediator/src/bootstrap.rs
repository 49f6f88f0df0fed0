use crate::{error::Error, registry::HandlerRegistry};

/// 处理器模块（Handler Module）
///
/// 一组处理器的显式注册单元：每个模块自述其包含的处理器，
/// 在 [`register`](HandlerModule::register) 中逐一写入注册表。
/// 以显式注册取代运行期反射扫描，注册只在启动时进行一次。
pub trait HandlerModule: Send + Sync {
    fn register(&self, registry: &HandlerRegistry) -> Result<(), Error>;
}

/// 以给定模块集填充注册表
///
/// 逐模块调用其 `register`；任一模块失败（如重复注册）立即返回错误。
/// 应在创建首个解析作用域之前完成，此后注册表视为只读。
pub fn populate(
    registry: &HandlerRegistry,
    modules: &[&dyn HandlerModule],
) -> Result<(), Error> {
    for module in modules {
        module.register(registry)?;
    }

    Ok(())
}
