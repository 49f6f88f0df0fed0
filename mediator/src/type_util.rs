use crate::error::Error;

/// 提取类型全名中的基础名：剥离泛型参数与模块路径
///
/// 例如 `"a::b::Foo<x::Y>"` -> `"Foo"`。
/// 入参为空字符串时返回 [`Error::InvalidArgument`]。
pub fn base_name(full_name: &str) -> Result<&str, Error> {
    if full_name.is_empty() {
        return Err(Error::InvalidArgument("type name must not be empty"));
    }

    let without_generics = full_name.split('<').next().unwrap_or(full_name);
    Ok(without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics))
}
