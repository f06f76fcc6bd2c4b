//! 缓存层
//!
//! 提供统一的 `ObjectCache` 抽象，后端实现通过 `declare_object_cache_plugin!`
//! 宏在进程启动时注册到插件表。目前内置 Moka（进程内）和 Redis 两种后端，
//! 主要用于 JWT 中间件的 token → 员工 解析缓存。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端
///
/// 要求实现类型提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $ty:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $ty::new()
                                .map_err($crate::errors::HRSystemError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
