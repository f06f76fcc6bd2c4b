use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

/// 对象缓存抽象
///
/// 值统一以字符串（JSON）存取，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 单位为秒（0 表示使用后端默认 TTL）
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除指定键
    async fn remove(&self, key: &str);
}
