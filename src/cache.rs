//! GeneratorCache：按实体类型缓存生成器，每个类型只提取一次元数据。

use crate::entity::Entity;
use crate::generator::StatementGenerator;
use crate::metadata::MetadataError;
use crate::options::{GeneratorOptions, default_options};
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Debug, Default)]
pub struct GeneratorCache {
    options: Option<GeneratorOptions>,
    entries: Mutex<HashMap<TypeId, Arc<StatementGenerator>>>,
}

impl GeneratorCache {
    /// 未指定配置时，首次构造某个类型的生成器会读取当时的全局默认配置。
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            options: Some(options),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// 获取（或首次构造）`T` 的生成器。提取失败不会被缓存。
    pub fn get<T: Entity + 'static>(&self) -> Result<Arc<StatementGenerator>, MetadataError> {
        let key = TypeId::of::<T>();
        // 持锁构造，保证同一类型只初始化一次
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(g) = entries.get(&key) {
            tracing::trace!(entity = type_name::<T>(), "generator cache hit");
            return Ok(g.clone());
        }

        let generator = match &self.options {
            Some(options) => StatementGenerator::of_with_options::<T>(options)?,
            None => StatementGenerator::of_with_options::<T>(&default_options())?,
        };
        let generator = Arc::new(generator);
        entries.insert(key, generator.clone());
        Ok(generator)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

static GLOBAL_CACHE: OnceLock<GeneratorCache> = OnceLock::new();

/// 进程级缓存。
pub fn global_cache() -> &'static GeneratorCache {
    GLOBAL_CACHE.get_or_init(GeneratorCache::new)
}

/// 从进程级缓存获取 `T` 的生成器。
pub fn generator_for<T: Entity + 'static>() -> Result<Arc<StatementGenerator>, MetadataError> {
    global_cache().get::<T>()
}
