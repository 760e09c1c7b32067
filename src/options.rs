//! 生成器配置：默认 schema、identity 取回方式与列名 mapper。

use crate::column_mapper::{ColumnMapperFunc, identity_mapper};
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// 默认 schema 名。
pub const DEFAULT_SCHEMA: &str = "dbo";

/// INSERT 之后如何取回数据库生成的 identity 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdentityRetrieval {
    /// `DECLARE @NEWID ...; SET @NEWID = SCOPE_IDENTITY(); SELECT @NEWID`
    #[default]
    ScopeIdentity,
    /// `OUTPUT INSERTED.[col]`
    OutputInserted,
    /// 不追加取回步骤。
    Omit,
}

impl fmt::Display for IdentityRetrieval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ScopeIdentity => "ScopeIdentity",
            Self::OutputInserted => "OutputInserted",
            Self::Omit => "Omit",
        };
        f.write_str(s)
    }
}

#[derive(Clone)]
pub struct GeneratorOptions {
    pub default_schema: String,
    pub identity_retrieval: IdentityRetrieval,
    pub column_mapper: ColumnMapperFunc,
}

impl fmt::Debug for GeneratorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // mapper 无法 Debug
        f.debug_struct("GeneratorOptions")
            .field("default_schema", &self.default_schema)
            .field("identity_retrieval", &self.identity_retrieval)
            .finish()
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            default_schema: DEFAULT_SCHEMA.to_string(),
            identity_retrieval: IdentityRetrieval::default(),
            column_mapper: identity_mapper(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }

    pub fn with_identity_retrieval(mut self, retrieval: IdentityRetrieval) -> Self {
        self.identity_retrieval = retrieval;
        self
    }

    pub fn with_column_mapper(mut self, mapper: ColumnMapperFunc) -> Self {
        self.column_mapper = mapper;
        self
    }
}

static DEFAULT_OPTIONS: OnceLock<Mutex<GeneratorOptions>> = OnceLock::new();
static DEFAULT_OPTIONS_LOCK: Mutex<()> = Mutex::new(());

fn options_cell() -> &'static Mutex<GeneratorOptions> {
    DEFAULT_OPTIONS.get_or_init(|| Mutex::new(GeneratorOptions::default()))
}

/// 获取当前全局默认配置。
pub fn default_options() -> GeneratorOptions {
    options_cell()
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// 设置全局默认配置，返回旧值。
pub fn set_default_options(options: GeneratorOptions) -> GeneratorOptions {
    let mut g = options_cell().lock().unwrap_or_else(|e| e.into_inner());
    std::mem::replace(&mut *g, options)
}

/// 修改全局默认配置的 RAII guard（会持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultOptionsGuard {
    _lock: MutexGuard<'static, ()>,
    old: GeneratorOptions,
}

impl Drop for DefaultOptionsGuard {
    fn drop(&mut self) {
        let _ = set_default_options(self.old.clone());
    }
}

/// 在一个作用域内临时设置默认配置，并保证退出作用域后自动恢复。
pub fn set_default_options_scoped(options: GeneratorOptions) -> DefaultOptionsGuard {
    let lock = DEFAULT_OPTIONS_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_options(options);
    DefaultOptionsGuard { _lock: lock, old }
}
