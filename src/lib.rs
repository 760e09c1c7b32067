//! halo-sql-generator：根据实体元数据生成参数化 SQL 语句文本（只生成，不执行）。

pub mod cache;
#[cfg(test)]
mod cache_tests;
pub mod column_mapper;
pub mod entity;
pub mod filter;
#[cfg(test)]
mod filter_tests;
pub mod generator;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod metadata;
pub mod options;
pub mod property;
pub mod string_builder;

pub use crate::cache::{GeneratorCache, generator_for, global_cache};
pub use crate::column_mapper::{
    ColumnMapperFunc, identity_mapper, kebab_case_mapper, prefix_mapper, snake_case_mapper,
    suffix_mapper, upper_case_mapper,
};
pub use crate::entity::{Entity, EntityType, EnumMember, EnumType, FieldDef, FieldKind, StatusEnum};
pub use crate::filter::{Filter, FilterClauseBuilder, FilterValue};
pub use crate::generator::{GenerateError, SqlGenerator, StatementGenerator, StatementKind};
pub use crate::metadata::{EntityMetadataExtractor, MetadataError};
pub use crate::options::{
    DEFAULT_SCHEMA, DefaultOptionsGuard, GeneratorOptions, IdentityRetrieval, default_options,
    set_default_options, set_default_options_scoped,
};
pub use crate::property::{EntityDescriptor, LogicalDelete, PropertyDescriptor};
pub use crate::string_builder::quote_ident;

/// 推荐的便捷命名空间：允许 `use halo_space::sqlgen::{...}` 形式导入。
pub mod sqlgen {
    pub use crate::*;
}
