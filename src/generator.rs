//! StatementGenerator：根据缓存的 `EntityDescriptor` 渲染 SELECT/INSERT/UPDATE/DELETE 文本。
//!
//! 构造时执行一次元数据提取，此后所有方法都是描述与参数的纯函数，
//! 同一个实例可以被任意多线程无锁共享。

use crate::entity::{Entity, EntityType};
use crate::filter::{Filter, FilterClauseBuilder};
use crate::metadata::{EntityMetadataExtractor, MetadataError};
use crate::options::{GeneratorOptions, IdentityRetrieval, default_options};
use crate::property::{EntityDescriptor, PropertyDescriptor};
use crate::string_builder::{StringBuilder, quote_ident};
use dyn_clone::DynClone;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{statement} on {table} requires at least one key property")]
    NoKeyProperties {
        table: String,
        statement: StatementKind,
    },
    #[error("INSERT on {table} requires at least one storable property")]
    NoStorableProperties { table: String },
}

/// 语句生成接口：所有渲染逻辑都是基于 `descriptor()` 的默认方法，
/// 包装类型可以只覆盖其中某一条语句。
pub trait SqlGenerator: DynClone + Send + Sync {
    fn descriptor(&self) -> &EntityDescriptor;

    fn identity_retrieval(&self) -> IdentityRetrieval;

    fn select_all(&self) -> String {
        self.select(&[])
    }

    /// 只使用字段名：每个字段渲染为 `= @name`，不关心值。
    fn select(&self, fields: &[&str]) -> String {
        let predicates = FilterClauseBuilder::new(self.descriptor()).predicates(fields);
        render_select(self.descriptor(), predicates, None)
    }

    fn select_top(&self, fields: &[&str], limit: u64) -> String {
        let predicates = FilterClauseBuilder::new(self.descriptor()).predicates(fields);
        render_select(self.descriptor(), predicates, Some(limit))
    }

    /// 按值形态选择谓词（`= @name` / `IS NULL` / `IN @name`）。
    fn select_where(&self, filters: &[Filter]) -> String {
        let predicates = FilterClauseBuilder::new(self.descriptor()).filter_predicates(filters);
        render_select(self.descriptor(), predicates, None)
    }

    fn select_where_top(&self, filters: &[Filter], limit: u64) -> String {
        let predicates = FilterClauseBuilder::new(self.descriptor()).filter_predicates(filters);
        render_select(self.descriptor(), predicates, Some(limit))
    }

    fn insert(&self) -> String {
        render_insert(self.descriptor(), self.identity_retrieval())
    }

    fn update(&self) -> String {
        render_update(self.descriptor())
    }

    fn delete(&self) -> String {
        render_delete(self.descriptor())
    }

    fn try_insert(&self) -> Result<String, GenerateError> {
        if insert_properties(self.descriptor()).is_empty() {
            return Err(GenerateError::NoStorableProperties {
                table: self.descriptor().table_name().to_string(),
            });
        }
        Ok(self.insert())
    }

    fn try_update(&self) -> Result<String, GenerateError> {
        ensure_keyed(self.descriptor(), StatementKind::Update)?;
        Ok(self.update())
    }

    fn try_delete(&self) -> Result<String, GenerateError> {
        ensure_keyed(self.descriptor(), StatementKind::Delete)?;
        Ok(self.delete())
    }
}

dyn_clone::clone_trait_object!(SqlGenerator);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementGenerator {
    descriptor: EntityDescriptor,
    identity_retrieval: IdentityRetrieval,
}

impl StatementGenerator {
    /// 使用全局默认配置提取元数据。
    pub fn new(ty: &EntityType) -> Result<Self, MetadataError> {
        Self::with_options(ty, &default_options())
    }

    pub fn with_options(ty: &EntityType, options: &GeneratorOptions) -> Result<Self, MetadataError> {
        let descriptor = EntityMetadataExtractor::new(options).extract(ty)?;
        Ok(Self::from_descriptor(descriptor, options.identity_retrieval))
    }

    pub fn of<T: Entity>() -> Result<Self, MetadataError> {
        Self::new(&T::entity_type())
    }

    pub fn of_with_options<T: Entity>(options: &GeneratorOptions) -> Result<Self, MetadataError> {
        Self::with_options(&T::entity_type(), options)
    }

    pub fn from_descriptor(descriptor: EntityDescriptor, identity_retrieval: IdentityRetrieval) -> Self {
        Self {
            descriptor,
            identity_retrieval,
        }
    }
}

impl SqlGenerator for StatementGenerator {
    fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    fn identity_retrieval(&self) -> IdentityRetrieval {
        self.identity_retrieval
    }
}

fn projection(p: &PropertyDescriptor, table: &str) -> String {
    if p.has_alias() {
        format!("{} AS {}", p.qualified_column(table), quote_ident(p.name()))
    } else {
        p.qualified_column(table)
    }
}

fn key_predicates(d: &EntityDescriptor) -> Vec<String> {
    d.key_properties()
        .iter()
        .map(|p| p.equality_predicate(d.table_name()))
        .collect()
}

fn ensure_keyed(d: &EntityDescriptor, statement: StatementKind) -> Result<(), GenerateError> {
    if d.key_properties().is_empty() {
        return Err(GenerateError::NoKeyProperties {
            table: d.table_name().to_string(),
            statement,
        });
    }
    Ok(())
}

fn warn_if_unkeyed(d: &EntityDescriptor, statement: StatementKind) {
    if d.key_properties().is_empty() {
        tracing::warn!(
            table = %d.qualified_table(),
            %statement,
            "entity has no key property, WHERE clause is empty"
        );
    }
}

fn insert_properties(d: &EntityDescriptor) -> Vec<&PropertyDescriptor> {
    d.base_properties()
        .iter()
        .filter(|p| d.identity_property().is_none_or(|i| !i.is_named(p.name())))
        .collect()
}

fn render_select(d: &EntityDescriptor, mut predicates: Vec<String>, limit: Option<u64>) -> String {
    let table = d.table_name();
    let mut buf = StringBuilder::new();
    buf.write_leading("SELECT");
    if let Some(n) = limit {
        buf.write_leading(&format!("TOP {n}"));
    }

    let cols: Vec<String> = d
        .base_properties()
        .iter()
        .map(|p| projection(p, table))
        .collect();
    if cols.is_empty() {
        buf.write_leading("*");
    } else {
        buf.write_leading("");
        buf.write_strings(&cols, ", ");
    }

    buf.write_leading("FROM");
    buf.write_leading(&d.qualified_table());
    buf.write_leading("WITH (NOLOCK)");

    if let (Some(status), Some(value)) = (d.status_property(), d.logical_delete_value()) {
        predicates.push(format!("{} != {value}", status.qualified_column(table)));
    }

    if !predicates.is_empty() {
        buf.write_leading("WHERE");
        buf.write_leading("");
        buf.write_strings(&predicates, " AND ");
    }

    buf.into_string()
}

fn render_insert(d: &EntityDescriptor, retrieval: IdentityRetrieval) -> String {
    let table = d.table_name();
    let props = insert_properties(d);
    if props.is_empty() {
        tracing::warn!(table = %d.qualified_table(), "entity has no storable property to insert");
    }

    let mut buf = StringBuilder::new();
    buf.write_leading("INSERT INTO");
    buf.write_leading(&d.qualified_table());

    if !props.is_empty() {
        let cols: Vec<String> = props.iter().map(|p| p.qualified_column(table)).collect();
        buf.write_str(" (");
        buf.write_strings(&cols, ", ");
        buf.write_str(")");
    }

    let identity = d.identity_property();
    if let (Some(id), IdentityRetrieval::OutputInserted) = (identity, retrieval) {
        buf.write_leading("OUTPUT INSERTED.");
        buf.write_str(&quote_ident(id.column_name()));
    }

    if !props.is_empty() {
        let values: Vec<String> = props.iter().map(|p| format!("@{}", p.name())).collect();
        buf.write_str(" VALUES (");
        buf.write_strings(&values, ", ");
        buf.write_str(")");
    }

    if identity.is_some() && retrieval == IdentityRetrieval::ScopeIdentity {
        buf.write_line("DECLARE @NEWID NUMERIC(38, 0)");
        buf.write_line("SET @NEWID = SCOPE_IDENTITY()");
        buf.write_line("SELECT @NEWID");
    }

    buf.into_string()
}

fn render_update(d: &EntityDescriptor) -> String {
    warn_if_unkeyed(d, StatementKind::Update);
    let set: Vec<String> = d
        .base_properties()
        .iter()
        .filter(|p| !d.is_key(p) && !d.is_status(p))
        .map(|p| p.equality_predicate(d.table_name()))
        .collect();

    format!(
        "UPDATE {} SET {} WHERE {}",
        d.qualified_table(),
        set.join(", "),
        key_predicates(d).join(" AND ")
    )
}

fn render_delete(d: &EntityDescriptor) -> String {
    warn_if_unkeyed(d, StatementKind::Delete);
    let keys = key_predicates(d).join(" AND ");

    match (d.status_property(), d.logical_delete_value()) {
        (Some(status), Some(value)) => format!(
            "UPDATE {} SET {} = {value} WHERE {keys}",
            d.qualified_table(),
            status.qualified_column(d.table_name())
        ),
        _ => format!("DELETE FROM {} WHERE {keys}", d.qualified_table()),
    }
}
