//! 元数据值对象：PropertyDescriptor 与 EntityDescriptor。

use crate::string_builder::quote_ident;

/// 一个可存储字段：声明名 + 可选列别名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: String,
    column_alias: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, column_alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            column_alias: column_alias.filter(|a| !a.is_empty()),
        }
    }

    /// 声明名，同时用作 `@name` 参数名。
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_alias(&self) -> Option<&str> {
        self.column_alias.as_deref()
    }

    /// 物理列名：有别名用别名，否则用声明名。
    pub fn column_name(&self) -> &str {
        self.column_alias.as_deref().unwrap_or(&self.name)
    }

    pub fn has_alias(&self) -> bool {
        self.column_alias.is_some()
    }

    /// `[table].[column]`
    pub fn qualified_column(&self, table: &str) -> String {
        format!("{}.{}", quote_ident(table), quote_ident(self.column_name()))
    }

    /// `[table].[column] = @name`
    pub fn equality_predicate(&self, table: &str) -> String {
        format!("{} = @{}", self.qualified_column(table), self.name)
    }

    pub(crate) fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// 逻辑删除：状态列 + 哨兵数值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalDelete {
    pub property: PropertyDescriptor,
    pub value: i64,
}

/// 一个实体的规范化 schema 描述，构建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub(crate) schema_name: String,
    pub(crate) table_name: String,
    pub(crate) base_properties: Vec<PropertyDescriptor>,
    pub(crate) key_properties: Vec<PropertyDescriptor>,
    pub(crate) identity_property: Option<PropertyDescriptor>,
    pub(crate) logical_delete: Option<LogicalDelete>,
}

impl EntityDescriptor {
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn base_properties(&self) -> &[PropertyDescriptor] {
        &self.base_properties
    }

    pub fn key_properties(&self) -> &[PropertyDescriptor] {
        &self.key_properties
    }

    pub fn identity_property(&self) -> Option<&PropertyDescriptor> {
        self.identity_property.as_ref()
    }

    pub fn is_identity(&self) -> bool {
        self.identity_property.is_some()
    }

    pub fn status_property(&self) -> Option<&PropertyDescriptor> {
        self.logical_delete.as_ref().map(|l| &l.property)
    }

    pub fn logical_delete_value(&self) -> Option<i64> {
        self.logical_delete.as_ref().map(|l| l.value)
    }

    pub fn logical_delete(&self) -> bool {
        self.logical_delete.is_some()
    }

    /// `[schema].[table]`
    pub fn qualified_table(&self) -> String {
        format!(
            "{}.{}",
            quote_ident(&self.schema_name),
            quote_ident(&self.table_name)
        )
    }

    pub fn is_key(&self, p: &PropertyDescriptor) -> bool {
        self.key_properties.iter().any(|k| k.is_named(p.name()))
    }

    pub fn is_status(&self, p: &PropertyDescriptor) -> bool {
        self.status_property().is_some_and(|s| s.is_named(p.name()))
    }

    /// 按名称（大小写不敏感）查找 base property。
    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.base_properties.iter().find(|p| p.is_named(name))
    }
}

/// 大小写不敏感的名称比较（Unicode 小写折叠）。
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
