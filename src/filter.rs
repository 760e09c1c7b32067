//! FilterClauseBuilder：把请求的过滤字段名转换为 AND 连接的谓词列表。

use crate::property::EntityDescriptor;
use crate::string_builder::quote_ident;

/// 过滤值的形态；只影响谓词写法，不会序列化值本身。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// 单值：`= @name`
    #[default]
    Scalar,
    /// 空值：`IS NULL`
    Null,
    /// 多值：`IN @name`（由数据访问层展开列表参数）
    List,
}

/// 带值形态的过滤字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(field: impl Into<String>, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    pub fn scalar(field: impl Into<String>) -> Self {
        Self::new(field, FilterValue::Scalar)
    }

    pub fn null(field: impl Into<String>) -> Self {
        Self::new(field, FilterValue::Null)
    }

    pub fn list(field: impl Into<String>) -> Self {
        Self::new(field, FilterValue::List)
    }
}

impl From<&str> for Filter {
    fn from(field: &str) -> Self {
        Self::scalar(field)
    }
}

impl From<String> for Filter {
    fn from(field: String) -> Self {
        Self::scalar(field)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilterClauseBuilder<'a> {
    descriptor: &'a EntityDescriptor,
}

impl<'a> FilterClauseBuilder<'a> {
    pub fn new(descriptor: &'a EntityDescriptor) -> Self {
        Self { descriptor }
    }

    /// 名称形式：每个字段都渲染为 `[table].[column] = @name`。
    pub fn predicates<I, S>(&self, fields: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fields
            .into_iter()
            .map(|f| self.predicate(f.as_ref(), FilterValue::Scalar))
            .collect()
    }

    /// 按值形态渲染谓词。
    pub fn filter_predicates<'f>(&self, filters: impl IntoIterator<Item = &'f Filter>) -> Vec<String> {
        filters
            .into_iter()
            .map(|f| self.predicate(&f.field, f.value))
            .collect()
    }

    pub fn predicate(&self, field: &str, value: FilterValue) -> String {
        let table = self.descriptor.table_name();
        // 未登记的字段按原样作为列名与参数名
        let (column, param) = match self.descriptor.find_property(field) {
            Some(p) => (p.qualified_column(table), p.name()),
            None => (format!("{}.{}", quote_ident(table), quote_ident(field)), field),
        };

        match value {
            FilterValue::Scalar => format!("{column} = @{param}"),
            FilterValue::Null => format!("{column} IS NULL"),
            FilterValue::List => format!("{column} IN @{param}"),
        }
    }
}
