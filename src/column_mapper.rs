//! Column mapper：把实体属性名映射为物理列名（仅作用于没有显式别名的属性）。

use std::sync::{Arc, OnceLock};

/// 列名映射函数类型。
pub type ColumnMapperFunc = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;

fn identity_impl(s: &str) -> String {
    s.to_string()
}

static IDENTITY_MAPPER: OnceLock<ColumnMapperFunc> = OnceLock::new();

/// 恒等 mapper：列名就是属性名（默认行为）。
pub fn identity_mapper() -> ColumnMapperFunc {
    IDENTITY_MAPPER
        .get_or_init(|| Arc::new(identity_impl))
        .clone()
}

fn convert_with_separator(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut prev: Option<char> = None;
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();

        if c.is_ascii_uppercase() {
            if let Some(p) = prev {
                let prev_is_lower_or_digit = p.is_ascii_lowercase() || p.is_ascii_digit();
                let next_is_lower = next.is_some_and(|n| n.is_ascii_lowercase());

                if prev_is_lower_or_digit || (p.is_ascii_uppercase() && next_is_lower) {
                    out.push(sep);
                }
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }

        prev = Some(c);
    }

    out
}

/// `MyObjectId` -> `my_object_id`
pub fn snake_case_mapper(s: &str) -> String {
    convert_with_separator(s, '_')
}

/// `MyObjectId` -> `my-object-id`
pub fn kebab_case_mapper(s: &str) -> String {
    convert_with_separator(s, '-')
}

pub fn upper_case_mapper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// 返回一个在属性名前添加固定前缀的 mapper。
pub fn prefix_mapper(prefix: &'static str) -> ColumnMapperFunc {
    Arc::new(move |name| format!("{prefix}{name}"))
}

/// 返回一个在属性名后添加固定后缀的 mapper。
pub fn suffix_mapper(suffix: &'static str) -> ColumnMapperFunc {
    Arc::new(move |name| format!("{name}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn camel_case_helpers_work() {
        assert_eq!(snake_case_mapper("MyObjectId"), "my_object_id");
        assert_eq!(kebab_case_mapper("MyObjectId"), "my-object-id");
        assert_eq!(snake_case_mapper("HTTPStatus"), "http_status");
    }

    #[test]
    fn upper_case_mapper_changes_case() {
        assert_eq!(upper_case_mapper("Description"), "DESCRIPTION");
    }

    #[test]
    fn prefix_suffix_mappers_apply() {
        let prefix = prefix_mapper("col_");
        let suffix = suffix_mapper("_col");
        assert_eq!(prefix("Description"), "col_Description");
        assert_eq!(suffix("Description"), "Description_col");
        assert_eq!(identity_mapper()("Description"), "Description");
    }
}
