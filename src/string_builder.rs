//! 字符串拼接工具与标识符的方括号 quote。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// 另起一行写入（用于多语句批次）。
    pub(crate) fn write_line(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        self.buf.push_str(s);
    }

    /// 以 `sep` 连接非空字符串。
    pub(crate) fn write_strings(&mut self, items: &[String], sep: &str) {
        let mut first_added = false;
        for s in items {
            if s.is_empty() {
                continue;
            }
            if first_added {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s);
            first_added = true;
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

/// 用方括号 quote 标识符；`]` 转义为 `]]`。
pub fn quote_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('[');
    for c in name.chars() {
        if c == ']' {
            out.push(']');
        }
        out.push(c);
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::{StringBuilder, quote_ident};
    use pretty_assertions::assert_eq;

    #[test]
    fn quote_ident_brackets_and_escapes() {
        assert_eq!(quote_ident("MyTable"), "[MyTable]");
        assert_eq!(quote_ident("odd]name"), "[odd]]name]");
    }

    #[test]
    fn write_strings_skips_empty_items() {
        let mut buf = StringBuilder::new();
        buf.write_leading("WHERE");
        buf.write_leading("");
        buf.write_strings(
            &["a = @a".to_string(), String::new(), "b = @b".to_string()],
            " AND ",
        );
        assert_eq!(buf.into_string(), "WHERE a = @a AND b = @b");
    }
}
