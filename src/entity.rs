//! Entity：实体类型的静态描述（字段列表 + 声明式标记）。
//!
//! Rust 无运行时反射；每个实体通过 `EntityType` builder（或 `sql_entity!` 宏）
//! 显式登记自己的字段与标记，元数据提取只依赖这里的描述。

/// 字段的存储分类（对应“值类型 / 字符串 / 枚举 / 引用”）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// 标量或可空标量（整数、浮点、时间等）。
    Value,
    /// 字符串类字段。
    Text,
    /// 枚举值类型，携带成员描述。
    Enum(EnumType),
    /// 导航/关联属性，永远不会成为列。
    Reference,
}

impl FieldKind {
    /// 是否可作为列的候选（值类型或字符串类）。
    pub fn is_storable(&self) -> bool {
        !matches!(self, Self::Reference)
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }
}

/// 枚举成员：名称 + 底层数值 + 是否为“已删除”哨兵。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
    pub deleted: bool,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            deleted: false,
        }
    }

    /// 标记为逻辑删除的哨兵值。
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn deleted_members(&self) -> impl Iterator<Item = &EnumMember> {
        self.members.iter().filter(|m| m.deleted)
    }
}

/// 单个字段的声明：名称、分类与标记。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    pub key: bool,
    pub identity: bool,
    pub not_stored: bool,
    pub status: bool,
    /// `stored_as`：物理列名覆盖。
    pub alias: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            key: false,
            identity: false,
            not_stored: false,
            status: false,
            alias: None,
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Value)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn enumeration(name: impl Into<String>, ty: EnumType) -> Self {
        Self::new(name, FieldKind::Enum(ty))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Reference)
    }

    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    /// 数据库生成的主键；identity 总是 key 的一种。
    pub fn identity(mut self) -> Self {
        self.key = true;
        self.identity = true;
        self
    }

    pub fn not_stored(mut self) -> Self {
        self.not_stored = true;
        self
    }

    pub fn status(mut self) -> Self {
        self.status = true;
        self
    }

    pub fn stored_as(mut self, column: impl Into<String>) -> Self {
        self.alias = Some(column.into());
        self
    }
}

/// 实体类型描述：类型名、表/schema 覆盖以及按声明顺序排列的字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub name: String,
    pub table: Option<String>,
    pub schema: Option<String>,
    pub fields: Vec<FieldDef>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            schema: None,
            fields: Vec::new(),
        }
    }

    /// 表名覆盖（对应实体级 `stored_as`）。
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }
}

/// 由宏或手写实现的 trait：提供实体的静态描述。
pub trait Entity {
    fn entity_type() -> EntityType;
}

/// 可作为状态列的枚举：提供成员与哨兵描述。
pub trait StatusEnum {
    fn enum_type() -> EnumType;
}
