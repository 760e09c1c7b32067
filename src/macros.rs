//! 宏集合：以声明式写法登记实体与状态枚举。
//!
//! 标记直接映射为 builder 方法：`key` / `identity` / `not_stored` / `status` /
//! `stored_as("col")`，枚举成员的 `[deleted]` 映射为 `EnumMember::deleted`。

/// 为实体实现 `Entity`。
///
/// ```ignore
/// struct MyObject { my_object_id: i32, description: String, status: RowStatus }
///
/// halo_space::sql_entity! {
///     impl MyObject {
///         table: "MyTable",
///         fields: [
///             "MyObjectId" => value [identity],
///             "Description" => text [],
///             "Status" => enumeration(RowStatus) [status],
///         ]
///     }
/// }
/// ```
#[macro_export]
macro_rules! sql_entity {
    (
        impl $ty:ident $(as $name:literal)? {
            $(table: $table:literal,)?
            $(schema: $schema:literal,)?
            fields: [
                $(
                    $field:literal => $kind:ident $(($enum_ty:ty))? [ $($marker:ident $(($arg:expr))?),* $(,)? ]
                ),* $(,)?
            ] $(,)?
        }
    ) => {
        impl $crate::entity::Entity for $ty {
            fn entity_type() -> $crate::entity::EntityType {
                let ty = $crate::entity::EntityType::new(
                    $crate::__sql_entity_name!(stringify!($ty) $(, $name)?),
                );
                $( let ty = ty.table($table); )?
                $( let ty = ty.schema($schema); )?
                let fields: Vec<$crate::entity::FieldDef> = vec![
                    $(
                        $crate::__sql_entity_field!($field, $kind $(($enum_ty))?)
                            $( .$marker($($arg)?) )*
                    ),*
                ];
                ty.fields(fields)
            }
        }
    };
}

/// 为无字段枚举实现 `StatusEnum`，成员数值取 `as i64`。
///
/// ```ignore
/// #[derive(Clone, Copy)]
/// enum RowStatus { Active = 1, Deleted = 3 }
///
/// halo_space::sql_status_enum! {
///     impl RowStatus { Active, Deleted [deleted] }
/// }
/// ```
#[macro_export]
macro_rules! sql_status_enum {
    (
        impl $ty:ident {
            $( $variant:ident $([$flag:ident])? ),* $(,)?
        }
    ) => {
        impl $crate::entity::StatusEnum for $ty {
            fn enum_type() -> $crate::entity::EnumType {
                $crate::entity::EnumType::new(stringify!($ty))
                    $(
                        .member(
                            $crate::entity::EnumMember::new(stringify!($variant), $ty::$variant as i64)
                                $( .$flag() )?
                        )
                    )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sql_entity_name {
    ($default:expr) => {
        $default
    };
    ($default:expr, $custom:expr) => {
        $custom
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sql_entity_field {
    ($name:expr, value) => {
        $crate::entity::FieldDef::value($name)
    };
    ($name:expr, text) => {
        $crate::entity::FieldDef::text($name)
    };
    ($name:expr, reference) => {
        $crate::entity::FieldDef::reference($name)
    };
    ($name:expr, enumeration($enum_ty:ty)) => {
        $crate::entity::FieldDef::enumeration(
            $name,
            <$enum_ty as $crate::entity::StatusEnum>::enum_type(),
        )
    };
}
