//! EntityMetadataExtractor：把 `EntityType` 描述规范化为 `EntityDescriptor`。

use crate::entity::{EntityType, FieldDef};
use crate::options::GeneratorOptions;
use crate::property::{EntityDescriptor, LogicalDelete, PropertyDescriptor};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("entity {entity} declares more than one identity property: {}", .properties.join(", "))]
    AmbiguousIdentity {
        entity: String,
        properties: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct EntityMetadataExtractor<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> EntityMetadataExtractor<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn extract(&self, ty: &EntityType) -> Result<EntityDescriptor, MetadataError> {
        let table_name = non_empty(ty.table.as_deref()).unwrap_or(&ty.name).to_string();
        let schema_name = non_empty(ty.schema.as_deref())
            .unwrap_or(&self.options.default_schema)
            .to_string();

        // 引用类型视为导航属性，不参与列
        let candidates: Vec<&FieldDef> = ty.fields.iter().filter(|f| f.kind.is_storable()).collect();

        let base_properties = candidates
            .iter()
            .filter(|f| !f.not_stored)
            .map(|f| self.property(f))
            .collect();

        let key_properties = candidates
            .iter()
            .filter(|f| f.key)
            .map(|f| self.property(f))
            .collect();

        let identities: Vec<&FieldDef> = candidates
            .iter()
            .copied()
            .filter(|f| f.key && f.identity)
            .collect();
        if identities.len() > 1 {
            return Err(MetadataError::AmbiguousIdentity {
                entity: ty.name.clone(),
                properties: identities.iter().map(|f| f.name.clone()).collect(),
            });
        }
        let identity_property = identities.first().map(|f| self.property(f));

        let logical_delete = self.logical_delete(ty, &candidates);

        let descriptor = EntityDescriptor {
            schema_name,
            table_name,
            base_properties,
            key_properties,
            identity_property,
            logical_delete,
        };

        tracing::debug!(
            entity = %ty.name,
            table = %descriptor.qualified_table(),
            columns = descriptor.base_properties.len(),
            keys = descriptor.key_properties.len(),
            identity = descriptor.is_identity(),
            logical_delete = descriptor.logical_delete(),
            "extracted entity metadata"
        );

        Ok(descriptor)
    }

    fn property(&self, f: &FieldDef) -> PropertyDescriptor {
        let alias = match non_empty(f.alias.as_deref()) {
            Some(a) => Some(a.to_string()),
            None => {
                let mapped = (self.options.column_mapper)(&f.name);
                (!mapped.is_empty() && mapped != f.name).then_some(mapped)
            }
        };
        PropertyDescriptor::new(f.name.clone(), alias)
    }

    fn logical_delete(&self, ty: &EntityType, candidates: &[&FieldDef]) -> Option<LogicalDelete> {
        for f in candidates.iter().filter(|f| f.status && f.kind.as_enum().is_none()) {
            tracing::warn!(
                entity = %ty.name,
                field = %f.name,
                "status marker on a non-enum field is ignored"
            );
        }

        let status = candidates
            .iter()
            .find(|f| f.status && f.kind.as_enum().is_some())?;
        let enum_type = status.kind.as_enum()?;

        let deleted: Vec<_> = enum_type.deleted_members().collect();
        match deleted.as_slice() {
            [member] => Some(LogicalDelete {
                property: self.property(status),
                value: member.value,
            }),
            [] => {
                tracing::warn!(
                    entity = %ty.name,
                    field = %status.name,
                    enumeration = %enum_type.name,
                    "status enumeration has no deleted member, logical delete disabled"
                );
                None
            }
            _ => {
                tracing::warn!(
                    entity = %ty.name,
                    field = %status.name,
                    enumeration = %enum_type.name,
                    members = deleted.len(),
                    "status enumeration has several deleted members, logical delete disabled"
                );
                None
            }
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
