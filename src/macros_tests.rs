#[cfg(test)]
mod tests {
    use crate::{Entity, EnumMember, FieldKind, StatusEnum};
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy)]
    #[allow(dead_code)]
    enum TicketState {
        New = 10,
        Closed = 20,
        Purged = 99,
    }

    crate::sql_status_enum! {
        impl TicketState {
            New,
            Closed,
            Purged [deleted],
        }
    }

    #[allow(dead_code)]
    struct Ticket {
        id: i64,
        title: String,
        state: TicketState,
    }

    crate::sql_entity! {
        impl Ticket {
            table: "Tickets",
            schema: "support",
            fields: [
                "Id" => value [identity],
                "Title" => text [stored_as("title")],
                "State" => enumeration(TicketState) [status],
                "Draft" => text [not_stored],
                "Owner" => reference [],
            ],
        }
    }

    #[test]
    fn status_enum_macro_uses_discriminants() {
        let ty = TicketState::enum_type();
        assert_eq!(ty.name, "TicketState");
        assert_eq!(
            ty.members,
            [
                EnumMember::new("New", 10),
                EnumMember::new("Closed", 20),
                EnumMember::new("Purged", 99).deleted(),
            ]
        );
    }

    #[test]
    fn entity_macro_maps_markers() {
        let ty = Ticket::entity_type();
        assert_eq!(ty.name, "Ticket");
        assert_eq!(ty.table.as_deref(), Some("Tickets"));
        assert_eq!(ty.schema.as_deref(), Some("support"));
        assert_eq!(ty.fields.len(), 5);

        assert!(ty.fields[0].identity && ty.fields[0].key);
        assert_eq!(ty.fields[1].alias.as_deref(), Some("title"));
        assert!(ty.fields[2].status);
        assert_eq!(
            ty.fields[2].kind,
            FieldKind::Enum(TicketState::enum_type())
        );
        assert!(ty.fields[3].not_stored);
        assert_eq!(ty.fields[4].kind, FieldKind::Reference);
    }
}
