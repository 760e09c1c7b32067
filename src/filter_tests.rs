#[cfg(test)]
mod tests {
    use crate::{
        EntityMetadataExtractor, EntityType, FieldDef, Filter, FilterClauseBuilder, FilterValue,
        GeneratorOptions,
    };
    use pretty_assertions::assert_eq;

    fn descriptor() -> crate::EntityDescriptor {
        let ty = EntityType::new("Person").table("People").fields([
            FieldDef::value("PersonId").key(),
            FieldDef::text("FirstName").stored_as("first_name"),
            FieldDef::value("BirthDate"),
        ]);
        EntityMetadataExtractor::new(&GeneratorOptions::default())
            .extract(&ty)
            .unwrap()
    }

    #[test]
    fn parameter_marker_uses_property_name_not_alias() {
        let d = descriptor();
        let fb = FilterClauseBuilder::new(&d);
        assert_eq!(
            fb.predicates(["firstname"]),
            ["[People].[first_name] = @FirstName"]
        );
    }

    #[test]
    fn predicates_keep_requested_order() {
        let d = descriptor();
        let fb = FilterClauseBuilder::new(&d);
        assert_eq!(
            fb.predicates(vec!["BirthDate".to_string(), "PersonId".to_string()]),
            [
                "[People].[BirthDate] = @BirthDate",
                "[People].[PersonId] = @PersonId"
            ]
        );
        assert!(fb.predicates(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn unmatched_names_are_rendered_verbatim() {
        let d = descriptor();
        let fb = FilterClauseBuilder::new(&d);
        assert_eq!(
            fb.predicate("nickName", FilterValue::Scalar),
            "[People].[nickName] = @nickName"
        );
    }

    #[test]
    fn value_shapes_select_the_operator() {
        let d = descriptor();
        let fb = FilterClauseBuilder::new(&d);
        let filters = [
            Filter::null("BirthDate"),
            Filter::list("FirstName"),
            Filter::from("PersonId"),
        ];
        assert_eq!(
            fb.filter_predicates(&filters),
            [
                "[People].[BirthDate] IS NULL",
                "[People].[first_name] IN @FirstName",
                "[People].[PersonId] = @PersonId"
            ]
        );
        assert_eq!(FilterValue::default(), FilterValue::Scalar);
    }
}
