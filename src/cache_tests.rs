#[cfg(test)]
mod tests {
    use crate::{
        EntityType, FieldDef, GeneratorCache, GeneratorOptions, MetadataError, SqlGenerator,
        generator_for, set_default_options_scoped,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::thread;

    struct Account;

    impl crate::Entity for Account {
        fn entity_type() -> EntityType {
            EntityType::new("Account")
                .field(FieldDef::value("AccountId").identity())
                .field(FieldDef::text("Owner"))
        }
    }

    struct Ledger;

    crate::sql_entity! {
        impl Ledger as "LedgerEntry" {
            fields: [
                "EntryId" => value [key],
                "Amount" => value [],
            ]
        }
    }

    struct Broken;

    impl crate::Entity for Broken {
        fn entity_type() -> EntityType {
            EntityType::new("Broken")
                .field(FieldDef::value("A").identity())
                .field(FieldDef::value("B").identity())
        }
    }

    #[test]
    fn same_type_returns_the_same_generator() {
        let cache = GeneratorCache::with_options(GeneratorOptions::default());
        assert!(cache.is_empty());

        let a = cache.get::<Account>().unwrap();
        let b = cache.get::<Account>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let l = cache.get::<Ledger>().unwrap();
        assert_eq!(l.descriptor().table_name(), "LedgerEntry");
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn extraction_errors_are_not_cached() {
        let cache = GeneratorCache::with_options(GeneratorOptions::default());
        assert!(matches!(
            cache.get::<Broken>(),
            Err(MetadataError::AmbiguousIdentity { .. })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_options_drive_generation() {
        let cache = GeneratorCache::with_options(GeneratorOptions::new().with_default_schema("ops"));
        let g = cache.get::<Ledger>().unwrap();
        assert_eq!(
            g.delete(),
            "DELETE FROM [ops].[LedgerEntry] WHERE [LedgerEntry].[EntryId] = @EntryId"
        );
    }

    #[test]
    fn concurrent_lookups_share_one_instance() {
        let cache = Arc::new(GeneratorCache::with_options(GeneratorOptions::default()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.get::<Account>().unwrap())
            })
            .collect();

        let generators: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(generators.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(cache.len(), 1);
        assert_eq!(
            generators[0].select_all(),
            "SELECT [Account].[AccountId], [Account].[Owner] FROM [dbo].[Account] WITH (NOLOCK)"
        );
    }

    #[test]
    fn global_cache_is_shared() {
        let _g = set_default_options_scoped(GeneratorOptions::default());
        let a = generator_for::<Account>().unwrap();
        let b = generator_for::<Account>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.insert().ends_with("SELECT @NEWID"));
    }
}
