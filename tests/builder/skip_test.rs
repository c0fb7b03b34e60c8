#[cfg(test)]
mod tests {
    use sqlchain::prelude::*;

    #[test]
    fn test_skipped_operations_record_nothing() {
        let mut schema = SchemaBuilder::default();
        let mut called = false;

        schema
            .skip()
            .create_table("users", |t| {
                called = true;
                t.int("id");
            })
            .alter_table("users", |t| {
                t.drop_column("id");
            })
            .table_comment("ignored")
            .drop_table("users");

        assert!(!called);
        assert!(schema.is_skipping());
        assert!(schema.tables().is_empty());
        assert!(schema.columns().is_empty());
    }

    #[test]
    fn test_skip_does_not_register_names() {
        let mut schema = SchemaBuilder::default();
        schema.skip().create_table("users", |t| {
            t.int("id");
        });
        schema.end_skip().create_table("users", |t| {
            t.int("id");
        });

        assert_eq!(schema.tables().len(), 1);
        assert_eq!(schema.tables()[0].columns, 0..1);
    }

    #[test]
    fn test_skipped_typos_are_not_errors() {
        let mut schema = SchemaBuilder::default();
        schema.skip().create_table("users", |t| {
            t.call("intt", &["id"]);
        });

        assert!(schema.error().is_none());
    }

    #[test]
    fn test_skip_window() {
        let mut schema = SchemaBuilder::default();
        schema
            .create_table("kept", |t| {
                t.int("id");
            })
            .skip()
            .create_table("skipped", |t| {
                t.int("id");
            })
            .end_skip()
            .drop_table("kept");

        let sql = schema.render();
        assert!(sql.contains("CREATE TABLE `kept`"));
        assert!(!sql.contains("skipped"));
        assert!(sql.contains("DROP TABLE `kept`;"));
    }
}
