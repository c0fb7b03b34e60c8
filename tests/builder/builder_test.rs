#[cfg(test)]
mod tests {
    use sqlchain::output::MemorySink;
    use sqlchain::prelude::*;

    fn users_schema(config: ChainConfig) -> SchemaBuilder {
        let mut schema = SchemaBuilder::new(config);
        schema.create_table("users", |t| {
            t.int("id").primary_key().auto_increment(0);
            t.varchar("name", 255);
        });
        schema
    }

    #[test]
    fn test_create_users_table() {
        let schema = users_schema(ChainConfig::new().prefix(""));

        assert_eq!(
            schema.render(),
            "CREATE TABLE `users`(\n    `id` int PRIMARY KEY AUTO_INCREMENT,\n    `name` varchar(255)\n);\n\n"
        );
    }

    #[test]
    fn test_drop_of_unknown_table_is_silent() {
        let mut schema = SchemaBuilder::default();
        schema.drop_table("ghost");

        assert!(schema.tables().is_empty());
        assert!(schema.error().is_none());

        let outcome = schema.finalize(&mut MemorySink::new()).unwrap();
        assert_eq!(outcome, Outcome::NothingChanged);
    }

    #[test]
    fn test_alter_drop_column() {
        let mut schema = SchemaBuilder::default();
        schema.alter_table("users", |t| {
            t.drop_column("name");
        });

        assert_eq!(
            schema.render(),
            "ALTER TABLE `users`\n    DROP COLUMN `name`\n;\n\n"
        );
    }

    #[test]
    fn test_unknown_call_suppresses_all_sql() {
        let mut schema = users_schema(ChainConfig::default());
        schema.create_table("posts", |t| {
            t.call("strin", &["title"]);
            t.call("nope", &["other"]);
            t.text("body");
        });

        let mut sink = MemorySink::new();
        let err = schema.finalize(&mut sink).unwrap_err();

        assert!(matches!(err, ChainError::UnknownOperation { ref name } if name == "strin"));
        assert!(err.to_string().starts_with("Allowed data type:\n"));
        assert!(!err.to_string().contains("CREATE"));
        assert_eq!(sink.paths().count(), 0);
    }

    #[test]
    fn test_duplicate_create_yields_one_statement() {
        let mut schema = users_schema(ChainConfig::default());
        schema.create_table("users", |t| {
            t.big_int("other_id");
        });

        assert_eq!(schema.tables().len(), 1);
        let sql = schema.render();
        assert_eq!(sql.matches("`users`").count(), 1);
        assert!(!sql.contains("other_id"));
        assert!(schema.error().is_none());
    }

    #[test]
    fn test_drop_after_create_keeps_name_registered() {
        let mut schema = users_schema(ChainConfig::new().prefix("app_"));
        schema.drop_table("users").create_table("users", |t| {
            t.int("id");
        });

        let sql = schema.render();
        assert!(sql.ends_with("DROP TABLE `app_users`;\n\n"));
        assert_eq!(sql.matches("CREATE TABLE").count(), 1);
    }

    #[test]
    fn test_parameter_rendering() {
        let mut schema = SchemaBuilder::default();
        schema.create_table("metrics", |t| {
            t.double("ratio");
            t.column_with(ColumnType::Double, "price", "10,2");
            t.column_with(ColumnType::Int, "hits", 11).unsigned();
            t.date_time("seen_at");
        });

        let sql = schema.render();
        assert!(sql.contains("`ratio` double,"));
        assert!(!sql.contains("()"));
        assert!(sql.contains("`price` double(10,2),"));
        assert!(sql.contains("`hits` int(11) UNSIGNED,"));
        assert!(sql.contains("`seen_at` datetime\n"));
    }

    #[test]
    fn test_engine_and_charset_only_on_create() {
        let config = ChainConfig::new().engine("InnoDB").charset("utf8mb4");
        let mut schema = users_schema(config);
        schema.alter_table("users", |t| {
            t.varchar("email", 128).add();
            t.int("id").modify().unsigned();
            t.add_unique_key("email");
            t.drop_unique_key("uk_name");
            t.drop_primary_key();
            t.add_primary_key("id");
        });

        let sql = schema.render();
        assert_eq!(sql.matches("ENGINE=InnoDB").count(), 1);
        assert!(sql.contains(") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;\n\n"));
        assert!(sql.ends_with(
            "ALTER TABLE `users`\n    ADD COLUMN `email` varchar(128),\n    MODIFY COLUMN `id` int UNSIGNED,\n    ADD UNIQUE (`email`),\n    DROP INDEX `uk_name`,\n    DROP PRIMARY KEY,\n    ADD PRIMARY KEY (`id`)\n;\n\n"
        ));
    }

    #[test]
    fn test_statements_follow_call_order() {
        let mut schema = SchemaBuilder::default();
        schema
            .create_table("a", |t| {
                t.int("id");
            })
            .alter_table("b", |t| {
                t.drop_column("x");
            })
            .create_table("c", |t| {
                t.json("payload").table_comment("raw events");
            })
            .drop_table("a");

        let actions: Vec<_> = schema.tables().iter().map(|t| (t.name.as_str(), t.action)).collect();
        assert_eq!(
            actions,
            [
                ("a", TableAction::Create),
                ("b", TableAction::Alter),
                ("c", TableAction::Create),
                ("a", TableAction::Drop),
            ]
        );

        let sql = schema.render();
        let a = sql.find("CREATE TABLE `a`").unwrap();
        let c = sql.find("/**\n * rawevents\n */\nCREATE TABLE `c`").unwrap();
        assert!(a < c);
        assert!(sql.contains("`payload` json"));
    }
}
