#[cfg(test)]
mod tests {
    use sqlchain::prelude::*;
    use std::path::Path;

    const BLOG: &str = r#"
[config]
prefix = "blog_"
engine = "InnoDB"
charset = "utf8mb4"

[[operation]]
action = "create"
table = "posts"
comment = "Published articles"
calls = [
    ["bigInt", "id"], ["unsigned"], ["primaryKey"], ["autoIncrement", "1000"],
    ["varchar", "title", "200"], ["uniqueKey"],
    ["enum", "status", "'draft','live'"], ["default", "'draft'"],
    ["longText", "body"],
]

[[operation]]
action = "skip"

[[operation]]
action = "drop"
table = "posts"

[[operation]]
action = "end_skip"

[[operation]]
action = "alter"
table = "posts"
calls = [
    ["timestamp", "published_at"], ["add"],
    ["dropUniqueKey", "title"],
]
"#;

    #[test]
    fn test_blog_script() {
        let script = Script::parse(BLOG).unwrap();
        let mut schema = SchemaBuilder::new(script.config.clone().unwrap());
        script.apply(&mut schema);

        assert!(schema.error().is_none());
        insta::assert_snapshot!(schema.render(), @r"
        /**
         * Publishedarticles
         */
        CREATE TABLE `blog_posts`(
            `id` bigint UNSIGNED PRIMARY KEY AUTO_INCREMENT 1000,
            `title` varchar(200) UNIQUE,
            `status` enum('draft','live') DEFAULT 'draft',
            `body` longtext
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;

        ALTER TABLE `blog_posts`
            ADD COLUMN `published_at` timestamp,
            DROP INDEX `title`
        ;
        ");
    }

    #[test]
    fn test_script_typo_reports_catalog() {
        let script = Script::parse(
            r#"
[[operation]]
action = "create"
table = "users"
calls = [["int", "id"], ["varchr", "name", "64"]]
"#,
        )
        .unwrap();

        let mut schema = SchemaBuilder::default();
        script.apply(&mut schema);

        let err = schema.finalize(&mut MemorySink::new()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Allowed data type:\n["));
        assert!(msg.contains("\"varchar\""));
    }

    #[test]
    fn test_script_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("migration.toml");
        std::fs::write(&path, BLOG).unwrap();

        let script = Script::from_file(&path).unwrap();
        assert_eq!(script.operations.len(), 5);
        assert_eq!(script.config.unwrap().prefix, "blog_");

        assert!(Script::from_file(Path::new("/nonexistent/migration.toml")).is_err());
    }
}
