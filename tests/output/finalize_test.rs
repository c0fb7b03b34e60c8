#[cfg(test)]
mod tests {
    use sqlchain::output::BACKUP_MARKER;
    use sqlchain::prelude::*;
    use std::fs;
    use std::path::Path;

    fn schema_for(path: &Path) -> SchemaBuilder {
        let config = ChainConfig::new().filename(path.to_string_lossy());
        let mut schema = SchemaBuilder::new(config);
        schema.create_table("users", |t| {
            t.int("id").primary_key();
        });
        schema
    }

    fn backups_in(dir: &Path, name: &str) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(&format!("{}{}", BACKUP_MARKER, name)))
            .collect()
    }

    #[test]
    fn test_writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");

        let outcome = schema_for(&path).finalize(&mut FsSink).unwrap();

        assert_eq!(
            outcome,
            Outcome::Written {
                path: path.clone(),
                backup: None
            }
        );
        assert_eq!(outcome.to_string(), "CHAIN SQL SUCCESS");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "CREATE TABLE `users`(\n    `id` int PRIMARY KEY\n);\n\n"
        );
        assert!(backups_in(dir.path(), "schema.sql").is_empty());
    }

    #[test]
    fn test_existing_file_is_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");
        fs::write(&path, "-- previous run\n").unwrap();

        let outcome = schema_for(&path).finalize(&mut FsSink).unwrap();

        let backups = backups_in(dir.path(), "schema.sql");
        assert_eq!(backups.len(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
            "-- previous run\n"
        );
        assert!(fs::read_to_string(&path).unwrap().starts_with("CREATE TABLE `users`("));

        match outcome {
            Outcome::Written {
                backup: Some(backup),
                ..
            } => assert_eq!(backup, dir.path().join(&backups[0])),
            other => panic!("expected a backup, got {:?}", other),
        }

        // Only the new file and its backup remain.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_nothing_changed_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");
        fs::write(&path, "-- keep me\n").unwrap();

        let config = ChainConfig::new().filename(path.to_string_lossy());
        let outcome = SchemaBuilder::new(config).finalize(&mut FsSink).unwrap();

        assert_eq!(outcome, Outcome::NothingChanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "-- keep me\n");
        assert!(backups_in(dir.path(), "schema.sql").is_empty());
    }

    #[test]
    fn test_error_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.sql");
        fs::write(&path, "-- keep me\n").unwrap();

        let mut schema = schema_for(&path);
        schema.alter_table("users", |t| {
            t.call("dropColum", &["id"]);
        });

        assert!(schema.finalize(&mut FsSink).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "-- keep me\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("schema.sql");

        let err = schema_for(&path).finalize(&mut FsSink).unwrap_err();
        assert!(matches!(err, ChainError::Output(_)));
        assert!(!err.is_declaration_error());
    }

    #[test]
    fn test_echo_without_filename() {
        let mut schema = SchemaBuilder::default();
        schema.create_table("users", |t| {
            t.boolean("active").default_value(1);
        });

        let mut sink = MemorySink::new();
        let outcome = schema.finalize(&mut sink).unwrap();

        assert_eq!(
            outcome.echoed_sql(),
            Some("CREATE TABLE `users`(\n    `active` boolean DEFAULT 1\n);\n\n")
        );
        assert_eq!(sink.paths().count(), 0);
    }
}
