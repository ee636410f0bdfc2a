#[cfg(test)]
mod tests {
    use devdays::libs::config::{Config, ExportConfig};
    use devdays::libs::curriculum::get_all_lessons;
    use devdays::libs::export::{exercise_rows, index_rows, ExportData, ExportFormat, Exporter};
    use devdays::libs::index::group_by_category;
    use devdays::libs::lesson::LessonRecord;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_lessons_json(ctx: &mut ExportTestContext) {
        let lessons = get_all_lessons();
        let output_path = ctx.temp_dir.path().join("lessons.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        let written = exporter.export(ExportData::Lessons, &lessons).unwrap();
        assert_eq!(written, output_path);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let back: Vec<LessonRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, lessons);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_lessons_csv(ctx: &mut ExportTestContext) {
        let lessons = get_all_lessons();
        let output_path = ctx.temp_dir.path().join("lessons.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone()))
            .export(ExportData::Lessons, &lessons)
            .unwrap();

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "Day");
        assert_eq!(&headers[6], "Exercises");

        let rows = reader.records().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(rows.len(), lessons.len());
        assert_eq!(&rows[0][1], "Introduction to Web Development");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_exercises_csv(ctx: &mut ExportTestContext) {
        let lessons = get_all_lessons();
        let output_path = ctx.temp_dir.path().join("exercises.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone()))
            .export(ExportData::Exercises, &lessons)
            .unwrap();

        let expected = lessons.iter().map(|l| l.exercises.len()).sum::<usize>();
        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        assert_eq!(reader.records().count(), expected);

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("Project - Part 1: HTML Lists"));
        assert!(content.contains("homework"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_index_json(ctx: &mut ExportTestContext) {
        let lessons = get_all_lessons();
        let output_path = ctx.temp_dir.path().join("index.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone()))
            .export(ExportData::Index, &lessons)
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["generator"], "devdays");
        assert!(json.get("exportDate").is_some());
        assert_eq!(json["categories"][0]["category"], "HTML Basics");
        assert_eq!(json["categories"][0]["firstDay"], 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let lessons = get_all_lessons();
        for data in [ExportData::Lessons, ExportData::Exercises, ExportData::Index] {
            let output_path = ctx.temp_dir.path().join(format!("{}.xlsx", data));
            Exporter::new(ExportFormat::Excel, Some(output_path.clone()))
                .export(data, &lessons)
                .unwrap();

            assert!(output_path.exists());
            let metadata = std::fs::metadata(&output_path).unwrap();
            assert!(metadata.len() > 0);
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_from_config_uses_defaults(ctx: &mut ExportTestContext) {
        let config = Config {
            extra_lessons_dir: None,
            export: Some(ExportConfig {
                default_format: ExportFormat::Json,
                output_dir: Some(ctx.temp_dir.path().to_path_buf()),
            }),
        };

        let exporter = Exporter::from_config(None, None, &config);
        assert_eq!(exporter.format(), ExportFormat::Json);
        assert!(exporter.output_path().starts_with(ctx.temp_dir.path()));
        assert_eq!(exporter.output_path().extension().unwrap(), "json");

        let explicit = Exporter::from_config(Some(ExportFormat::Csv), Some(PathBuf::from("out.csv")), &config);
        assert_eq!(explicit.format(), ExportFormat::Csv);
        assert_eq!(explicit.output_path(), PathBuf::from("out.csv").as_path());
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("devdays_export_"));
        assert!(name.ends_with(".xlsx"));

        let exporter = Exporter::from_config(None, None, &Config::default());
        assert_eq!(exporter.format(), ExportFormat::Csv);
    }

    #[test]
    fn test_flattened_rows() {
        let lessons = get_all_lessons();

        let rows = exercise_rows(&lessons);
        assert_eq!(rows[0].day, 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].kind, "classwork");
        assert!(rows[0].instructions.contains(" | "));

        let groups = group_by_category(&lessons);
        let index = index_rows(&groups);
        assert_eq!(index.len(), lessons.len());
        assert_eq!(index[0].category, "HTML Basics");
        assert_eq!(index[0].day, 1);
    }
}
