#[cfg(test)]
mod tests {
    use devdays::content::curriculum;
    use devdays::libs::audit::{CoverageReport, DuplicateDay};
    use devdays::libs::curriculum::get_all_lessons;
    use devdays::libs::error::CurriculumError;
    use devdays::libs::generator::{generate_day, generate_remaining_days};

    #[test]
    fn test_default_curriculum_reports_duplicates() {
        let report = CoverageReport::from_lessons(&get_all_lessons());

        assert_eq!(report.total, curriculum().len() + 98);
        assert_eq!(report.unique_days, 100);
        assert!(report.missing.is_empty());
        assert!(report.out_of_range.is_empty());
        assert_eq!(
            report.duplicates,
            vec![
                DuplicateDay { day: 21, count: 2 },
                DuplicateDay { day: 50, count: 2 },
                DuplicateDay { day: 100, count: 2 },
            ]
        );
        assert!(!report.is_complete());
    }

    #[test]
    fn test_generated_only_is_missing_first_two_days() {
        let report = CoverageReport::from_lessons(&generate_remaining_days());
        assert_eq!(report.missing, vec![1, 2]);
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_complete_coverage() {
        let lessons = (1..=100).map(generate_day).collect::<Vec<_>>();
        let report = CoverageReport::from_lessons(&lessons);
        assert!(report.is_complete());
        assert!(report.ensure_complete().is_ok());
    }

    #[test]
    fn test_out_of_range_days() {
        let mut lessons = (1..=100).map(generate_day).collect::<Vec<_>>();
        let mut extra = generate_day(5);
        extra.day = 0;
        lessons.push(extra.clone());
        extra.day = 150;
        lessons.push(extra.clone());
        lessons.push(extra);

        let report = CoverageReport::from_lessons(&lessons);
        assert_eq!(report.out_of_range, vec![0, 150]);
        assert_eq!(report.duplicates, vec![DuplicateDay { day: 150, count: 2 }]);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_ensure_complete_error() {
        let report = CoverageReport::from_lessons(&get_all_lessons());
        match report.ensure_complete() {
            Err(CurriculumError::IncompleteCoverage {
                duplicates,
                missing,
                out_of_range,
            }) => {
                assert_eq!(duplicates, 3);
                assert_eq!(missing, 0);
                assert_eq!(out_of_range, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_misses_every_day() {
        let report = CoverageReport::from_lessons(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.missing.len(), 100);
    }
}
