#[cfg(test)]
mod tests {
    use devdays::libs::curriculum::get_all_lessons;
    use devdays::libs::generator::{generate_day, CATEGORIES};
    use devdays::libs::index::group_by_category;
    use devdays::libs::lesson::LessonRecord;

    fn lesson(day: u32, category: &str, title: &str) -> LessonRecord {
        let mut lesson = generate_day(day.max(3));
        lesson.day = day;
        lesson.category = category.to_string();
        lesson.title = title.to_string();
        lesson
    }

    #[test]
    fn test_groups_ordered_by_first_day() {
        let lessons = vec![
            lesson(30, "CSS", "c30"),
            lesson(5, "HTML", "h5"),
            lesson(12, "CSS", "c12"),
            lesson(1, "HTML", "h1"),
            lesson(50, "JS", "j50"),
        ];

        let groups = group_by_category(&lessons);
        let categories = groups.iter().map(|g| g.category.as_str()).collect::<Vec<_>>();
        assert_eq!(categories, vec!["HTML", "CSS", "JS"]);
        assert_eq!(groups[0].first_day, 1);
        assert_eq!(groups[1].first_day, 12);
        assert_eq!(groups[2].first_day, 50);
    }

    #[test]
    fn test_lessons_sorted_by_day_within_group() {
        let lessons = vec![lesson(9, "HTML", "a"), lesson(2, "HTML", "b"), lesson(4, "HTML", "c")];
        let groups = group_by_category(&lessons);
        assert_eq!(groups.len(), 1);
        let days = groups[0].lessons.iter().map(|l| l.day).collect::<Vec<_>>();
        assert_eq!(days, vec![2, 4, 9]);
    }

    #[test]
    fn test_duplicate_days_kept_in_encounter_order() {
        let lessons = vec![lesson(7, "HTML", "first"), lesson(3, "HTML", "x"), lesson(7, "HTML", "second")];
        let groups = group_by_category(&lessons);
        let titles = groups[0].lessons.iter().map(|l| l.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["x", "first", "second"]);
    }

    #[test]
    fn test_tied_first_day_keeps_encounter_order() {
        let lessons = vec![lesson(4, "B", "b"), lesson(4, "A", "a")];
        let groups = group_by_category(&lessons);
        let categories = groups.iter().map(|g| g.category.as_str()).collect::<Vec<_>>();
        assert_eq!(categories, vec!["B", "A"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_full_curriculum_index() {
        let all = get_all_lessons();
        let groups = group_by_category(&all);

        // Every generated category appears; authored ones reuse the same labels
        for category in CATEGORIES {
            assert!(groups.iter().any(|g| g.category == category), "missing {}", category);
        }
        assert_eq!(groups[0].category, "HTML Basics");
        assert_eq!(groups[0].first_day, 1);

        let total = groups.iter().map(|g| g.lessons.len()).sum::<usize>();
        assert_eq!(total, all.len());

        for window in groups.windows(2) {
            assert!(window[0].first_day <= window[1].first_day);
        }
        for group in &groups {
            assert!(group.lessons.windows(2).all(|w| w[0].day <= w[1].day));
        }

        let full_stack = groups.iter().find(|g| g.category == "Full-Stack Projects").unwrap();
        assert_eq!(full_stack.lessons.iter().filter(|l| l.day == 100).count(), 2);
    }
}
