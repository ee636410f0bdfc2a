#[cfg(test)]
mod tests {
    use devdays::libs::generator::{
        category_for_day, category_index, generate_day, generate_remaining_days, topic_for_day, topic_index, CATEGORIES, TOPICS,
    };
    use devdays::libs::lesson::{Difficulty, ExerciseType};
    use std::collections::HashSet;

    #[test]
    fn test_generates_98_records_for_days_3_to_100() {
        let lessons = generate_remaining_days();
        assert_eq!(lessons.len(), 98);

        let days = lessons.iter().map(|l| l.day).collect::<Vec<_>>();
        assert_eq!(days, (3..=100).collect::<Vec<u32>>());

        let unique = days.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 98);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_remaining_days(), generate_remaining_days());
    }

    #[test]
    fn test_every_record_has_fixed_exercise_shape() {
        for lesson in generate_remaining_days() {
            assert_eq!(lesson.exercises.len(), 5, "day {}", lesson.day);

            let ids = lesson.exercises.iter().map(|e| e.id).collect::<Vec<_>>();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);

            let kinds = lesson.exercises.iter().map(|e| e.kind).collect::<Vec<_>>();
            assert_eq!(
                kinds,
                vec![
                    ExerciseType::Classwork,
                    ExerciseType::Classwork,
                    ExerciseType::Classwork,
                    ExerciseType::Homework,
                    ExerciseType::Homework
                ]
            );

            let difficulties = lesson.exercises.iter().map(|e| e.difficulty).collect::<Vec<_>>();
            assert_eq!(
                difficulties,
                vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Medium, Difficulty::Hard]
            );

            assert!(lesson.exercises.iter().all(|e| e.instructions.len() == 4));
            assert_eq!(lesson.exercises_of(ExerciseType::Classwork).count(), 3);
            assert_eq!(lesson.exercises_of(ExerciseType::Homework).count(), 2);
        }
    }

    #[test]
    fn test_topic_rotation_has_period_30() {
        let lessons = generate_remaining_days();
        for k in 0..lessons.len() - 30 {
            assert_eq!(lessons[k].title, lessons[k + 30].title, "index {}", k);
        }
        assert_eq!(topic_index(3), 0);
        assert_eq!(topic_index(32), 29);
        assert_eq!(topic_index(33), 0);
    }

    #[test]
    fn test_category_changes_every_10_days() {
        assert_eq!(category_index(1), 0);
        assert_eq!(category_index(10), 0);
        assert_eq!(category_index(11), 1);
        assert_eq!(category_index(21), 2);
        assert_eq!(category_index(100), 9);

        assert_eq!(category_for_day(11), CATEGORIES[1]);
        assert_eq!(category_for_day(21), CATEGORIES[2]);

        let lessons = generate_remaining_days();
        let days_3_to_10 = lessons.iter().filter(|l| l.day <= 10).collect::<Vec<_>>();
        assert_eq!(days_3_to_10.len(), 8);
        assert!(days_3_to_10.iter().all(|l| l.category == "HTML Basics"));
    }

    #[test]
    fn test_day_3_is_html_lists_in_html_basics() {
        let lessons = generate_remaining_days();
        let day3 = lessons.iter().find(|l| l.day == 3).unwrap();
        assert_eq!(day3.title, "HTML Lists");
        assert_eq!(day3.category, "HTML Basics");
    }

    #[test]
    fn test_day_13_is_css_selectors() {
        let lessons = generate_remaining_days();
        let day13 = lessons.iter().find(|l| l.day == 13).unwrap();
        assert_eq!(day13.title, TOPICS[10]);
        assert_eq!(day13.title, "CSS Selectors");
        assert_eq!(topic_for_day(13), "CSS Selectors");
    }

    #[test]
    fn test_templates_interpolate_topic() {
        let lesson = generate_day(4);
        assert_eq!(lesson.title, "HTML Tables");
        assert!(lesson.description.contains("HTML Tables"));
        assert!(lesson.learning_objectives.iter().all(|o| o.contains("HTML Tables")));
        assert!(lesson.detailed_explanation.starts_with("# Day 4: HTML Tables"));
        assert_eq!(lesson.key_terms[0].term, "HTML Tables");
        assert_eq!(lesson.exercises[0].title, "Basic: HTML Tables");
        assert_eq!(lesson.exercises[2].title, "Advanced Challenge: HTML Tables");
        assert_eq!(lesson.exercises[4].title, "Project - Part 2: HTML Tables");
    }

    #[test]
    fn test_rotation_tables_sizes() {
        assert_eq!(TOPICS.len(), 30);
        assert_eq!(CATEGORIES.len(), 10);
        assert_eq!(TOPICS[0], "HTML Lists");
        assert_eq!(CATEGORIES[0], "HTML Basics");
    }
}
