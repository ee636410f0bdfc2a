use crate::libs::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord};

const EXPLANATION: &str = r#"# Day 100: Capstone Presentation and Next Steps

## You Made It

One hundred days ago you wrote your first `<h1>`. Today you present a full
stack application that you designed, built, tested and deployed yourself.

## Presenting Your Capstone

A good demo is short and tells a story:

1. **The problem**: who is this for and what pain does it solve?
2. **The demo**: walk through the main user journey live.
3. **Under the hood**: one or two technical decisions you are proud of.
4. **Lessons learned**: what you would do differently next time.

Keep it under ten minutes and rehearse at least twice.

## Building Your Portfolio

- Pin your best three projects on GitHub
- Write a README for each with screenshots and a live link
- Add a short case study to your personal site

## Where to Go Next

- Deepen one framework instead of skimming many
- Learn testing and accessibility in depth
- Contribute to an open source project
- Keep building: consistency beats intensity
"#;

pub fn lesson() -> LessonRecord {
    LessonRecord {
        day: 100,
        title: "Capstone Presentation and Next Steps".to_string(),
        category: "Full-Stack Projects".to_string(),
        description: "Present your capstone project, polish your portfolio and plan your learning path beyond the course.".to_string(),
        learning_objectives: vec![
            "Deliver a structured demo of a complete web application".to_string(),
            "Explain key technical decisions to a non-technical audience".to_string(),
            "Prepare a portfolio that showcases your best work".to_string(),
            "Create a personal learning plan for the next six months".to_string(),
        ],
        detailed_explanation: EXPLANATION.to_string(),
        key_terms: vec![
            KeyTerm::new("Capstone", "A final project that brings together everything learned in a course."),
            KeyTerm::new("Portfolio", "A curated collection of projects that demonstrates your skills to employers."),
            KeyTerm::new("Case Study", "A short write-up explaining the problem, process and outcome of a project."),
        ],
        exercises: vec![
            Exercise::new(
                1,
                "Rehearse Your Demo",
                ExerciseType::Classwork,
                Difficulty::Medium,
                &[
                    "Write a five-part outline for your presentation",
                    "Time a full run-through",
                    "Cut anything that does not support the story",
                    "Rehearse in front of a classmate and collect feedback",
                ],
            ),
            Exercise::new(
                2,
                "Capstone Presentation",
                ExerciseType::Classwork,
                Difficulty::Hard,
                &[
                    "Present your capstone to the class",
                    "Demo the main user journey live",
                    "Answer questions from the audience",
                    "Write down feedback you want to act on",
                ],
            ),
            Exercise::new(
                3,
                "Portfolio Polish",
                ExerciseType::Homework,
                Difficulty::Medium,
                &[
                    "Pin your three best repositories",
                    "Add screenshots and live links to each README",
                    "Publish a case study for your capstone",
                    "Ask a mentor to review your portfolio",
                ],
            ),
            Exercise::new(
                4,
                "Learning Plan",
                ExerciseType::Homework,
                Difficulty::Easy,
                &[
                    "List three skills you want to deepen",
                    "Pick one resource for each skill",
                    "Schedule weekly study sessions",
                    "Set a project goal for the next month",
                ],
            ),
        ],
    }
}
