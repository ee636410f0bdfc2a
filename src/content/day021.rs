use crate::libs::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord};

const EXPLANATION: &str = r#"# Day 21: Flexbox Fundamentals

## The Flex Container

Flexbox is switched on by a single declaration on the parent:

```css
.toolbar {
  display: flex;
}
```

The parent becomes a **flex container** and its direct children become
**flex items**.

## Main Axis and Cross Axis

`flex-direction` decides the **main axis** (`row` by default). The cross axis
is perpendicular to it.

- `justify-content` distributes items along the main axis
- `align-items` aligns items along the cross axis
- `gap` adds space between items without margins

## Growing and Shrinking

```css
.sidebar { flex: 0 0 240px; }
.content { flex: 1; }
```

`flex: 1` lets the content area take all remaining space while the sidebar
keeps a fixed width.

## Wrapping

`flex-wrap: wrap` lets items move onto new lines when they run out of room,
which is the basis of many simple responsive card layouts.
"#;

pub fn lesson() -> LessonRecord {
    LessonRecord {
        day: 21,
        title: "Flexbox Fundamentals".to_string(),
        category: "CSS Layouts".to_string(),
        description: "Lay out navigation bars, cards and sidebars in one dimension with the flexible box model.".to_string(),
        learning_objectives: vec![
            "Turn an element into a flex container".to_string(),
            "Explain the main axis and the cross axis".to_string(),
            "Align and distribute items with justify-content and align-items".to_string(),
            "Control item sizing with flex-grow, flex-shrink and flex-basis".to_string(),
        ],
        detailed_explanation: EXPLANATION.to_string(),
        key_terms: vec![
            KeyTerm::new("Flex Container", "An element with display: flex whose children are laid out with flexbox."),
            KeyTerm::new("Main Axis", "The axis along which flex items are placed, set by flex-direction."),
            KeyTerm::new("Cross Axis", "The axis perpendicular to the main axis."),
            KeyTerm::new("flex-basis", "The initial size of a flex item before free space is distributed."),
        ],
        exercises: vec![
            Exercise::new(
                1,
                "Navigation Bar",
                ExerciseType::Classwork,
                Difficulty::Easy,
                &[
                    "Create a nav element with five links",
                    "Lay the links out in a row with flexbox",
                    "Push the last link to the right with margin-left: auto",
                    "Add a gap between links",
                ],
            ),
            Exercise::new(
                2,
                "Centering Challenge",
                ExerciseType::Classwork,
                Difficulty::Medium,
                &[
                    "Create a full-height section",
                    "Center a card both horizontally and vertically",
                    "Change flex-direction and observe the result",
                    "Explain in a comment why centering still works",
                ],
            ),
            Exercise::new(
                3,
                "Holy Grail Layout",
                ExerciseType::Classwork,
                Difficulty::Hard,
                &[
                    "Build a header, footer and three-column body",
                    "Give both sidebars a fixed width",
                    "Let the main column grow to fill the space",
                    "Keep the footer at the bottom on short pages",
                ],
            ),
            Exercise::new(
                4,
                "Card Gallery",
                ExerciseType::Homework,
                Difficulty::Medium,
                &[
                    "Create twelve product cards",
                    "Wrap them onto multiple lines with flex-wrap",
                    "Keep every card at least 220px wide",
                    "Test the gallery at three screen sizes",
                ],
            ),
            Exercise::new(
                5,
                "Flexbox Froggy",
                ExerciseType::Homework,
                Difficulty::Easy,
                &[
                    "Open the Flexbox Froggy game",
                    "Complete all 24 levels",
                    "Note the properties you found hardest",
                    "Share a screenshot of the final level",
                ],
            ),
        ],
    }
}
