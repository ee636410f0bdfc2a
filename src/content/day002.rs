use crate::libs::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord};

const EXPLANATION: &str = r#"# Day 2: HTML Document Structure

## Elements and Tags

An HTML **element** is made of an opening tag, content and a closing tag:

```html
<p>This is a paragraph.</p>
```

Some elements are **void** and never wrap content, for example `<br>` and
`<img>`.

## Attributes

Attributes add extra information to an element. They always go in the
opening tag as `name="value"` pairs:

```html
<a href="https://developer.mozilla.org" target="_blank">MDN Web Docs</a>
```

## Headings and Text

HTML provides six heading levels, `<h1>` to `<h6>`. Use exactly one `<h1>`
per page and never skip levels just to get a smaller font; styling is the
job of CSS.

Text-level elements such as `<strong>`, `<em>` and `<code>` give meaning to
parts of a sentence.

## Nesting

Elements can contain other elements. Always close the inner element before
the outer one:

```html
<p>This is <strong>very</strong> important.</p>
```

## Comments

```html
<!-- Comments are ignored by the browser -->
```
"#;

pub fn lesson() -> LessonRecord {
    LessonRecord {
        day: 2,
        title: "HTML Elements and Document Structure".to_string(),
        category: "HTML Basics".to_string(),
        description: "Learn how HTML elements, attributes and nesting combine to form a well structured document.".to_string(),
        learning_objectives: vec![
            "Distinguish elements, tags and attributes".to_string(),
            "Use heading levels in a logical order".to_string(),
            "Format text with semantic inline elements".to_string(),
            "Nest elements correctly and add comments".to_string(),
        ],
        detailed_explanation: EXPLANATION.to_string(),
        key_terms: vec![
            KeyTerm::new("Element", "A piece of an HTML document made of an opening tag, content and a closing tag."),
            KeyTerm::new("Attribute", "A name-value pair in an opening tag that configures an element."),
            KeyTerm::new("Void Element", "An element that cannot have content and has no closing tag, such as <img>."),
            KeyTerm::new("Nesting", "Placing elements inside other elements to build the document tree."),
        ],
        exercises: vec![
            Exercise::new(
                1,
                "Heading Hierarchy",
                ExerciseType::Classwork,
                Difficulty::Easy,
                &[
                    "Create headings.html",
                    "Add one heading of each level from h1 to h6",
                    "Write a short paragraph under each heading",
                    "Check the outline with the browser's accessibility tree",
                ],
            ),
            Exercise::new(
                2,
                "Links and Attributes",
                ExerciseType::Classwork,
                Difficulty::Easy,
                &[
                    "Add three links to your favourite websites",
                    "Make one link open in a new tab",
                    "Add a title attribute to every link",
                    "Link about.html from yesterday to index.html",
                ],
            ),
            Exercise::new(
                3,
                "Fix the Broken Markup",
                ExerciseType::Classwork,
                Difficulty::Medium,
                &[
                    "Copy the broken snippet provided by your instructor",
                    "Find every incorrectly nested element",
                    "Fix missing closing tags",
                    "Validate the result with the W3C validator",
                ],
            ),
            Exercise::new(
                4,
                "Recipe Page",
                ExerciseType::Homework,
                Difficulty::Medium,
                &[
                    "Choose a recipe you like",
                    "Structure it with headings and paragraphs",
                    "Highlight important steps with strong and em",
                    "Add a comment at the top describing the page",
                ],
            ),
        ],
    }
}
