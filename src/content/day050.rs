use crate::libs::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord};

const EXPLANATION: &str = r#"# Day 50: Promises and async/await

## Why Asynchronous Code?

Network requests, timers and file reads take time. JavaScript runs on a
single thread, so instead of waiting it registers work to finish later and
keeps the page responsive.

## Promises

A **Promise** represents a value that will be available in the future. It is
either *pending*, *fulfilled* or *rejected*.

```js
fetch("/api/lessons")
  .then((response) => response.json())
  .then((lessons) => console.log(lessons))
  .catch((error) => console.error(error));
```

## async/await

`async` functions always return a promise. Inside them, `await` pauses until
a promise settles, which makes asynchronous code read top to bottom:

```js
async function loadLessons() {
  try {
    const response = await fetch("/api/lessons");
    return await response.json();
  } catch (error) {
    console.error("Could not load lessons", error);
    return [];
  }
}
```

## Running Work in Parallel

`Promise.all` waits for several promises at once and rejects as soon as one
of them fails. `Promise.allSettled` waits for all of them regardless.
"#;

pub fn lesson() -> LessonRecord {
    LessonRecord {
        day: 50,
        title: "Promises and async/await".to_string(),
        category: "JavaScript Advanced".to_string(),
        description: "Write non-blocking JavaScript with promises and the async/await syntax.".to_string(),
        learning_objectives: vec![
            "Explain why the browser needs asynchronous code".to_string(),
            "Chain promises with then and catch".to_string(),
            "Rewrite promise chains with async/await".to_string(),
            "Handle errors in asynchronous code".to_string(),
            "Run independent requests in parallel with Promise.all".to_string(),
        ],
        detailed_explanation: EXPLANATION.to_string(),
        key_terms: vec![
            KeyTerm::new("Promise", "An object representing the eventual completion or failure of an asynchronous operation."),
            KeyTerm::new("async", "A keyword that makes a function return a promise."),
            KeyTerm::new("await", "A keyword that pauses an async function until a promise settles."),
            KeyTerm::new("Event Loop", "The mechanism that runs queued callbacks once the call stack is empty."),
        ],
        exercises: vec![
            Exercise::new(
                1,
                "Delay Helper",
                ExerciseType::Classwork,
                Difficulty::Easy,
                &[
                    "Write a function delay(ms) that returns a promise",
                    "Resolve the promise with setTimeout",
                    "Log a message before and after awaiting it",
                    "Explain the order of the log output",
                ],
            ),
            Exercise::new(
                2,
                "From then to await",
                ExerciseType::Classwork,
                Difficulty::Medium,
                &[
                    "Take the fetch chain from the lesson",
                    "Rewrite it as an async function",
                    "Add try/catch error handling",
                    "Show a friendly message when the request fails",
                ],
            ),
            Exercise::new(
                3,
                "Parallel Requests",
                ExerciseType::Classwork,
                Difficulty::Hard,
                &[
                    "Fetch three users from a public API at once",
                    "Use Promise.all to wait for all of them",
                    "Measure the total time with console.time",
                    "Compare it with fetching the users one by one",
                ],
            ),
            Exercise::new(
                4,
                "Weather Widget",
                ExerciseType::Homework,
                Difficulty::Hard,
                &[
                    "Pick a free weather API",
                    "Load the forecast for your city with async/await",
                    "Render the temperature and an icon",
                    "Show a loading state and an error state",
                ],
            ),
        ],
    }
}
