use crate::libs::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord};

const EXPLANATION: &str = r#"# Day 1: How the Web Works

## Clients and Servers

Every time you open a website, your **browser** (the client) sends a request
to a **server** somewhere on the internet. The server answers with files:
HTML for structure, CSS for presentation and JavaScript for behavior. The
browser then turns those files into the page you see.

## From URL to Page

1. You type `https://example.com` into the address bar.
2. The browser asks a **DNS** server for the IP address of `example.com`.
3. The browser opens a connection to that address and sends an **HTTP request**.
4. The server replies with an **HTTP response** containing the HTML document.
5. The browser parses the HTML, discovers linked CSS, images and scripts, and
   requests those too.
6. Everything is combined and painted on screen.

## Your Toolkit

During this course you will use three tools every day:

- A **code editor** such as VS Code
- A modern **browser** with developer tools (Chrome, Firefox or Edge)
- A **terminal** for running commands and using Git

## Your First Page

```html
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>My First Page</title>
  </head>
  <body>
    <h1>Hello, web!</h1>
    <p>This is my first web page.</p>
  </body>
</html>
```

Save this as `index.html` and open it in your browser. Congratulations, you
are a web developer.
"#;

pub fn lesson() -> LessonRecord {
    LessonRecord {
        day: 1,
        title: "Introduction to Web Development".to_string(),
        category: "HTML Basics".to_string(),
        description: "Discover how the web works, set up your development tools and build your very first HTML page.".to_string(),
        learning_objectives: vec![
            "Explain the client-server model of the web".to_string(),
            "Describe what happens between typing a URL and seeing a page".to_string(),
            "Install and configure a code editor and browser developer tools".to_string(),
            "Create and open a basic HTML document".to_string(),
        ],
        detailed_explanation: EXPLANATION.to_string(),
        key_terms: vec![
            KeyTerm::new("Client", "The program, usually a browser, that requests resources from a server."),
            KeyTerm::new("Server", "A computer that stores website files and sends them in response to requests."),
            KeyTerm::new("HTTP", "HyperText Transfer Protocol, the set of rules browsers and servers use to exchange data."),
            KeyTerm::new("DNS", "Domain Name System, which translates domain names into IP addresses."),
            KeyTerm::new("HTML", "HyperText Markup Language, the language that describes the structure of a web page."),
        ],
        exercises: vec![
            Exercise::new(
                1,
                "Set Up Your Workspace",
                ExerciseType::Classwork,
                Difficulty::Easy,
                &[
                    "Install VS Code and a modern browser",
                    "Create a folder named web-100-days",
                    "Open the folder in your editor",
                    "Install the Live Server extension",
                ],
            ),
            Exercise::new(
                2,
                "Hello, Web!",
                ExerciseType::Classwork,
                Difficulty::Easy,
                &[
                    "Create index.html inside your course folder",
                    "Type the HTML skeleton from the lesson by hand",
                    "Change the heading to include your name",
                    "Open the page in your browser",
                ],
            ),
            Exercise::new(
                3,
                "Explore Developer Tools",
                ExerciseType::Classwork,
                Difficulty::Medium,
                &[
                    "Open any news website",
                    "Press F12 to open the developer tools",
                    "Find the Network tab and reload the page",
                    "Count how many requests the page makes",
                ],
            ),
            Exercise::new(
                4,
                "How the Web Works Diagram",
                ExerciseType::Homework,
                Difficulty::Easy,
                &[
                    "Draw the journey from URL to rendered page",
                    "Label the client, DNS server and web server",
                    "Add arrows for each request and response",
                    "Take a photo or screenshot of your diagram",
                ],
            ),
            Exercise::new(
                5,
                "About Me Page",
                ExerciseType::Homework,
                Difficulty::Medium,
                &[
                    "Create about.html",
                    "Add a heading with your name",
                    "Write three paragraphs about yourself",
                    "Explain why you want to learn web development",
                ],
            ),
        ],
    }
}
