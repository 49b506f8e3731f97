//! Static HTML shells for the navigation routes. The game UIs load their
//! own scripts from `/static`; these pages only provide the mount points.

use axum::response::Html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Practice,
    Pattern,
    Compose,
    Sour,
    Navarasa,
}

impl Page {
    fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Practice => "Practice",
            Page::Pattern => "Pattern Recognition",
            Page::Compose => "Compose a Pattern",
            Page::Sour => "Identify the Sour Note",
            Page::Navarasa => "Navarasa",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Page::Home => {
                r#"<nav>
        <a href="/practice">Practice</a>
        <a href="/pattern">Pattern Recognition</a>
        <a href="/compose">Compose</a>
        <a href="/sour">Sour Note</a>
        <a href="/navarasa">Navarasa</a>
        <a href="/logout">Log out</a>
    </nav>"#
            }
            Page::Practice => r#"<div id="practice"></div>"#,
            Page::Pattern => {
                r#"<select id="levelSelect"><option value="1">Level 1</option><option value="2">Level 2</option><option value="3">Level 3</option></select>
    <div id="pattern"></div><div id="feedback"></div><div>Score: <span id="score">0</span></div>"#
            }
            Page::Compose => r#"<div id="compose"></div>"#,
            Page::Sour => r#"<div id="melody"></div><div id="feedback"></div>"#,
            Page::Navarasa => {
                r#"<audio id="clip" controls></audio><div id="options"></div><div>Score: <span id="score">0</span></div>"#
            }
        }
    }
}

fn shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} | Swara Games</title>
    <script src="/static/js/game.js" defer></script>
</head>
<body>
    <h1>{title}</h1>
    {body}
</body>
</html>"#
    )
}

pub fn render(page: Page) -> Html<String> {
    Html(shell(page.title(), page.body()))
}

/// Login form, with the generic failure message when a previous attempt failed
pub fn login(error: Option<&str>) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, e))
        .unwrap_or_default();
    let body = format!(
        r#"{error}
    <form method="post" action="/login">
        <input name="username" placeholder="Username" autocomplete="username">
        <input name="password" type="password" placeholder="Password" autocomplete="current-password">
        <button type="submit">Log in</button>
    </form>"#
    );
    Html(shell("Login", &body))
}
