//! HTML rendering.
//!
//! Pages are small enough to build with `format!`. Anything that came from
//! a user goes through [`escape_html`] first.

use crate::db::Todo;
use axum::http::StatusCode;

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
li{margin:.25rem 0}.done .title{text-decoration:line-through;color:#888}\
.actions a{margin-left:.5rem}";

/// Escape the five characters that matter in HTML text and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn render_item(out: &mut String, todo: &Todo) {
    let (class, mark, toggle_label) = if todo.completed {
        ("done", "&#10003;", "Undo")
    } else {
        ("open", "&#9744;", "Complete")
    };

    out.push_str(&format!(
        r#"<li class="todo {class}" id="todo-{id}"><span class="mark">{mark}</span> <span class="title">{title}</span><span class="actions"><a href="/update/{id}">{toggle_label}</a><a href="/delete/{id}">Delete</a></span></li>
"#,
        id = todo.id,
        title = escape_html(&todo.title),
    ));
}

/// The main page: add form plus every todo
pub fn render_index(todos: &[Todo]) -> String {
    let mut body = String::from(
        r#"<h1>To-Do List</h1>
<form method="post" action="/add">
<input type="text" name="title" placeholder="What needs doing?" required>
<button type="submit">Add</button>
</form>
"#,
    );

    if todos.is_empty() {
        body.push_str("<p class=\"empty\">Nothing to do.</p>\n");
    } else {
        body.push_str("<ul class=\"todos\">\n");
        for todo in todos {
            render_item(&mut body, todo);
        }
        body.push_str("</ul>\n");
    }

    document("To-Do List", &body)
}

/// Error page in the same frame as the index
pub fn render_error(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<h1>{}</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to the list</a></p>\n",
        escape_html(&heading),
        escape_html(message),
    );

    document(&heading, &body)
}
