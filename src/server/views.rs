//! Views module - generates the HTML pages served by docshelf.
//!
//! Pages are assembled with `format!` templates around a shared layout. All
//! document names and document-derived text are escaped before they are
//! embedded in markup, and names are percent-encoded wherever they appear
//! in a URL.

/// Escape HTML special characters to prevent XSS attacks.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Percent-encode a document name for use in a URL path segment.
fn url_name(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

// =============================================================================
// Layout
// =============================================================================

/// Wrap a page body in the shared layout.
///
/// The layout renders the one-shot flash message (if any), the page body,
/// and a status bar showing either the signed-in username with a sign-out
/// button or a sign-in link.
pub fn layout(title: &str, flash: Option<&str>, username: Option<&str>, body: &str) -> String {
    let flash_html = match flash {
        Some(message) => format!(
            r#"<div class="flash"><p>{}</p></div>"#,
            html_escape(message)
        ),
        None => String::new(),
    };

    let status_html = match username {
        Some(user) => format!(
            concat!(
                r#"<p>Signed in as {}.</p>"#,
                r#"<form class="inline" method="post" action="/users/signout">"#,
                r#"<button type="submit">Sign Out</button></form>"#
            ),
            html_escape(user)
        ),
        None => r#"<p><a href="/users/signin_page">Sign In</a></p>"#.to_string(),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            max-width: 48rem;
            margin: 2rem auto;
            padding: 0 1rem;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #1f2430;
        }}
        a {{ color: #3558c0; }}
        .flash {{
            background: #eef3ff;
            border: 1px solid #b9c9f0;
            border-radius: 4px;
            padding: 0.25rem 0.75rem;
            margin-bottom: 1rem;
        }}
        .error {{ color: #b03030; }}
        .documents {{ list-style: none; padding: 0; }}
        .documents li {{ margin: 0.25rem 0; }}
        .documents .controls {{ margin-left: 0.5rem; font-size: 0.85rem; }}
        form.inline {{ display: inline; }}
        form.inline button {{
            border: none;
            background: none;
            padding: 0;
            color: #3558c0;
            text-decoration: underline;
            cursor: pointer;
            font-size: inherit;
        }}
        label {{ display: block; margin-top: 0.75rem; }}
        textarea {{ width: 100%; font-family: monospace; }}
        footer {{
            margin-top: 2rem;
            padding-top: 0.5rem;
            border-top: 1px solid #d8dce5;
            font-size: 0.9rem;
        }}
    </style>
</head>
<body>
    {flash_html}
    {body}
    <footer>{status_html}</footer>
</body>
</html>
"##,
        title = html_escape(title),
        flash_html = flash_html,
        body = body,
        status_html = status_html,
    )
}

// =============================================================================
// Pages
// =============================================================================

/// The document listing page.
///
/// Edit and delete controls and the new-document link only appear for a
/// signed-in session.
pub fn index_page(documents: &[String], flash: Option<&str>, username: Option<&str>) -> String {
    let signed_in = username.is_some();

    let mut items = String::new();
    for name in documents {
        let controls = if signed_in {
            format!(
                concat!(
                    r#"<span class="controls"><a href="/{enc}/edit">edit</a> "#,
                    r#"<form class="inline" method="post" action="/{enc}/delete">"#,
                    r#"<button type="submit">delete</button></form></span>"#
                ),
                enc = url_name(name)
            )
        } else {
            String::new()
        };

        items.push_str(&format!(
            "<li><a href=\"/{}\">{}</a>{}</li>\n",
            url_name(name),
            html_escape(name),
            controls
        ));
    }

    let new_link = if signed_in {
        r#"<p><a href="/new/document">New Document</a></p>"#
    } else {
        ""
    };

    let body = format!(
        "<h1>Documents</h1>\n<ul class=\"documents\">\n{items}</ul>\n{new_link}",
        items = items,
        new_link = new_link,
    );

    layout("Documents", flash, username, &body)
}

/// A rendered markdown document.
pub fn document_page(
    name: &str,
    rendered: &str,
    flash: Option<&str>,
    username: Option<&str>,
) -> String {
    let body = format!(
        "<article class=\"document\">\n{rendered}</article>\n<p><a href=\"/\">All documents</a></p>",
        rendered = rendered,
    );
    layout(name, flash, username, &body)
}

/// The edit form, pre-filled with the document's current content.
pub fn edit_page(name: &str, content: &str, flash: Option<&str>, username: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Edit {escaped}</h1>
<form method="post" action="/{enc}">
    <textarea name="content" rows="20">{content}</textarea>
    <button type="submit">Save Changes</button>
</form>
<p><a href="/">Cancel</a></p>"#,
        escaped = html_escape(name),
        enc = url_name(name),
        content = html_escape(content),
    );
    layout(&format!("Edit {name}"), flash, username, &body)
}

/// The new-document form.
///
/// `error` is the inline validation message shown on a 422 redisplay;
/// `filename` and `content` echo the submitted values back.
pub fn new_document_page(
    error: Option<&str>,
    filename: &str,
    content: &str,
    flash: Option<&str>,
    username: Option<&str>,
) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, html_escape(message)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Add a new document</h1>
{error_html}
<form method="post" action="/new/document">
    <label for="filename">Document name</label>
    <input name="filename" id="filename" value="{filename}">
    <label for="content">Content</label>
    <textarea name="content" id="content" rows="20">{content}</textarea>
    <button type="submit">Create</button>
</form>
<p><a href="/">Cancel</a></p>"#,
        error_html = error_html,
        filename = html_escape(filename),
        content = html_escape(content),
    );
    layout("New Document", flash, username, &body)
}

/// The sign-in form.
pub fn signin_page(error: Option<&str>, username_value: &str, flash: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, html_escape(message)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Sign In</h1>
{error_html}
<form method="post" action="/users/signin">
    <label for="username">Enter username</label>
    <input name="username" id="username" value="{username}">
    <label for="password">Enter password</label>
    <input type="password" name="password" id="password">
    <button type="submit">Sign In</button>
</form>"#,
        error_html = error_html,
        username = html_escape(username_value),
    );
    layout("Sign In", flash, None, &body)
}

// =============================================================================
// Tests
// =============================================================================
