//! Server-rendered UI.
//!
//! The tree is rendered by a recursive function keyed by path; the browser
//! script keeps expand/collapse state in a set of paths so it survives the
//! periodic re-render.

use crate::config::ServerConfig;
use crate::tree::{PathOption, TreeNode, TreeSnapshot};
use std::fmt::Write;

const STYLE: &str = include_str!("assets/app.css");
const SCRIPT: &str = include_str!("assets/app.js");

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Full page: toolbar, tree, path options, dialogs and script.
pub fn render_page(snapshot: &TreeSnapshot, config: &ServerConfig) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Shared Files</title>
<style>{style}</style>
</head>
<body data-static-prefix="{prefix}" data-refresh-secs="{refresh}">
<header class="toolbar">
  <h1>Shared Files</h1>
  <div class="toolbar-actions">
    <button type="button" data-open="create-folder-dialog">New Folder</button>
    <button type="button" data-open="create-file-dialog">New File</button>
    <button type="button" data-open="upload-dialog">Upload</button>
  </div>
</header>
<main id="tree-view">{tree}</main>
{dialogs}
<div id="toasts" aria-live="polite"></div>
<script>{script}</script>
</body>
</html>
"#,
        style = STYLE,
        prefix = escape_html(&config.normalized_static_prefix()),
        refresh = config.refresh_interval_secs,
        tree = render_tree_view(snapshot),
        dialogs = DIALOGS,
        script = SCRIPT,
    );
    html
}

/// Tree fragment plus the hidden destination option list.
pub fn render_tree_view(snapshot: &TreeSnapshot) -> String {
    let mut html = String::new();
    if snapshot.tree.is_empty() {
        html.push_str(r#"<p class="empty">This folder is empty</p>"#);
    } else {
        html.push_str(r#"<ul class="tree">"#);
        for node in &snapshot.tree {
            render_node(node, &mut html);
        }
        html.push_str("</ul>");
    }
    html.push_str(&render_path_options(&snapshot.path_options));
    html
}

fn render_node(node: &TreeNode, html: &mut String) {
    let path = escape_html(&node.path);
    let name = escape_html(&node.name);
    if node.is_folder() {
        let _ = write!(
            html,
            r#"<li class="node folder" data-path="{path}" data-type="folder"><div class="row"><button type="button" class="toggle" data-action="toggle" aria-label="Toggle">&#9662;</button><span class="icon">&#128193;</span><span class="name">{name}</span><span class="actions"><button type="button" data-action="rename">Rename</button><button type="button" data-action="delete">Delete</button></span></div><ul class="children">"#,
        );
        for child in node.children() {
            render_node(child, html);
        }
        html.push_str("</ul></li>");
    } else {
        let _ = write!(
            html,
            r#"<li class="node file" data-path="{path}" data-type="file"><div class="row"><span class="toggle-spacer"></span><span class="icon">&#128196;</span><span class="name">{name}</span><span class="actions"><button type="button" data-action="open">Open</button><button type="button" data-action="edit">Edit</button><button type="button" data-action="rename">Rename</button><button type="button" data-action="delete">Delete</button></span></div></li>"#,
        );
    }
}

fn render_path_options(options: &[PathOption]) -> String {
    let mut html = String::from(r#"<select id="path-options" hidden>"#);
    for option in options {
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            escape_html(&option.value),
            escape_html(&option.label)
        );
    }
    html.push_str("</select>");
    html
}

/// Full-page error panel with a reload action.
pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Error!</title>
<style>{style}</style>
</head>
<body class="error-page">
<div class="error-panel">
  <h1>Error</h1>
  <p>{message}</p>
  <button type="button" onclick="window.location.reload()">Reload</button>
</div>
</body>
</html>
"#,
        style = STYLE,
        message = escape_html(message),
    )
}

const DIALOGS: &str = r#"
<dialog id="create-folder-dialog">
  <form data-submit="create-folder" method="dialog">
    <h2>New Folder</h2>
    <label>Location <select name="path" class="destination"></select></label>
    <label>Name <input name="folderName" required autocomplete="off"></label>
    <menu><button value="cancel" formnovalidate>Cancel</button><button value="ok">Create</button></menu>
  </form>
</dialog>
<dialog id="create-file-dialog">
  <form data-submit="create-file" method="dialog">
    <h2>New File</h2>
    <label>Location <select name="path" class="destination"></select></label>
    <label>Name <input name="fileName" required autocomplete="off"></label>
    <label>Extension <input name="fileType" value="txt" autocomplete="off"></label>
    <label>Content <textarea name="fileContent" rows="8"></textarea></label>
    <menu><button value="cancel" formnovalidate>Cancel</button><button value="ok">Create</button></menu>
  </form>
</dialog>
<dialog id="upload-dialog">
  <form data-submit="upload" method="dialog">
    <h2>Upload File</h2>
    <label>Location <select name="path" class="destination"></select></label>
    <label>File <input type="file" name="file" required></label>
    <menu><button value="cancel" formnovalidate>Cancel</button><button value="ok">Upload</button></menu>
  </form>
</dialog>
<dialog id="rename-dialog">
  <form data-submit="rename" method="dialog">
    <h2>Rename</h2>
    <input type="hidden" name="oldPath">
    <input type="hidden" name="type">
    <label>New name <input name="newName" required autocomplete="off"></label>
    <menu><button value="cancel" formnovalidate>Cancel</button><button value="ok">Rename</button></menu>
  </form>
</dialog>
<dialog id="edit-dialog">
  <form data-submit="edit" method="dialog">
    <h2 class="edit-title">Edit</h2>
    <input type="hidden" name="path">
    <textarea name="content" rows="20"></textarea>
    <menu><button value="cancel" formnovalidate>Cancel</button><button value="ok">Save</button></menu>
  </form>
</dialog>
"#;
