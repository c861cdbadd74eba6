use minijinja::{AutoEscape, Environment, Output, State, Value};

use crate::error::{Chainable, Result};
use crate::templating::{Context, Engine};

/// Renders pages with `minijinja`.
///
/// Every template is HTML auto-escaped, whatever its name, and keeps its
/// trailing newline. Escaping leaves `/` alone, so rendered links and
/// post-render fixups see the same text the metadata holds.
#[derive(Debug)]
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_keep_trailing_newline(true);
        env.set_formatter(html_formatter);
        MiniJinjaEngine { env }
    }
}

fn html_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), minijinja::Error> {
    match value.as_str() {
        Some(text) if !value.is_safe() && matches!(state.auto_escape(), AutoEscape::Html) => {
            let escaped = Value::from_safe_string(escape_html(text));
            minijinja::escape_formatter(out, state, &escaped)
        }
        _ => minijinja::escape_formatter(out, state, value),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    escaped
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        MiniJinjaEngine::new()
    }
}

impl Engine for MiniJinjaEngine {
    fn render(&self, name: &str, template: &str, context: &Context<'_>) -> Result<String> {
        self.env.render_named_str(name, template, context).chain_with(|| error! {
            "failed to render page",
            "page" => name,
        })
    }
}
