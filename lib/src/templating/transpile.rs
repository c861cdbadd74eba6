//! Rewriting of section-marker page templates into engine syntax.
//!
//! Page templates use a small mustache-like vocabulary:
//!
//!   * `{{#categorized}}…{{/categorized}}` repeats for every category, binding
//!     `key`, `name` and `title`.
//!   * `{{#libraries}}…{{/libraries}}` repeats for every library of the
//!     enclosing category or, outside of one, for every library. It binds
//!     `key`, `name`, `authors`, `link` and `description`.
//!   * `{{#alphabetic}}…{{/alphabetic}}` repeats for every library.
//!   * `{{#authors}}…{{/authors}}` is inert: the markers are dropped.
//!   * `{{#flag}}…{{/flag}}` and `{{^flag}}…{{/flag}}` keep or drop their
//!     content according to a flag fixed before rendering.
//!   * `{{! … }}` is a comment and is removed.
//!
//! Every other `{{…}}` tag is a variable and passes through unchanged.

use memchr::memmem;
use rustc_hash::FxHashMap;

use crate::error::Result;

const CATEGORY_LOOP: &str = "{% for category in categories %}\
    {% set key = category.key %}\
    {% set name = category.key %}\
    {% set title = category.title %}";

const LIBRARY_BINDINGS: &str = "{% set key = library.key %}\
    {% set name = library.name %}\
    {% set authors = library.authors_formatted %}\
    {% set link = library.documentation_link %}\
    {% set description = library.description_clean %}";

const END_LOOP: &str = "{% endfor %}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section<'t> {
    Categorized,
    Alphabetic,
    Libraries { in_category: bool },
    Authors,
    Flag { name: &'t str, visible: bool },
}

impl<'t> Section<'t> {
    fn name(&self) -> &'t str {
        match self {
            Section::Categorized => "categorized",
            Section::Alphabetic => "alphabetic",
            Section::Libraries { .. } => "libraries",
            Section::Authors => "authors",
            Section::Flag { name, .. } => *name,
        }
    }

    fn open(&self) -> String {
        match self {
            Section::Categorized => CATEGORY_LOOP.into(),
            Section::Libraries { in_category: true } => {
                format!("{{% for library in category.libraries %}}{LIBRARY_BINDINGS}")
            }
            Section::Libraries { in_category: false } | Section::Alphabetic => {
                format!("{{% for library in libraries %}}{LIBRARY_BINDINGS}")
            }
            Section::Authors | Section::Flag { .. } => String::new(),
        }
    }

    fn close(&self) -> &'static str {
        match self {
            Section::Categorized | Section::Alphabetic | Section::Libraries { .. } => END_LOOP,
            Section::Authors | Section::Flag { .. } => "",
        }
    }

    /// Whether the markers of this section swallow a newline that follows
    /// them, so that markers on lines of their own leave no blank lines.
    fn owns_line(&self) -> bool {
        !matches!(self, Section::Authors)
    }

    fn hides(&self) -> bool {
        matches!(self, Section::Flag { visible: false, .. })
    }
}

/// Rewrites page templates into the render engine's syntax.
///
/// ```
/// use pagegen::templating::transpile::Transpiler;
///
/// let transpiler = Transpiler::new().flag("is_develop", false);
/// let template = "{{#is_develop}}\nsnapshot\n{{/is_develop}}\n{{^is_develop}}\nrelease {{version}}\n{{/is_develop}}\n";
/// assert_eq!(transpiler.transpile(template).unwrap(), "release {{version}}\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Transpiler {
    charset: Option<(String, String)>,
    flags: FxHashMap<String, bool>,
}

impl Transpiler {
    pub fn new() -> Self {
        Transpiler::default()
    }

    /// Rewrites the first occurrence of the encoding name `from` to `to`.
    pub fn charset(mut self, from: &str, to: &str) -> Self {
        self.charset = Some((from.into(), to.into()));
        self
    }

    /// Declares the truthiness section `name`, resolved to `value`.
    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    fn section<'t>(&self, name: &'t str, inverted: bool, stack: &[Section<'t>]) -> Option<Section<'t>> {
        if let Some(&value) = self.flags.get(name) {
            return Some(Section::Flag { name, visible: value != inverted });
        }

        if inverted {
            return None;
        }

        match name {
            "categorized" => Some(Section::Categorized),
            "alphabetic" => Some(Section::Alphabetic),
            "libraries" => Some(Section::Libraries { in_category: stack.contains(&Section::Categorized) }),
            "authors" => Some(Section::Authors),
            _ => None,
        }
    }

    pub fn transpile(&self, template: &str) -> Result<String> {
        let bytes = template.as_bytes();
        let opener = memmem::Finder::new("{{");
        let closer = memmem::Finder::new("}}");

        let mut out = String::with_capacity(template.len());
        let mut stack: Vec<Section<'_>> = vec![];
        let mut cursor = 0;
        while let Some(offset) = opener.find(&bytes[cursor..]) {
            let start = cursor + offset;
            let hidden = stack.iter().any(Section::hides);
            if !hidden {
                out.push_str(&template[cursor..start]);
            }

            let Some(len) = closer.find(&bytes[start + 2..]) else {
                return err!("unterminated tag", "line" => line_of(template, start));
            };

            let end = start + 2 + len + 2;
            let tag = &template[start..end];
            let inner = &template[start + 2..end - 2];
            cursor = end;

            let mut chars = inner.chars();
            let (sigil, name) = match chars.next() {
                Some(c @ ('#' | '^' | '/' | '!')) => (c, chars.as_str().trim()),
                Some('&' | '>' | '<' | '=' | '{') => return err! {
                    "unsupported tag",
                    "tag" => tag,
                    "line" => line_of(template, start),
                },
                _ => {
                    if !hidden {
                        out.push_str(tag);
                    }

                    continue;
                }
            };

            match sigil {
                '!' => cursor = skip_newline(template, cursor),
                '#' | '^' => {
                    let Some(section) = self.section(name, sigil == '^', &stack) else {
                        return err! {
                            "unknown block marker",
                            "marker" => tag,
                            "line" => line_of(template, start),
                        };
                    };

                    if !hidden {
                        out.push_str(&section.open());
                    }

                    if section.owns_line() {
                        cursor = skip_newline(template, cursor);
                    }

                    stack.push(section);
                }
                _ => {
                    let Some(section) = stack.pop() else {
                        return err! {
                            "close marker without an open section",
                            "marker" => tag,
                            "line" => line_of(template, start),
                        };
                    };

                    if section.name() != name {
                        return err! {
                            "mismatched close marker",
                            "expected" => format!("{{{{/{}}}}}", section.name()),
                            "found" => tag,
                            "line" => line_of(template, start),
                        };
                    }

                    if !stack.iter().any(Section::hides) {
                        out.push_str(section.close());
                    }

                    if section.owns_line() {
                        cursor = skip_newline(template, cursor);
                    }
                }
            }
        }

        if let Some(section) = stack.last() {
            return err!("unclosed block marker", "marker" => format!("{{{{#{}}}}}", section.name()));
        }

        out.push_str(&template[cursor..]);
        match &self.charset {
            Some((from, to)) if !from.is_empty() => Ok(out.replacen(from.as_str(), to, 1)),
            _ => Ok(out),
        }
    }
}

fn line_of(template: &str, position: usize) -> usize {
    memchr::memchr_iter(b'\n', &template.as_bytes()[..position]).count() + 1
}

fn skip_newline(template: &str, cursor: usize) -> usize {
    let rest = &template[cursor..];
    if rest.starts_with("\r\n") {
        cursor + 2
    } else if rest.starts_with('\n') {
        cursor + 1
    } else {
        cursor
    }
}
