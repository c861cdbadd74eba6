use std::fs;
use std::path::Path;

use pagegen::catalog::CategoryRegistry;
use pagegen::{Config, Output, Pipeline, Release};

const INDEX: &str = r#"<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=iso-8859-1">
<title>Boost C++ Libraries</title>
</head>
<body>
<h1>Boost {{version}}</h1>
{{#is_develop}}
<p class="snapshot">This is a development snapshot.</p>
{{/is_develop}}
{{^is_develop}}
<p><a href="{{release_notes_url}}">Release notes</a></p>
{{/is_develop}}
{{#unreleased_lib_count}}
<p>This release includes {{unreleased_lib_count}} new libraries.</p>
{{/unreleased_lib_count}}
</body>
</html>
"#;

const LIBRARIES: &str = r#"{{! This is a template for the library list. See the generated file at:
    http://www.boost.org/doc/libs/develop/libs/libraries.htm
}}
<html>
<head><meta charset="iso-8859-1"></head>
<body>
<h2>Libraries Listed Alphabetically</h2>
<ul>
{{#alphabetic}}
<li>{{name}} - {{description}}, from {{#authors}}{{authors}}{{/authors}}</li>
{{/alphabetic}}
</ul>
<h2>Libraries Listed by Category</h2>
{{#categorized}}
<h3>{{title}}</h3>
<ul>
{{#libraries}}
<li><a href="{{link}}">{{name}}</a></li>
{{/libraries}}
</ul>
{{/categorized}}
</body>
</html>
"#;

const RENDERED_LIBRARIES: &str = r#"<html>
<head><meta charset="utf-8"></head>
<body>
<h2>Libraries Listed Alphabetically</h2>
<ul>
<li>Accumulators - Framework for incremental calculation, and collection of statistical accumulators, from Eric Niebler</li>
<li>Any - Safe, generic container for single values of different value types, from Kevlin Henney</li>
<li>Asio - Portable networking and other low-level I/O, including sockets, timers, hostname resolution, socket iostreams, serial ports, file descriptors and Windows HANDLEs, from Chris Kohlhoff</li>
<li>Common Factor - Greatest common divisor and least common multiple, from Daryle Walker</li>
<li>IO State Savers - Save and restore I/O stream state &amp; formatting flags, from Daryle Walker</li>
<li>Math Toolkit - Special functions and more, from Hubert Holin, John Maddock and Paul Bristow</li>
</ul>
<h2>Libraries Listed by Category</h2>
<h3>Containers</h3>
<ul>
<li><a href="any/index.html">Any</a></li>
</ul>
<h3>Input/Output</h3>
<ul>
<li><a href="asio/index.html">Asio</a></li>
<li><a href="io/index.html">IO State Savers</a></li>
</ul>
<h3>Math and numerics</h3>
<ul>
<li><a href="accumulators/index.html">Accumulators</a></li>
<li><a href="math/doc/html/math_toolkit/gcd_lcm.html">Common Factor</a></li>
<li><a href="math/index.html">Math Toolkit</a></li>
</ul>
</body>
</html>
"#;

fn write(root: &Path, path: &str, content: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn release_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(root, "Jamroot", "import path ;\n\nconstant BOOST_VERSION : 1.85.0 ;\n");
    write(root, "index.html", INDEX);
    write(root, "libs/libraries.htm", LIBRARIES);
    write(root, "libs/any/meta/libraries.json", r#"{
        "key": "any",
        "name": "Any",
        "authors": ["Kevlin Henney"],
        "description": "Safe, generic container for single values of different value types.",
        "category": ["Data", "Containers"],
        "maintainers": ["Someone <someone -at- example.com>"]
    }"#);
    write(root, "libs/accumulators/meta/libraries.json", r#"{
        "key": "accumulators",
        "name": "Accumulators",
        "authors": ["Eric Niebler"],
        "description": "Framework for incremental calculation, and collection of statistical accumulators.",
        "category": ["Math"]
    }"#);
    write(root, "libs/asio/meta/libraries.json", r#"{
        "key": "asio",
        "name": "Asio",
        "authors": ["Chris Kohlhoff"],
        "description": "Portable networking and other low-level I/O, including sockets, timers, hostname resolution, socket iostreams, serial ports, file descriptors and Windows HANDLEs, from Chris Kohlhoff.",
        "category": ["IO"]
    }"#);
    write(root, "libs/io/meta/libraries.json", r#"{
        "key": "io",
        "name": "IO State Savers",
        "authors": "Daryle Walker",
        "description": "Save and restore I/O stream state & formatting flags.",
        "category": ["IO"]
    }"#);
    write(root, "libs/math/meta/libraries.json", r#"[
        {
            "key": "math",
            "name": "Math Toolkit",
            "authors": ["Hubert Holin", "John Maddock", "Paul Bristow"],
            "description": "Special functions and more.",
            "category": ["Math"]
        },
        {
            "key": "math/common_factor",
            "name": "Common Factor",
            "authors": "Daryle Walker",
            "description": "Greatest common divisor and least common multiple.",
            "documentation": "doc/html/math_toolkit/gcd_lcm.html",
            "category": ["Math"]
        }
    ]"#);
    write(root, "libs/numeric/meta/libraries.json", r#"{ "key": "numeric", "name": "Numeric" }"#);
    write(root, "libs/numeric/ublas/meta/libraries.json", r#"{
        "key": "numeric/ublas",
        "name": "uBLAS",
        "description": "uBLAS provides matrix and vector classes.",
        "category": ["Math"],
        "documentation": "doc/"
    }"#);
    write(root, "libs/detail/index.html", "<html></html>\n");

    dir
}

fn config() -> Config {
    Config {
        categories: CategoryRegistry::new([
            ("Containers", "Containers"),
            ("IO", "Input/Output"),
            ("Math", "Math and numerics"),
        ]),
        include: vec![],
        ..Config::default()
    }
}

fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path)).unwrap()
}

#[test]
fn renders_pages_in_place() {
    let dir = release_tree();
    Pipeline::new(dir.path(), config()).run(Output::InPlace).unwrap();

    assert_eq!(read(dir.path(), "libs/libraries.htm"), RENDERED_LIBRARIES);

    let index = read(dir.path(), "index.html");
    assert!(index.contains("charset=utf-8"));
    assert!(index.contains("<h1>Boost 1.85.0</h1>\n"));
    assert!(index.contains("version_1_85_0.html"));
    assert!(!index.contains("snapshot"));
    assert!(!index.contains("new libraries"));
    assert!(!index.contains("{{"));
    assert!(!index.contains("{%"));
}

#[test]
fn attribution_fixups_apply_to_escaped_output() {
    let dir = release_tree();
    write(dir.path(), "page.html", "{{#alphabetic}}\n{{description}}\n{{/alphabetic}}\n");

    let config = Config { pages: vec!["page.html".into()], ..config() };
    let pages = Pipeline::new(dir.path(), config).render().unwrap();
    let content = &pages[0].content;
    assert!(content.contains("file descriptors and Windows HANDLEs\n"));
    assert!(!content.contains("from Chris Kohlhoff"));
    assert!(content.contains("stream state &amp; formatting flags\n"));
}

#[test]
fn included_directories_load_despite_skip() {
    let dir = release_tree();
    let config = Config { include: vec!["libs/numeric/ublas".into()], ..config() };
    let catalog = Pipeline::new(dir.path(), config).catalog().unwrap();

    let ublas = catalog.get("numeric/ublas").unwrap();
    assert_eq!(ublas.library_path, "numeric/ublas");
    assert_eq!(ublas.documentation_link, "numeric/ublas/doc/index.html");
    assert!(catalog.get("numeric").is_none());

    let gcd = catalog.get("math/common_factor").unwrap();
    assert_eq!(gcd.documentation_link, "math/doc/html/math_toolkit/gcd_lcm.html");
    assert_eq!(gcd.authors_formatted, "Daryle Walker");
    assert_eq!(catalog.get("any").unwrap().documentation_link, "any/index.html");
}

#[test]
fn development_release() {
    let dir = release_tree();
    let config = Config {
        release: Release::Development,
        unreleased: vec!["accumulators".into()],
        ..config()
    };

    let pages = Pipeline::new(dir.path(), config).render().unwrap();
    let index = &pages[0];
    assert_eq!(index.name, "index.html");
    assert!(index.content.contains("<p class=\"snapshot\">This is a development snapshot.</p>\n"));
    assert!(index.content.contains("This release includes 1 new libraries."));
    assert!(!index.content.contains("Release notes"));
}

#[test]
fn malformed_metadata_writes_nothing() {
    let dir = release_tree();
    write(dir.path(), "libs/broken/meta/libraries.json", r#"{ "key": "broken", "name": "#);

    let error = Pipeline::new(dir.path(), config()).run(Output::InPlace).unwrap_err();
    assert!(error.to_string().contains("broken"));
    assert_eq!(read(dir.path(), "index.html"), INDEX);
    assert_eq!(read(dir.path(), "libs/libraries.htm"), LIBRARIES);
}

#[test]
fn keyless_record_writes_nothing() {
    let dir = release_tree();
    write(dir.path(), "libs/keyless/meta/libraries.json", r#"{ "name": "Keyless" }"#);

    let error = Pipeline::new(dir.path(), config()).run(Output::InPlace).unwrap_err();
    assert!(error.to_string().contains("missing field `key`"));
    assert_eq!(read(dir.path(), "index.html"), INDEX);
    assert_eq!(read(dir.path(), "libs/libraries.htm"), LIBRARIES);
}

#[test]
fn bad_template_writes_nothing() {
    let dir = release_tree();
    write(dir.path(), "libs/libraries.htm", "{{#categorized}}\n{{#libraries}}\n{{/categorized}}\n");

    let error = Pipeline::new(dir.path(), config()).run(Output::InPlace).unwrap_err();
    assert_eq!(error.message(), "invalid page template");
    assert_eq!(read(dir.path(), "index.html"), INDEX);
}

#[test]
fn output_is_idempotent() {
    let first = release_tree();
    let second = release_tree();
    Pipeline::new(first.path(), config()).run(Output::InPlace).unwrap();
    Pipeline::new(second.path(), config()).run(Output::InPlace).unwrap();

    for page in ["index.html", "libs/libraries.htm"] {
        assert_eq!(read(first.path(), page), read(second.path(), page));
    }

    let pipeline = Pipeline::new(second.path(), config());
    write(second.path(), "index.html", INDEX);
    write(second.path(), "libs/libraries.htm", LIBRARIES);
    assert_eq!(pipeline.render().unwrap(), pipeline.render().unwrap());
}

#[test]
fn category_members_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "Jamroot", "constant BOOST_VERSION : 1.86.0 ;\n");
    write(root, "libs/a_lib/meta/libraries.json", r#"{ "key": "a_lib", "name": "B", "category": ["Math"] }"#);
    write(root, "libs/b_lib/meta/libraries.json", r#"{ "key": "b_lib", "name": "A", "category": ["Math"] }"#);
    write(root, "page.html", "{{#categorized}}{{#libraries}}{{name}}\n{{/libraries}}{{/categorized}}");

    let config = Config { pages: vec!["page.html".into()], ..config() };
    let pages = Pipeline::new(root, config).render().unwrap();
    assert_eq!(pages[0].content, "A\nB\n");
}
