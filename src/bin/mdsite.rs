// Build a static site: copy the static directory into the destination,
// then generate one HTML page per Markdown file in the content tree.
//
// Usage: mdsite [content-dir] [template] [static-dir] [dest-dir]

use std::env;
use std::path::Path;
use std::process;

use markdown2html::{site, MarkdownToHtmlError};

fn main() {
    let args: Vec<String> = env::args().collect();
    let content = args.get(1).map_or("content", String::as_str);
    let template = args.get(2).map_or("template.html", String::as_str);
    let static_dir = args.get(3).map_or("static", String::as_str);
    let dest = args.get(4).map_or("public", String::as_str);

    if let Err(err) = run(
        Path::new(content),
        Path::new(template),
        Path::new(static_dir),
        Path::new(dest),
    ) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(
    content: &Path,
    template: &Path,
    static_dir: &Path,
    dest: &Path,
) -> Result<(), MarkdownToHtmlError> {
    if static_dir.is_dir() {
        site::copy_dir_recursive(static_dir, dest)?;
    } else {
        std::fs::create_dir_all(dest)?;
    }
    site::generate_pages_recursive(content, template, dest)
}
