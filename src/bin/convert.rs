use std::io::{self, Read};
use std::process;

fn main() {
    let mut markdown = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut markdown) {
        eprintln!("error: failed to read stdin: {err}");
        process::exit(1);
    }
    match markdown2html::convert(&markdown) {
        Ok(html) => print!("{html}"),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
