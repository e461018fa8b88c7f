// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\nIntro with **bold** and `code`.\n\n## Section\n\n* Bullet point<br>detail\n  * Nested item\n1. Numbered\n   note\n\n> quoted<br>twice\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_list(items: usize, max_depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        let indent = "  ".repeat(i % (max_depth + 1));
        content.push_str(&format!("{indent}* Item {i} with some **bold** text\n"));
    }
    content
}
