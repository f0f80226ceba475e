// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\n\n- Bullet point with a [link](https://example.com)\n- Another item\n\n1. First\n2. Second\n\n> Quoted line\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!(
            "word {i} **bold {i}** then _italic_ and `code` with ![img {i}](/{i}.png) and [link {i}](/{i}) "
        ));
    }
    line
}
