// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_card_news(cards: usize) -> String {
    let base = "# Card title\n\nLead with **bold** and *italic* and a [link](https://example.com).\n\n> quoted line\n> second quote line\n\n- first point\n- second point\n\n1. step one\n2. step two\n\n![cover](https://img.example.com/cover.png)\n\n:::tip\nCallout body with **markup** kept verbatim.\n:::\n\n---\n\n";
    base.repeat(cards)
}

#[allow(dead_code)]
pub fn generate_dense_inline(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("word {i} **b{i}** *i{i}* [l{i}](u{i}) "));
    }
    line
}
