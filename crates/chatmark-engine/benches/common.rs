// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(size: usize) -> String {
    let base = "Here are the rules:\n- Use **der** for masculine\n- Use `die` for feminine\n\n**Example:** Der Mann\n\n";
    base.repeat(size)
}

/// A reply with no blank lines at all, so every render takes the recovery path.
#[allow(dead_code)]
pub fn generate_unbroken_reply(size: usize) -> String {
    let base = "Der Artikel hängt vom Geschlecht ab.\n**Erklärung:** Nomen nehmen `der`.\n💡 Tipp: Lerne **jedes** Nomen mit Artikel.\n1. ___ Tisch\n";
    base.repeat(size)
}
