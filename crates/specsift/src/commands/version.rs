pub fn run() -> anyhow::Result<()> {
    println!("specsift {}", env!("CARGO_PKG_VERSION"));
    println!("Keyword retrieval over qualification specification text");
    Ok(())
}
