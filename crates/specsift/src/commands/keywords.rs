use specsift_core::extract_keywords;

pub fn run(query: &str) -> anyhow::Result<()> {
    let keywords = extract_keywords(query);

    let output = serde_json::json!({
        "query": query,
        "keywords": keywords,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
