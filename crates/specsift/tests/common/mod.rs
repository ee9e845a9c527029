use tempfile::TempDir;

/// Write per-subject spec text files into a temp storage root
pub fn spec_root(specs: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (id, text) in specs {
        std::fs::write(temp.path().join(format!("{id}.txt")), text).unwrap();
    }
    temp
}

/// Synthetic specification long enough to produce several chunks, with
/// topically distinct sections
pub fn sample_spec_text() -> String {
    let mut text = String::new();
    text.push_str(&"course aims and entry requirements for learners ".repeat(25));
    text.push_str(&"unit one cell biology osmosis and diffusion practical ".repeat(25));
    text.push_str(&"unit two genetics inheritance and variation content ".repeat(25));
    text.push_str(&"assessment objectives grading criteria and exam structure ".repeat(25));
    text
}
