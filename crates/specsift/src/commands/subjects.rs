use specsift_store::{FsSpecStore, SpecStore};

pub fn run(root: &str) -> anyhow::Result<()> {
    let store = FsSpecStore::new(root);
    let subjects = store.list_subjects()?;

    let output = serde_json::json!({
        "root": root,
        "subjects": subjects,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
