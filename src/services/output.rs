use serde::Serialize;

/// Pretty-prints a document to stdout (2-space indentation, the ansible
/// dynamic-inventory convention).
pub fn print_document<T: Serialize>(doc: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(doc)?);
    Ok(())
}

/// `--host` answer: hostvars are already inlined under `_meta` in `--list`.
pub fn print_empty_object() {
    println!("{{}}");
}
