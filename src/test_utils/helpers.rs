use std::{env, fs, path::PathBuf};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("xmlpath_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// `<d><d>...</d></d>` nested `depth` levels deep with `leaf` innermost.
pub fn nested_document(depth: usize, leaf: &str) -> String {
    let mut doc = "<d>".repeat(depth);
    doc.push_str(leaf);
    doc.push_str(&"</d>".repeat(depth));
    doc
}

/// A root `<list>` holding `count` `<item id="i">item i</item>` children.
pub fn wide_document(count: usize) -> String {
    let mut doc = String::from("<list>");
    for i in 0..count {
        doc.push_str(&format!(r#"<item id="{i}">item {i}</item>"#));
    }
    doc.push_str("</list>");
    doc
}
