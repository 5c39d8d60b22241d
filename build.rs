use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=static/");
    // sqlx::migrate! embeds these at compile time
    println!("cargo:rerun-if-changed=migrations/");

    let mut hasher = DefaultHasher::new();

    let mut entries: Vec<_> = fs::read_dir("static")?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_file() {
            entry.file_name().hash(&mut hasher);
            fs::read(&path)?.hash(&mut hasher);
        }
    }

    let hash = format!("{:016x}", hasher.finish());
    println!("cargo:rustc-env=STATIC_HASH={}", &hash[..8]);
    Ok(())
}
