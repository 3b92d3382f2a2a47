use std::path::Path;
use std::{env, fs};

// Ships the workspace config.toml next to the compiled binary so the
// service finds it with no install step.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR sits under target/<profile>/build/backend-*/out; walk up
    // to target/<profile> where the binary lands.
    let profile_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("target profile directory not found");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root not found");

    let source = workspace_root.join("config.toml");
    if source.exists() {
        let dest = profile_dir.join("config.toml");
        fs::copy(&source, &dest).unwrap_or_else(|e| panic!("failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default applies",
            source
        );
    }
}
