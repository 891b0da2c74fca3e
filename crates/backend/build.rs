use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=data");

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    // config.toml and the snapshot must land next to the binary: target/debug
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let Some(target_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=Could not find target profile directory, skipping copy");
        return;
    };

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        copy(&source_config, &target_dir.join("config.toml"));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Реальный снимок, если он есть, иначе пример
    let data_dir = manifest_dir.join("data");
    let source_snapshot = [
        data_dir.join("quote_snapshot.json"),
        data_dir.join("quote_snapshot.example.json"),
    ]
    .into_iter()
    .find(|p| p.exists());

    if let Some(source_snapshot) = source_snapshot {
        let dest_dir = target_dir.join("data");
        if let Err(e) = fs::create_dir_all(&dest_dir) {
            println!("cargo:warning=Cannot create {:?}: {}", dest_dir, e);
            return;
        }
        copy(&source_snapshot, &dest_dir.join("quote_snapshot.json"));
    }
}

fn copy(source: &Path, dest: &Path) {
    match fs::copy(source, dest) {
        Ok(_) => println!("cargo:warning=Copied {:?} to {:?}", source, dest),
        Err(e) => println!("cargo:warning=Failed to copy {:?}: {}", source, e),
    }
}
