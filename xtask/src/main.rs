//! XTask - Unified build system for Qibla
//!
//! Cross-platform Rust task runner for building the WASM and Python bindings
//! and publishing the workspace crates.
//!
//! # Usage
//! ```sh
//! cargo xtask dist-web        # Build WASM package (web + nodejs)
//! cargo xtask dist-python     # Build Python wheel
//! cargo xtask test            # Run all tests including the network client
//! cargo xtask publish-crates  # Publish to crates.io
//! ```

use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Publish order: every crate after its internal dependencies.
const WORKSPACE_CRATES: &[(&str, &str)] = &[
    ("qibla-types", "crates/qibla-types"),
    ("qibla-geo", "crates/qibla-geo"),
    ("qibla-i18n", "crates/qibla-i18n"),
    ("qibla-catalog", "crates/qibla-catalog"),
    ("qibla-network", "crates/qibla-network"),
    ("qibla-core", "crates/qibla_core"),
    ("qibla", "crates/qibla"),
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let dry_run = args.iter().any(|a| a == "--dry-run" || a == "-n");

    match args[1].as_str() {
        "dist-web" => dist_web()?,
        "dist-python" => dist_python()?,
        "test" => test_all()?,
        "build-all" => build_all()?,
        "publish-crates" => publish_crates(dry_run)?,
        "-h" | "--help" | "help" => print_usage(),
        cmd => {
            eprintln!("❌ Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    println!(r#"
🧭 Qibla XTask - Build Automation

USAGE:
    cargo xtask <COMMAND> [OPTIONS]

BUILD COMMANDS:
    dist-web        Build WASM package for browsers and Node
                    Output: dist/web/, pkg/

    dist-python     Build Python wheel via maturin
                    Output: dist/python/

    test            Run workspace tests with all features

    build-all       Build all targets (Rust, WASM, Python)

PUBLISH COMMANDS:
    publish-crates  Publish all crates to crates.io

OPTIONS:
    --dry-run, -n   Validate without actually publishing
"#);
}

// =============================================================================
// Helper Functions
// =============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let root = PathBuf::from(manifest_dir)
        .parent()
        .context("Failed to find project root")?
        .to_path_buf();
    Ok(root)
}

fn run_cmd(cmd: &str, args: &[&str]) -> Result<()> {
    run_cmd_in_dir(&project_root()?, cmd, args)
}

fn run_cmd_in_dir(dir: &Path, cmd: &str, args: &[&str]) -> Result<()> {
    println!("  → [{}] {} {}", dir.display(), cmd, args.join(" "));

    let status = Command::new(cmd)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to start: {} {}", cmd, args.join(" ")))?;

    if !status.success() {
        bail!("Command '{}' failed with exit code: {:?}", cmd, status.code());
    }
    Ok(())
}

fn command_exists(cmd: &str) -> bool {
    let finder = if cfg!(windows) { "where" } else { "which" };
    Command::new(finder)
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

// =============================================================================
// Task: dist-web
// =============================================================================

fn dist_web() -> Result<()> {
    println!("\n🕸️  Building WASM Package...\n");

    let root = project_root()?;
    let wasm_dir = root.join("bindings").join("qibla_wasm");
    let dist_web = root.join("dist").join("web");
    let pkg_dir = root.join("pkg");

    if !command_exists("wasm-pack") {
        println!("  ⚠️ wasm-pack not found. Installing...");
        run_cmd("cargo", &["install", "wasm-pack"])?;
    }

    for (target, out_dir) in [("web", &dist_web), ("nodejs", &pkg_dir)] {
        println!("  🏗️  Building WASM ({} target)...", target);
        run_cmd_in_dir(&wasm_dir, "wasm-pack", &[
            "build",
            "--target", target,
            "--out-dir", out_dir.to_string_lossy().as_ref(),
            "--out-name", "qibla",
        ])?;
    }

    let pkg_json = pkg_dir.join("package.json");
    if pkg_json.exists() {
        let content = fs::read_to_string(&pkg_json)?;
        let patched = content.replace("\"name\": \"qibla-wasm\"", "\"name\": \"@islamic/qibla\"");
        fs::write(&pkg_json, patched)?;
        println!("  ✅ Patched package.json: name = @islamic/qibla");
    }

    println!("\n✅ WASM build complete!");
    println!("   Web: dist/web/");
    println!("   NPM: pkg/");
    Ok(())
}

// =============================================================================
// Task: dist-python
// =============================================================================

fn dist_python() -> Result<()> {
    println!("\n🐍 Building Python Package...\n");

    let root = project_root()?;
    let py_dir = root.join("bindings").join("qibla_py");
    let dist_python = root.join("dist").join("python");

    if !command_exists("maturin") {
        println!("  ⚠️ maturin not found. Installing...");
        run_cmd("pip", &["install", "maturin"])?;
    }

    fs::create_dir_all(&dist_python)?;

    run_cmd_in_dir(&py_dir, "maturin", &[
        "build",
        "--release",
        "--out", dist_python.to_string_lossy().as_ref(),
    ])?;

    println!("\n✅ Python build complete!");
    println!("   Install: pip install dist/python/qibla-*.whl");
    Ok(())
}

// =============================================================================
// Task: test
// =============================================================================

fn test_all() -> Result<()> {
    println!("\n🧪 Running tests...\n");
    run_cmd("cargo", &["test", "--workspace", "--exclude", "qibla-py"])?;
    // The timings client only compiles with `async`.
    run_cmd("cargo", &["test", "-p", "qibla-network", "--features", "async"])?;
    // Without `extension-module` the test binary links libpython.
    run_cmd("cargo", &["test", "-p", "qibla-py", "--no-default-features"])?;
    println!("\n✅ All tests passed!");
    Ok(())
}

// =============================================================================
// Task: publish-crates
// =============================================================================

fn publish_crates(dry_run: bool) -> Result<()> {
    println!("\n📦 Publishing crates to crates.io...\n");

    let root = project_root()?;

    for (crate_name, dir) in WORKSPACE_CRATES {
        println!("  📦 Publishing {}...", crate_name);

        let mut args = vec!["publish"];
        if dry_run {
            args.push("--dry-run");
        }

        let output = Command::new("cargo")
            .args(&args)
            .current_dir(root.join(dir))
            .output()
            .with_context(|| format!("Failed to run cargo publish for {}", crate_name))?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            println!("  ✅ {} published!", crate_name);
        } else if stderr.contains("already exists") {
            println!("  ⏭️  {} already published, skipping...", crate_name);
            continue;
        } else {
            eprintln!("{}", String::from_utf8_lossy(&output.stdout));
            eprintln!("{}", stderr);
            bail!("Failed to publish {}", crate_name);
        }

        if !dry_run {
            println!("  ⏳ Waiting 30s for crates.io index update...");
            std::thread::sleep(std::time::Duration::from_secs(30));
        }
    }

    println!("\n✅ Crates {}!", if dry_run { "validated" } else { "published" });
    Ok(())
}

// =============================================================================
// Task: build-all
// =============================================================================

fn build_all() -> Result<()> {
    println!("\n🚀 Building All Targets...\n");

    println!("\n🦀 Building Rust (Release)...");
    run_cmd("cargo", &["build", "--release", "-p", "qibla-core"])?;

    dist_web()?;
    dist_python()?;

    println!("\n✅✅✅ ALL BUILDS COMPLETE! ✅✅✅");
    Ok(())
}
