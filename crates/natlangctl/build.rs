// Build script for natlangctl - embeds version at compile time

fn main() {
    // Release builds may pin NATLANG_VERSION; otherwise use the crate version
    let version =
        std::env::var("NATLANG_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=NATLANG_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=NATLANG_VERSION");
}
