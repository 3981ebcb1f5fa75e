//! Build script for capture-native-sys
//!
//! Links to libavif when the `link` feature is enabled. The library is looked
//! up under LIBAVIF_PATH (default: system search path only).

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBAVIF_PATH");

    if std::env::var_os("CARGO_FEATURE_LINK").is_none() {
        return;
    }

    if let Ok(avif_path) = std::env::var("LIBAVIF_PATH") {
        println!("cargo:rustc-link-search=native={}/lib", avif_path);
        println!("cargo:rustc-link-search=native={}/bin", avif_path);
        println!("cargo:include={}/include", avif_path);
    }

    println!("cargo:rustc-link-lib=dylib=avif");
}
