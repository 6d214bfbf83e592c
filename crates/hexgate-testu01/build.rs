//! Emits the link directives for TestU01 when the `testu01` feature is on.
//!
//! TestU01 installs three libraries: `testu01` (batteries), `probdist` and
//! `mylib` (support code), and depends on libm. `TESTU01_LIB_DIR`, when set,
//! is added to the native search path.
use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=TESTU01_LIB_DIR");

    if env::var_os("CARGO_FEATURE_TESTU01").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("TESTU01_LIB_DIR") {
        println!(
            "cargo:rustc-link-search=native={}",
            PathBuf::from(dir).display()
        );
    }

    for lib in ["testu01", "probdist", "mylib", "m"] {
        println!("cargo:rustc-link-lib={lib}");
    }
}
