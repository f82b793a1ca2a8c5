// File: crates/chart-core/build.rs
// Summary: Link the extra Windows system library skia-safe's prebuilt binaries expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Font manager registry lookups (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
