// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // registry lookups for system fonts (RegOpenKeyExW, RegQueryInfoKeyW)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
