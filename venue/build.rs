// Release builds get `cfg(release)` so logging can default to quieter levels.
fn main() {
    println!("cargo::rustc-check-cfg=cfg(release)");
    println!("cargo:rerun-if-env-changed=PROFILE");
    if std::env::var("PROFILE").is_ok_and(|profile| profile == "release") {
        println!("cargo:rustc-cfg=release");
    }
}
