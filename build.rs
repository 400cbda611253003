fn main() {
    // Stamped into the footer as "last compiled"
    let stamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={stamp}");

    // Page copy is embedded, so a content edit is a rebuild
    println!("cargo:rerun-if-changed=content/portfolio.json");
    println!("cargo:rerun-if-changed=build.rs");
}
