use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

// lightningcss encodes versions as major << 16 | minor << 8 | patch
const fn version(major: u32) -> Option<u32> {
    Some(major << 16)
}

/// Oldest browsers the dashboard supports; newer syntax such as `inset`
/// is lowered or prefixed for them.
fn browser_targets() -> Targets {
    Targets::from(Browsers {
        chrome: version(100),
        edge: version(100),
        firefox: version(100),
        safari: version(14),
        ios_saf: version(14),
        ..Browsers::default()
    })
}

fn main() {
    // Track each sheet so editing an @import-ed file also triggers a rebuild
    println!("cargo:rerun-if-changed={CSS_DIR}");
    if let Ok(entries) = fs::read_dir(CSS_DIR) {
        for entry in entries.flatten() {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    fs::create_dir_all(CSS_OUT_DIR).expect("Failed to create assets/dist directory");

    let targets = browser_targets();
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {CSS_ENTRY}: {e}"));

    stylesheet
        .minify(MinifyOptions {
            targets,
            ..Default::default()
        })
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(CSS_BUNDLE, css.code).expect("Failed to write bundle.css");
}
