//! Build script for DataWhisper
//!
//! Embeds build-time information (git commit, dirty status, build timestamp)
//! shown by `datawhisper version` and the startup log line.

fn main() {
    if let Err(e) = shadow_rs::ShadowBuilder::builder().build() {
        panic!("Failed to generate build info: {e}");
    }
}
