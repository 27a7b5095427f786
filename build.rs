use std::process::Command;

/// Version for `som-fetch --version`: the nearest git tag without its `v`
/// prefix, or the manifest version marked `+nogit` outside a checkout.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let version = describe_head()
        .unwrap_or_else(|| format!("{}+nogit", env!("CARGO_PKG_VERSION")));

    println!("cargo:rustc-env=SOM_FETCH_VERSION={version}");
}

fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    if described.is_empty() {
        return None;
    }

    Some(described.strip_prefix('v').unwrap_or(described).to_string())
}
