//! `ls -l`-style confirmation line for an installed file.

use crate::runtime::FileMetadata;

/// Render permission bits the way `ls -l` does, e.g. `0o755` -> `rwxr-xr-x`.
pub fn format_mode(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    FLAGS
        .iter()
        .map(|(bit, c)| if mode & bit != 0 { *c } else { '-' })
        .collect()
}

/// One listing line for a regular file: permissions, size, name.
pub fn format_listing(metadata: &FileMetadata, name: &str) -> String {
    format!("-{} {} {}", format_mode(metadata.mode), metadata.len, name)
}
