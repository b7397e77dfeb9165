//! Package metadata and license banner.

use serde::Serialize;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
pub const LICENSE: &str = "GNU General Public License v3.0";
pub const REPOSITORY_URL: &str = "https://github.com/brunneis/easyweb3-go";

/// Build and host information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub repository: &'static str,
    pub os: &'static str,
    pub arch: &'static str,
}

pub fn package_info() -> PackageInfo {
    PackageInfo {
        name: NAME,
        version: VERSION,
        description: DESCRIPTION,
        license: LICENSE,
        repository: REPOSITORY_URL,
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    }
}

/// One-line startup banner.
pub fn banner() -> String {
    let info = package_info();
    format!(
        "{} v{} ({}/{})",
        info.name, info.version, info.os, info.arch
    )
}

pub fn license_banner() -> String {
    format!(
        "License: {}\nThis software is distributed under the {}.",
        LICENSE, LICENSE
    )
}
