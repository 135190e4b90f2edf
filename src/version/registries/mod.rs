//! Registry implementations for resolving package releases

pub mod maven;
pub mod sbt_package;

pub use maven::MavenMetadataResolver;
pub use sbt_package::SbtPackageResolver;
