//! Build script for mixtape-storage.
//!
//! `sqlx::migrate!` embeds the migration files at compile time, so rebuild when they change.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
