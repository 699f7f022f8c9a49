//! Build script for Book Minder
//!
//! `sqlx::migrate!` embeds the migration files at compile time, so cargo
//! has to rebuild whenever one of them changes.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
