// crates/csv2tsv-cli/src/cmd/mod.rs

pub mod convert;
