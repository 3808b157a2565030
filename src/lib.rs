#![allow(rustdoc::private_intra_doc_links)]

pub mod driver;
pub mod seq;

#[cfg(test)]
mod test;
