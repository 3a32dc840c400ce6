#[macro_use]
extern crate quickcheck_macros;

mod ordered;
