pub mod graph;
pub mod cust_error;
pub mod approach;
pub mod branching;
pub mod approx;
pub mod harness;
pub mod driver;
