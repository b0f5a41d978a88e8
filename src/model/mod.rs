//! Regression models

mod linear;

pub use linear::LinearRegression;
