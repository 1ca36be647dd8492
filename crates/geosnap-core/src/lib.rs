pub mod capture;
pub mod consts;
pub mod error;
pub mod geo;
pub mod georef;
pub mod io;
pub mod pipeline;
