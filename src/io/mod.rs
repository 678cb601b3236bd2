mod csv;
mod proj;
mod svg;

pub(crate) use csv::*;
pub(crate) use proj::*;
pub(crate) use svg::*;
