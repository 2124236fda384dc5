pub mod category;
pub mod classification;
pub mod descriptor;
pub mod efficacy;
pub mod record;
pub mod risk;
pub mod thresholds;
