pub mod stock;
pub mod tab;
