//! Proxy estimators: each turns one parameter's categorical answers into a
//! numeric estimate by adding fixed deltas to a baseline.

pub mod creatinine;
pub mod hba1c;
pub mod hdl;
pub mod sbp;
pub mod tchol;

pub use creatinine::estimate_scr;
pub use hba1c::estimate_hba1c;
pub use hdl::estimate_hdl;
pub use sbp::estimate_sbp;
pub use tchol::estimate_tchol;

pub fn round_to(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}
