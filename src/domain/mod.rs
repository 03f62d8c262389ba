// Domain layer: voucher models and the repository port. No storage code lives here.

pub mod model;
pub mod ports;
