// Domain layer: the account, its operations and the console port.

pub mod account;
pub mod model;
pub mod ports;
