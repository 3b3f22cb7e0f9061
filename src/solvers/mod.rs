pub mod euler_maruyama;
pub mod path;
