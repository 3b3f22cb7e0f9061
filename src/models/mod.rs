pub mod gbm;
pub mod model;
