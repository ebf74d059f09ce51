// Domain layer: request/response models, presets and ports (interfaces).

pub mod model;
pub mod ports;
pub mod presets;
