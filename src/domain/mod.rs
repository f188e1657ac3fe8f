// Domain layer: value types and ports (interfaces). Every type is an
// immutable value recomputed per request; nothing here persists or mutates.

pub mod model;
pub mod ports;
