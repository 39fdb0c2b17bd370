// Adapters layer: concrete packages the helpers consume through `domain::ports`.

pub mod pkg_a;
