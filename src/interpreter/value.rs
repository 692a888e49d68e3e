/// Classes, methods, instances and field scopes.
pub mod class;
/// The tagged runtime value and the holder through which values are shared.
pub mod core;
