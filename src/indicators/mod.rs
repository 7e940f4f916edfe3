// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator implementations. The Bollinger engine is
// the only indicator the scanner needs; it is streaming (one price in, at
// most one point out) so callers never slice windows themselves.

pub mod bollinger;

pub use bollinger::{BollingerEngine, BollingerPoint};
