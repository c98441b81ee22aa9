pub mod candle;
pub mod range;
pub mod recommendation;
