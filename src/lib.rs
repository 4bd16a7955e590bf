//! 練習用の問題画像と解答を生成する.

pub mod basis;
pub mod case;
pub mod circle;
pub mod kaitou;
pub mod ppm;
