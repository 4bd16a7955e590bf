#[cfg(test)]
mod tests;

use crate::basis::Color;

/// 円の半径. 画像の一辺はその 2 倍になる.
pub const RADIUS: i32 = 16;
pub const SIDE_LENGTH: u16 = (RADIUS * 2) as u16;

const WHITE: u8 = 255;
const BLACK: u8 = 0;

/// 画像中心を原点とした座標 `(x, y)` のピクセル値を計算する.
///
/// 左半分は中心の円そのまま, 右半分は上側の円を 16 だけ上へ, 下側の円を 16 だけ下へずらしたものになる.
/// 円周上の点は含まない.
pub fn value(x: i32, y: i32) -> u8 {
    debug_assert!((-RADIUS..RADIUS).contains(&x));
    debug_assert!((-RADIUS..RADIUS).contains(&y));

    let shift = if x < 0 {
        0
    } else if y < 0 {
        -RADIUS
    } else {
        RADIUS
    };
    if x * x + (y - shift) * (y - shift) < RADIUS * RADIUS {
        WHITE
    } else {
        BLACK
    }
}

/// 画像全体を上の行から, 各行を左から並べる.
pub fn render() -> Vec<Color> {
    let mut pixels = Vec::with_capacity(SIDE_LENGTH as usize * SIDE_LENGTH as usize);
    for y in -RADIUS..RADIUS {
        for x in -RADIUS..RADIUS {
            pixels.push(Color::gray(value(x, y)));
        }
    }
    pixels
}
