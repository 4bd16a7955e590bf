/// `Color` は 24 ビットの RGB カラーを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// R, G, B すべてが `value` の灰色を作る.
    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

/// `Pos` は断片画像の座標を表す.
///
/// フィールドの `u8` の上位 4 ビットに X 座標, 下位 4 ビットに Y 座標を格納する.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pos(u8);

impl std::fmt::Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Pos {
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < 16 && y < 16);
        Self(x << 4 | y)
    }

    pub fn x(&self) -> u8 {
        self.0 >> 4 & 0xf
    }

    pub fn y(&self) -> u8 {
        self.0 & 0xf
    }
}

/// `Movement` はある断片画像を動かして入れ替える向きを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Right,
    Down,
    Left,
}

impl Movement {
    pub fn as_char(self) -> char {
        match self {
            Movement::Up => 'U',
            Movement::Right => 'R',
            Movement::Down => 'D',
            Movement::Left => 'L',
        }
    }
}

/// `Operation` は座標 `select` の断片画像を選択してから `movements` の入れ替えを行う操作を表す.
#[derive(Debug, Clone)]
pub struct Operation {
    pub select: Pos,
    pub movements: Vec<Movement>,
}

/// `Rot` はある断片画像を原画像の状態から時計回りに回転させた角度を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rot {
    R0,
    R90,
    R180,
    R270,
}

impl Rot {
    pub fn as_num(self) -> u8 {
        match self {
            Rot::R0 => 0,
            Rot::R90 => 1,
            Rot::R180 => 2,
            Rot::R270 => 3,
        }
    }
}

/// `ProblemHeader` は問題画像のコメント行に埋め込む値を表す.
///
/// 分割数 `cols` `rows`, 選択回数の上限 `select_limit`, 選択コスト `select_cost` と交換コスト `swap_cost` の順に並ぶ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemHeader {
    pub cols: u8,
    pub rows: u8,
    pub select_limit: u8,
    pub select_cost: u16,
    pub swap_cost: u16,
}

impl ProblemHeader {
    /// コメント行を改行付きで並べる.
    pub fn comment_lines(&self) -> [String; 3] {
        [
            format!("# {} {}\n", self.cols, self.rows),
            format!("# {}\n", self.select_limit),
            format!("# {} {}\n", self.select_cost, self.swap_cost),
        ]
    }
}

#[test]
fn pos_packing() {
    let pos = Pos::new(10, 1);
    assert_eq!(pos.x(), 10);
    assert_eq!(pos.y(), 1);
    assert_eq!(format!("{:?}", pos), "(10, 1)");
}

#[test]
fn gray_fills_every_channel() {
    assert_eq!(Color::gray(0x80), Color { r: 0x80, g: 0x80, b: 0x80 });
}
