use {
    crate::basis::{Color, ProblemHeader},
    std::io::{self, Write},
};

// http://netpbm.sourceforge.net/doc/ppm.html
pub const MAGIC: &str = "P6";
pub const MAX_COLOR_VALUE: u8 = 255;

/// 問題画像のヘッダ部分を作る.
pub fn header(problem: &ProblemHeader, width: u16, height: u16) -> String {
    let mut header = format!("{}\n", MAGIC);
    for line in &problem.comment_lines() {
        header += line;
    }
    header += &format!("{} {}\n", width, height);
    header += &format!("{}\n", MAX_COLOR_VALUE);
    header
}

/// `pixels` を左上から行優先で並べた P6 形式の問題画像として書き出す.
pub fn write_ppm(
    mut writer: impl Write,
    problem: &ProblemHeader,
    width: u16,
    height: u16,
    pixels: &[Color],
) -> io::Result<()> {
    if pixels.len() != width as usize * height as usize {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "expected {} pixels for {}x{}, but found {}",
                width as usize * height as usize,
                width,
                height,
                pixels.len()
            ),
        ));
    }

    let data = pixels
        .iter()
        .flat_map(|c| [c.r, c.g, c.b])
        .collect::<Vec<_>>();

    writer.write_all(header(problem, width, height).as_bytes())?;
    writer.write_all(&data)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBLEM: ProblemHeader = ProblemHeader {
        cols: 3,
        rows: 2,
        select_limit: 4,
        select_cost: 2,
        swap_cost: 1,
    };

    #[test]
    fn header_layout() {
        assert_eq!(
            header(&PROBLEM, 180, 120),
            "P6\n# 3 2\n# 4\n# 2 1\n180 120\n255\n"
        );
    }

    #[test]
    fn pixels_follow_header() {
        let pixels = [
            Color { r: 1, g: 2, b: 3 },
            Color::gray(0),
            Color::gray(255),
            Color { r: 4, g: 5, b: 6 },
        ];
        let mut buf = vec![];
        write_ppm(&mut buf, &PROBLEM, 2, 2, &pixels).unwrap();

        let header_len = header(&PROBLEM, 2, 2).len();
        assert_eq!(buf.len(), header_len + 12);
        assert_eq!(
            &buf[header_len..],
            &[1, 2, 3, 0, 0, 0, 255, 255, 255, 4, 5, 6]
        );
    }

    #[test]
    fn mismatched_pixel_count() {
        let mut buf = vec![];
        let err = write_ppm(&mut buf, &PROBLEM, 2, 2, &[Color::gray(0)]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.is_empty());
    }
}
