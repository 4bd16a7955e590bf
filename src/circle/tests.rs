use super::*;

fn inside(cx: i32, cy: i32, x: i32, y: i32) -> bool {
    (x - cx).pow(2) + (y - cy).pow(2) < 256
}

#[test]
fn quadrants() {
    for y in -16..16 {
        for x in -16..16 {
            let expected = if x < 0 {
                inside(0, 0, x, y)
            } else if y < 0 {
                inside(0, -16, x, y)
            } else {
                inside(0, 16, x, y)
            };
            assert_eq!(
                value(x, y),
                if expected { 255 } else { 0 },
                "at ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn corner_is_black() {
    assert_eq!(value(-16, -16), 0);
}

#[test]
fn center_is_on_boundary() {
    // 0^2 + (0 - 16)^2 == 256
    assert_eq!(value(0, 0), 0);
}

#[test]
fn top_of_right_half_is_white() {
    assert_eq!(value(0, -16), 255);
}

#[test]
fn render_order() {
    let pixels = render();
    assert_eq!(pixels.len(), 32 * 32);

    let at = |px: usize, py: usize| pixels[py * 32 + px];
    assert_eq!(at(0, 0), Color::gray(0));
    assert_eq!(at(16, 16), Color::gray(0));
    assert_eq!(at(16, 0), Color::gray(255));
    // left half: center of the whole circle
    assert_eq!(at(15, 16), Color::gray(255));
    // right half bottom row: (x, y) = (0, 15)
    assert_eq!(at(16, 31), Color::gray(255));

    for (i, c) in pixels.iter().enumerate() {
        let x = (i % 32) as i32 - 16;
        let y = (i / 32) as i32 - 16;
        assert_eq!(*c, Color::gray(value(x, y)));
    }
}

#[test]
fn right_half_is_swapped_circle() {
    // swapping the upper right and lower right blocks restores a whole circle
    for y in -16..16 {
        for x in 0..16 {
            let swapped_y = if y < 0 { y + 16 } else { y - 16 };
            assert_eq!(value(x, swapped_y) == 255, inside(0, 0, x, y));
        }
    }
}
