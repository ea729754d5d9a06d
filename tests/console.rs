// tests/console.rs

//! Host-side checks of the console geometry against plain slices

use vga_console::{Cell, ColorCode, Console, ScrollDirection, VgaColor};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 25;
const CELLS: usize = WIDTH as usize * HEIGHT as usize;

const BLANK: u16 = 0x0720;

fn numbered(len: usize) -> Vec<u16> {
    // Never equal to BLANK for the sizes used here
    (0..len).map(|i| 0x8000 | i as u16).collect()
}

fn rect_contains(x0: u16, y0: u16, w: u16, h: u16, x: usize, y: usize) -> bool {
    let (x0, y0) = (x0 as usize, y0 as usize);
    x >= x0 && x < x0 + w as usize && y >= y0 && y < y0 + h as usize
}

#[test]
fn clear_oversized_rect_clears_whole_grid() {
    let mut cells = numbered(CELLS);
    let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
    console.clear(0, 0, 500, 500);
    drop(console);
    assert!(cells.iter().all(|&cell| cell == BLANK));
}

#[test]
fn clear_anchored_past_edges_clears_nothing() {
    let mut cells = numbered(CELLS);
    let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
    console.clear(90, 25, 20, 20);
    drop(console);
    assert_eq!(cells, numbered(CELLS));
}

#[test]
fn clear_bottom_right_corner_is_truncated() {
    let mut cells = numbered(CELLS);
    let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
    console.clear(70, 20, 20, 20);
    drop(console);

    let before = numbered(CELLS);
    for (i, &cell) in cells.iter().enumerate() {
        let (x, y) = (i % WIDTH as usize, i / WIDTH as usize);
        if (70..80).contains(&x) && (20..25).contains(&y) {
            assert_eq!(cell, BLANK, "({x}, {y}) should be cleared");
        } else {
            assert_eq!(cell, before[i], "({x}, {y}) should be untouched");
        }
    }
}

#[test]
fn write_sets_only_target_cell() {
    let attr = ColorCode::new(VgaColor::Yellow, VgaColor::Blue);
    let mut cells = vec![0u16; CELLS];
    let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
    console.write(b'!', attr, 0, 0);
    drop(console);

    assert_eq!(cells[0], (attr.as_u8() as u16) << 8 | b'!' as u16);
    assert!(cells[1..].iter().all(|&cell| cell == 0));
}

#[test]
fn write_off_grid_changes_nothing() {
    let mut cells = vec![0u16; CELLS];
    let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
    console.write(b'!', VgaColor::Red, 80, 25);
    console.write(b'!', VgaColor::Red, 80, 0);
    console.write(b'!', VgaColor::Red, 0, 25);
    drop(console);
    assert!(cells.iter().all(|&cell| cell == 0));
}

#[test]
fn clear_matches_clipping_rule_on_small_grid() {
    let (width, height) = (5u16, 4u16);
    let len = width as usize * height as usize;

    for x in 0..7 {
        for y in 0..6 {
            for w in 0..8 {
                for h in 0..7 {
                    let mut cells = numbered(len);
                    let mut console = Console::new(width, height, &mut cells).unwrap();
                    console.clear(x, y, w, h);
                    drop(console);

                    let before = numbered(len);
                    for (i, &cell) in cells.iter().enumerate() {
                        let (cx, cy) = (i % width as usize, i / width as usize);
                        let inside = x < width
                            && y < height
                            && rect_contains(
                                x,
                                y,
                                w.min(width.saturating_sub(x)),
                                h.min(height.saturating_sub(y)),
                                cx,
                                cy,
                            );
                        let expected = if inside { BLANK } else { before[i] };
                        assert_eq!(cell, expected, "clear({x}, {y}, {w}, {h}) at ({cx}, {cy})");
                    }
                }
            }
        }
    }
}

#[test]
fn scroll_up_moves_rows_toward_top() {
    let (width, height) = (7u16, 6u16);
    let w = width as usize;
    let len = w * height as usize;

    for lines in 0..height {
        let mut cells = numbered(len);
        let mut console = Console::new(width, height, &mut cells).unwrap();
        console.scroll(ScrollDirection::Up, lines);
        drop(console);

        let before = numbered(len);
        let shift = lines as usize;
        for r in 0..(height as usize - shift) {
            assert_eq!(
                cells[r * w..(r + 1) * w],
                before[(r + shift) * w..(r + shift + 1) * w],
                "up {lines}: row {r}"
            );
        }
    }
}

#[test]
fn scroll_down_moves_rows_toward_bottom() {
    let (width, height) = (7u16, 6u16);
    let w = width as usize;
    let len = w * height as usize;

    for lines in 0..height {
        let mut cells = numbered(len);
        let mut console = Console::new(width, height, &mut cells).unwrap();
        console.scroll(ScrollDirection::Down, lines);
        drop(console);

        let before = numbered(len);
        let shift = lines as usize;
        for r in shift..height as usize {
            assert_eq!(
                cells[r * w..(r + 1) * w],
                before[(r - shift) * w..(r - shift + 1) * w],
                "down {lines}: row {r}"
            );
        }
    }
}

#[test]
fn scroll_by_full_height_or_more_changes_nothing() {
    for lines in [HEIGHT, HEIGHT + 1, u16::MAX] {
        for direction in [ScrollDirection::Up, ScrollDirection::Down] {
            let mut cells = numbered(CELLS);
            let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
            console.scroll(direction, lines);
            drop(console);
            assert_eq!(cells, numbered(CELLS));
        }
    }
}

#[test]
fn scroll_then_clear_gives_clean_bottom_line() {
    let mut cells = vec![0u16; CELLS];
    let mut console = Console::new(WIDTH, HEIGHT, &mut cells).unwrap();
    for row in 0..HEIGHT {
        console.write(b'0' + (row % 10) as u8, ColorCode::normal(), 0, row);
    }

    console.scroll(ScrollDirection::Up, 1);
    console.clear(0, HEIGHT - 1, WIDTH, 1);

    assert_eq!(console.read(0, 0), Some(Cell::new(b'1', ColorCode::normal())));
    assert_eq!(console.read(0, HEIGHT - 2), Some(Cell::new(b'4', ColorCode::normal())));
    assert_eq!(console.read(0, HEIGHT - 1), Some(Cell::BLANK));
}

#[test]
fn trailing_cells_are_never_touched() {
    let (width, height) = (4u16, 3u16);
    let grid = width as usize * height as usize;
    let mut cells = numbered(grid + 5);
    let mut console = Console::new(width, height, &mut cells).unwrap();

    console.clear(0, 0, u16::MAX, u16::MAX);
    console.scroll(ScrollDirection::Down, 1);
    console.scroll(ScrollDirection::Up, 2);
    console.write(b'z', ColorCode::warning(), width - 1, height - 1);
    console.write(b'z', ColorCode::warning(), width, height - 1);
    drop(console);

    assert_eq!(cells[grid..], numbered(grid + 5)[grid..]);
}

#[test]
fn short_buffer_is_rejected() {
    let mut cells = vec![0u16; CELLS - 1];
    assert!(Console::new(WIDTH, HEIGHT, &mut cells).is_err());
}
