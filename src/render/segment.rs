use super::Rect;

/// Width of a digit, in units
pub const DIGIT_WIDTH_UNITS: u32 = 5;
/// Height of a digit, in units (two segment lengths sharing the middle bar)
pub const DIGIT_HEIGHT_UNITS: u32 = 2 * DIGIT_WIDTH_UNITS - 1;

/// Lit segments for each decimal digit
///
/// Segments are numbered clockwise from the top bar, with the middle bar last:
/// ```text
///  000
/// 5   1
/// 5   1
///  666
/// 4   2
/// 4   2
///  333
/// ```
const GLYPHS: [[bool; 7]; 10] = {
    const O: bool = false;
    const X: bool = true;
    [
        [X, X, X, X, X, X, O], // 0
        [O, X, X, O, O, O, O], // 1
        [X, X, O, X, X, O, X], // 2
        [X, X, X, X, O, O, X], // 3
        [O, X, X, O, O, X, X], // 4
        [X, O, X, X, O, X, X], // 5
        [X, O, X, X, X, X, X], // 6
        [X, X, X, O, O, O, O], // 7
        [X, X, X, X, X, X, X], // 8
        [X, X, X, X, O, X, X], // 9
    ]
};

/// Returns which of the 7 segments are lit for `digit`
///
/// # Panics
/// If `digit` is greater than 9.
#[inline]
pub fn digit_segments(digit: u8) -> [bool; 7] {
    GLYPHS[digit as usize]
}

/// The rectangle covered by `segment` of a digit drawn at `(x, y)`
///
/// Horizontal bars are `5 x 1` units and vertical bars `1 x 5` units;
/// neighboring segments overlap by one unit at the corners.
///
/// # Panics
/// If `segment` is not in `0..7`.
pub fn segment_rect(segment: usize, x: i32, y: i32, unit: u32) -> Rect {
    let len = DIGIT_WIDTH_UNITS * unit;
    let inset = (len - unit) as i32;
    match segment {
        0 => Rect::new(x, y, len, unit),
        1 => Rect::new(x + inset, y, unit, len),
        2 => Rect::new(x + inset, y + inset, unit, len),
        3 => Rect::new(x, y + 2 * inset, len, unit),
        4 => Rect::new(x, y + inset, unit, len),
        5 => Rect::new(x, y, unit, len),
        6 => Rect::new(x, y + inset, len, unit),
        _ => panic!("segment {segment} out of range"),
    }
}

/// Emits one rectangle per lit segment of `digit`, in segment order
pub fn draw_digit(digit: u8, x: i32, y: i32, unit: u32) -> Vec<Rect> {
    digit_segments(digit)
        .iter()
        .enumerate()
        .filter(|&(_, &lit)| lit)
        .map(|(segment, _)| segment_rect(segment, x, y, unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(digit: u8) -> Vec<usize> {
        digit_segments(digit)
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn eight_lights_every_segment() {
        assert_eq!(lit(8), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(draw_digit(8, 0, 0, 10).len(), 7);
    }

    #[test]
    fn one_lights_the_right_verticals() {
        assert_eq!(lit(1), vec![1, 2]);
        assert_eq!(
            draw_digit(1, 0, 0, 10),
            vec![segment_rect(1, 0, 0, 10), segment_rect(2, 0, 0, 10)]
        );
    }

    #[test]
    fn segment_counts_match_a_seven_segment_display() {
        let counts: Vec<usize> = (0..10).map(|d| lit(d).len()).collect();

        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn only_zero_one_and_seven_leave_the_middle_dark() {
        let dark: Vec<u8> = (0..10).filter(|&d| !digit_segments(d)[6]).collect();

        assert_eq!(dark, vec![0, 1, 7]);
    }

    #[test]
    #[should_panic]
    fn digits_above_nine_are_rejected() {
        digit_segments(10);
    }

    #[test]
    fn segment_geometry() {
        let (x, y) = (100, 50);

        assert_eq!(segment_rect(0, x, y, 10), Rect::new(100, 50, 50, 10));
        assert_eq!(segment_rect(1, x, y, 10), Rect::new(140, 50, 10, 50));
        assert_eq!(segment_rect(2, x, y, 10), Rect::new(140, 90, 10, 50));
        assert_eq!(segment_rect(3, x, y, 10), Rect::new(100, 130, 50, 10));
        assert_eq!(segment_rect(4, x, y, 10), Rect::new(100, 90, 10, 50));
        assert_eq!(segment_rect(5, x, y, 10), Rect::new(100, 50, 10, 50));
        assert_eq!(segment_rect(6, x, y, 10), Rect::new(100, 90, 50, 10));
    }

    #[test]
    fn digit_fits_its_bounding_box() {
        let unit = 3;
        let rects = draw_digit(8, 7, 11, unit);

        let right = rects.iter().map(Rect::right).max();
        let bottom = rects.iter().map(Rect::bottom).max();
        assert_eq!(right, Some(7 + (DIGIT_WIDTH_UNITS * unit) as i32));
        assert_eq!(bottom, Some(11 + (DIGIT_HEIGHT_UNITS * unit) as i32));
    }
}
