/// Visual attributes derived from a slide's position
use serde::Serialize;

/// Lowest stacking value the center slide gets
pub const CENTER_Z_INDEX: u64 = 999_999;

/// Distance from the container's left edge.
///
/// Offset by one unit so slot 0 is not flush against the edge.
pub fn pixel_offset(position: usize, slide_width: u32) -> u64 {
    (position as u64 + 1) * slide_width as u64
}

/// Stacking value of the center slide for a carousel of `n` slides.
///
/// Other slides never exceed `n`, so the center stays strictly on top even
/// past [`CENTER_Z_INDEX`] slides.
pub fn center_z_index(n: usize) -> u64 {
    CENTER_Z_INDEX.max(n as u64 + 1)
}

/// Stacking order: rises toward the center from both sides.
pub fn z_index(position: usize, center: usize, n: usize) -> u64 {
    if position == center {
        center_z_index(n)
    } else if position < center {
        // slides on the left of the center slide
        position as u64 + 1
    } else {
        // slides on the right, e.g. 7 + 1 - 4 = 4
        (n - position) as u64 + 1
    }
}

pub fn is_center(position: usize, center: usize) -> bool {
    position == center
}

/// True for the single slot immediately left of the center.
pub fn is_left_of_center(position: usize, center: usize) -> bool {
    position + 1 == center
}

/// True for the single slot immediately right of the center.
pub fn is_right_of_center(position: usize, center: usize) -> bool {
    position == center + 1
}

/// Everything a rendering layer needs to place one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideAttributes {
    pub index: usize,
    pub position: usize,
    pub pixel_offset: u64,
    pub z_index: u64,
    pub is_center: bool,
    pub is_left_of_center: bool,
    pub is_right_of_center: bool,
}

impl SlideAttributes {
    /// Compute the full attribute set for the slide `index` sitting at `position`.
    pub fn compute(index: usize, position: usize, center: usize, n: usize, slide_width: u32) -> Self {
        Self {
            index,
            position,
            pixel_offset: pixel_offset(position, slide_width),
            z_index: z_index(position, center, n),
            is_center: is_center(position, center),
            is_left_of_center: is_left_of_center(position, center),
            is_right_of_center: is_right_of_center(position, center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_offsets() {
        let offsets: Vec<u64> = (0..7).map(|p| pixel_offset(p, 100)).collect();
        assert_eq!(offsets, vec![100, 200, 300, 400, 500, 600, 700]);
    }

    #[test]
    fn test_z_indices_for_seven() {
        let z: Vec<u64> = (0..7).map(|p| z_index(p, 3, 7)).collect();
        assert_eq!(z, vec![1, 2, 3, CENTER_Z_INDEX, 4, 3, 2]);
    }

    #[test]
    fn test_right_side_wins_ties() {
        // equidistant from the center, the right-hand slide stacks one higher
        for n in 3..=15 {
            let center = n / 2;
            for d in 1..=center {
                if center + d >= n {
                    break;
                }
                let left = z_index(center - d, center, n);
                let right = z_index(center + d, center, n);
                if n % 2 == 1 {
                    assert_eq!(right, left + 1);
                } else {
                    assert_eq!(right, left);
                }
            }
        }
    }

    #[test]
    fn test_center_stays_on_top_for_huge_carousels() {
        let n = 2_000_002;
        let center = n / 2;
        let top = z_index(center, center, n);
        assert_eq!(top, n as u64 + 1);
        assert!(top > z_index(center - 1, center, n));
        assert!(top > z_index(center + 1, center, n));
        assert_eq!(center_z_index(7), CENTER_Z_INDEX);
    }

    #[test]
    fn test_neighbour_markers() {
        assert!(is_left_of_center(2, 3));
        assert!(!is_left_of_center(3, 3));
        assert!(is_right_of_center(4, 3));
        assert!(!is_right_of_center(3, 3));
        // nothing sits left of slot 0
        assert!(!is_left_of_center(0, 0));
        assert!(!is_right_of_center(0, 0));
    }

    #[test]
    fn test_attributes_serialize_camel_case() {
        let attrs = SlideAttributes::compute(0, 3, 3, 7, 100);
        let json = serde_json::to_value(attrs).unwrap();
        assert_eq!(json["pixelOffset"], 400);
        assert_eq!(json["zIndex"], CENTER_Z_INDEX);
        assert_eq!(json["isCenter"], true);
        assert_eq!(json["isLeftOfCenter"], false);
    }
}
