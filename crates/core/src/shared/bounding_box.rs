use serde::{Deserialize, Serialize};

/// An axis-aligned detection rectangle in frame pixel coordinates.
///
/// `x1 < x2` and `y1 < y2`. Serialized as a flat `[x1, y1, x2, y2]`
/// array in the metadata document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[i32; 4]", try_from = "[i32; 4]")]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        debug_assert!(x1 < x2, "x1 must be less than x2");
        debug_assert!(y1 < y2, "y1 must be less than y2");
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

impl From<BoundingBox> for [i32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

impl TryFrom<[i32; 4]> for BoundingBox {
    type Error = String;

    fn try_from(v: [i32; 4]) -> Result<Self, Self::Error> {
        let [x1, y1, x2, y2] = v;
        if x1 >= x2 || y1 >= y2 {
            return Err(format!("degenerate bounding box [{x1}, {y1}, {x2}, {y2}]"));
        }
        Ok(Self { x1, y1, x2, y2 })
    }
}
