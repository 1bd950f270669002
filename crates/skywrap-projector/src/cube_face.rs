//! The six faces of a cubemap.

/// The six faces of a cubemap.
///
/// Each variant names the axis its outward normal points along. The
/// discriminants fix the canonical storage order used by
/// [`FaceSet`](crate::FaceSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face (right)
    PosX = 0,
    /// −X face (left)
    NegX = 1,
    /// +Y face (top)
    PosY = 2,
    /// −Y face (bottom)
    NegY = 3,
    /// +Z face (front)
    PosZ = 4,
    /// −Z face (back)
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of this face in [`CubeFace::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short snake-case tag, e.g. `"pos_x"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            CubeFace::PosX => "pos_x",
            CubeFace::NegX => "neg_x",
            CubeFace::PosY => "pos_y",
            CubeFace::NegY => "neg_y",
            CubeFace::PosZ => "pos_z",
            CubeFace::NegZ => "neg_z",
        }
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
