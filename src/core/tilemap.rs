use glam::{IVec2, Vec2};
use log::error;
use serde::{Deserialize, Serialize};

/// Logical classification of a tile, used by the collision resolver.
///
/// Slope naming reads left to right: `SlopeUp` rises from height 0 at the
/// left edge to a full tile at the right edge (+Y points down, so "up" means
/// the walkable surface climbs toward the top of the screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    /// Decorative tile with no collision response.
    Normal,
    /// Blocks movement from every direction.
    Solid,
    /// One-way platform: blocks descent only.
    Unisolid,
    /// Damaging tile, reported through trigger events.
    Hazard,
    /// Climbable tile, reported through the contact report.
    Ladder,
    /// Surface from 0 to a full tile.
    SlopeUp,
    /// Surface from a full tile down to 0.
    SlopeDown,
    /// Surface from 0 to half a tile.
    SlopeUpLow,
    /// Surface from half a tile to a full tile.
    SlopeUpHigh,
    /// Surface from a full tile down to half.
    SlopeDownHigh,
    /// Surface from half a tile down to 0.
    SlopeDownLow,
}

impl TileKind {
    /// Ramp geometry of this kind, `None` for kinds without a sloped surface.
    ///
    /// This is the single dispatch point between tile classification and the
    /// resolver's slope math.
    pub fn slope(&self) -> Option<SlopeProfile> {
        match self {
            TileKind::SlopeUp => Some(SlopeProfile::new(0.0, 1.0)),
            TileKind::SlopeDown => Some(SlopeProfile::new(1.0, 0.0)),
            TileKind::SlopeUpLow => Some(SlopeProfile::new(0.0, 0.5)),
            TileKind::SlopeUpHigh => Some(SlopeProfile::new(0.5, 1.0)),
            TileKind::SlopeDownHigh => Some(SlopeProfile::new(1.0, 0.5)),
            TileKind::SlopeDownLow => Some(SlopeProfile::new(0.5, 0.0)),
            _ => None,
        }
    }

    pub fn is_slope(&self) -> bool {
        self.slope().is_some()
    }
}

/// Surface heights at the left and right edge of a slope tile, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeProfile {
    pub left: f32,
    pub right: f32,
}

impl SlopeProfile {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Ground height `frac` of the way across the tile, in pixels measured
    /// from the tile's bottom edge.
    pub fn height_at(&self, frac: f32, tile_height: f32) -> f32 {
        let f = frac.clamp(0.0, 1.0);
        (self.left + f * (self.right - self.left)) * tile_height
    }
}

/// One cell of a tile layer: collision classification plus the opaque visual
/// payload external renderers use to draw it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Sprite/atlas index carried for the renderer, never interpreted here.
    pub tile_id: u32,
}

impl Tile {
    pub fn new(kind: TileKind, tile_id: u32) -> Self {
        Self { kind, tile_id }
    }
}

/// Static row-major grid of tiles registered with the physics world for
/// collision (`index = y * map_size.x + x`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    tile_size: IVec2,
    map_size: IVec2,
    offset: Vec2,
    tiles: Vec<Tile>,
}

impl TileLayer {
    /// Builds a layer from row-major tile data.
    ///
    /// A tile count that does not match `map_size` degrades the layer to an
    /// empty grid instead of failing.
    pub fn new(tile_size: IVec2, map_size: IVec2, tiles: Vec<Tile>) -> Self {
        let expected = (map_size.x.max(0) as usize) * (map_size.y.max(0) as usize);
        if tiles.len() != expected {
            error!(
                "tile layer holds {} tiles but a {}x{} map needs {}; degrading to empty",
                tiles.len(),
                map_size.x,
                map_size.y,
                expected
            );
            return Self {
                tile_size,
                map_size: IVec2::ZERO,
                offset: Vec2::ZERO,
                tiles: Vec::new(),
            };
        }

        Self {
            tile_size,
            map_size,
            offset: Vec2::ZERO,
            tiles,
        }
    }

    pub fn tile_size(&self) -> IVec2 {
        self.tile_size
    }

    pub fn map_size(&self) -> IVec2 {
        self.map_size
    }

    /// World-space shift of the whole layer (default zero).
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn world_size(&self) -> Vec2 {
        (self.map_size * self.tile_size).as_vec2()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_at(&self, pos: IVec2) -> Option<&Tile> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.map_size.x || pos.y >= self.map_size.y {
            return None;
        }
        self.tiles.get((pos.y * self.map_size.x + pos.x) as usize)
    }

    /// Tile kind at grid coordinates; anything out of range reads as empty.
    pub fn kind_at(&self, pos: IVec2) -> TileKind {
        self.tile_at(pos).map(|tile| tile.kind).unwrap_or_default()
    }

    /// Tile kind under a world-space point, after applying the layer offset.
    pub fn kind_at_world(&self, world: Vec2) -> TileKind {
        if self.tile_size.x <= 0 || self.tile_size.y <= 0 {
            return TileKind::Empty;
        }
        let local = world - self.offset;
        let pos = IVec2::new(
            (local.x / self.tile_size.x as f32).floor() as i32,
            (local.y / self.tile_size.y as f32).floor() as i32,
        );
        self.kind_at(pos)
    }
}
