//! The motif catalog.
//!
//! Each motif draws one triangular sector in its own local frame: centred
//! on the origin, corners `radius` away at 0°, 120° and 240°. The tiling
//! core places and turns the frame; the motif never sees world coordinates.

pub mod util;

mod asanoha;
mod bentenkikkou;
mod kawariasanoha;
mod kikyouasanoha;
mod mikadotsunagi;
mod nijuasanoha;
mod sakura;
mod shippouasanoha;
mod tsunoasanoha;
mod yaeasa;
mod yaeurabana;

pub use asanoha::draw_asanoha;
pub use bentenkikkou::{BentenkikkouConfig, draw_bentenkikkou};
pub use kawariasanoha::draw_kawariasanoha;
pub use kikyouasanoha::{KikyouasanohaConfig, draw_kikyouasanoha};
pub use mikadotsunagi::{MikadotsunagiConfig, draw_mikadotsunagi};
pub use nijuasanoha::draw_nijuasanoha;
pub use sakura::{SakuraConfig, draw_sakura};
pub use shippouasanoha::{ShippouasanohaConfig, draw_shippouasanoha};
pub use tsunoasanoha::draw_tsunoasanoha;
pub use yaeasa::{InnerRatioConfig, draw_yaeasa};
pub use yaeurabana::draw_yaeurabana;

use crate::error::{Error, Result};
use crate::hexagon::{CellSpec, MotifRenderer};
use crate::surface::{Surface, TransformScope};

/// Available motifs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motif {
    Asanoha,
    Mikadotsunagi,
    Yaeurabana,
    Kikyouasanoha,
    Shippouasanoha,
    Yaeasa,
    Tsunoasanoha,
    Bentenkikkou,
    Sakura,
    Kawariasanoha,
    Nijuasanoha,
}

impl Motif {
    /// Get all available motifs.
    pub fn all() -> &'static [Motif] {
        &[
            Motif::Asanoha,
            Motif::Mikadotsunagi,
            Motif::Yaeurabana,
            Motif::Kikyouasanoha,
            Motif::Shippouasanoha,
            Motif::Yaeasa,
            Motif::Tsunoasanoha,
            Motif::Bentenkikkou,
            Motif::Sakura,
            Motif::Kawariasanoha,
            Motif::Nijuasanoha,
        ]
    }

    /// Get motif name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Motif::Asanoha => "asanoha",
            Motif::Mikadotsunagi => "mikadotsunagi",
            Motif::Yaeurabana => "yaeurabana",
            Motif::Kikyouasanoha => "kikyouasanoha",
            Motif::Shippouasanoha => "shippouasanoha",
            Motif::Yaeasa => "yaeasa",
            Motif::Tsunoasanoha => "tsunoasanoha",
            Motif::Bentenkikkou => "bentenkikkou",
            Motif::Sakura => "sakura",
            Motif::Kawariasanoha => "kawariasanoha",
            Motif::Nijuasanoha => "nijuasanoha",
        }
    }

    /// Brief description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Motif::Asanoha => "Hemp leaf star",
            Motif::Mikadotsunagi => "Interlocking triangles",
            Motif::Yaeurabana => "Double-petalled flower",
            Motif::Kikyouasanoha => "Bellflower hemp leaf",
            Motif::Shippouasanoha => "Hemp leaf with curved petals",
            Motif::Yaeasa => "Double hemp leaf",
            Motif::Tsunoasanoha => "Horned hemp leaf",
            Motif::Bentenkikkou => "Benten tortoise shell",
            Motif::Sakura => "Cherry blossom",
            Motif::Kawariasanoha => "Variant hemp leaf",
            Motif::Nijuasanoha => "Twofold hemp leaf",
        }
    }

    /// Does the motif paint filled shapes? Filled motifs hide whatever
    /// was drawn under them, so their layering is visible.
    pub fn has_fills(&self) -> bool {
        matches!(self, Motif::Bentenkikkou | Motif::Sakura)
    }

    /// Parse motif from string, ignoring case, `-` and `_`.
    pub fn from_name(name: &str) -> Option<Motif> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "asanoha" | "hempleaf" => Some(Motif::Asanoha),
            "mikadotsunagi" | "mikado" => Some(Motif::Mikadotsunagi),
            "yaeurabana" => Some(Motif::Yaeurabana),
            "kikyouasanoha" | "kikyou" => Some(Motif::Kikyouasanoha),
            "shippouasanoha" | "shippou" => Some(Motif::Shippouasanoha),
            "yaeasa" => Some(Motif::Yaeasa),
            "tsunoasanoha" | "tsuno" => Some(Motif::Tsunoasanoha),
            "bentenkikkou" | "kikkou" => Some(Motif::Bentenkikkou),
            "sakura" | "cherry" => Some(Motif::Sakura),
            "kawariasanoha" | "kawari" => Some(Motif::Kawariasanoha),
            "nijuasanoha" | "niju" => Some(Motif::Nijuasanoha),
            _ => None,
        }
    }

    /// Like [`Motif::from_name`], but an error names what was asked for.
    pub fn lookup(name: &str) -> Result<Motif> {
        Motif::from_name(name).ok_or_else(|| Error::UnknownMotif(name.to_string()))
    }

    /// Draw one sector in the surface's current local frame, with the
    /// motif's default proportions.
    pub fn draw(&self, surface: &mut dyn Surface, radius: f64) {
        match self {
            Motif::Asanoha => draw_asanoha(surface, radius),
            Motif::Mikadotsunagi => draw_mikadotsunagi(surface, radius, &MikadotsunagiConfig::default()),
            Motif::Yaeurabana => draw_yaeurabana(surface, radius),
            Motif::Kikyouasanoha => draw_kikyouasanoha(surface, radius, &KikyouasanohaConfig::default()),
            Motif::Shippouasanoha => draw_shippouasanoha(surface, radius, &ShippouasanohaConfig::default()),
            Motif::Yaeasa => draw_yaeasa(surface, radius, &InnerRatioConfig::default()),
            Motif::Tsunoasanoha => draw_tsunoasanoha(surface, radius, &InnerRatioConfig::default()),
            Motif::Bentenkikkou => draw_bentenkikkou(surface, radius, &BentenkikkouConfig::default()),
            Motif::Sakura => draw_sakura(surface, radius, &SakuraConfig::default()),
            Motif::Kawariasanoha => draw_kawariasanoha(surface, radius, &InnerRatioConfig::default()),
            Motif::Nijuasanoha => draw_nijuasanoha(surface, radius, &InnerRatioConfig::default()),
        }
    }

    /// A renderer that draws this motif onto `surface`.
    pub fn brush<'s, S: Surface + ?Sized>(self, surface: &'s mut S) -> MotifBrush<'s, S> {
        MotifBrush { motif: self, surface }
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Motif {
    type Err = Error;

    fn from_str(s: &str) -> Result<Motif> {
        Motif::lookup(s)
    }
}

/// A [`Motif`] bound to a [`Surface`]: the renderer passed to
/// [`crate::tile`] and [`crate::draw_hexagon`].
///
/// Each call saves the surface transform, moves to the cell centre, turns
/// by the cell rotation, draws, and restores.
pub struct MotifBrush<'s, S: Surface + ?Sized> {
    motif: Motif,
    surface: &'s mut S,
}

impl<S: Surface + ?Sized> MotifBrush<'_, S> {
    pub fn motif(&self) -> Motif {
        self.motif
    }
}

fn draw_on<S: Surface + ?Sized>(motif: Motif, surface: &mut S, radius: f64) {
    motif.draw(&mut SurfaceRef(surface), radius);
}

/// Lets a possibly-unsized `S` be handed to the `&mut dyn Surface` motif
/// functions.
struct SurfaceRef<'a, S: Surface + ?Sized>(&'a mut S);

impl<S: Surface + ?Sized> Surface for SurfaceRef<'_, S> {
    fn move_transform(&mut self, dx: f64, dy: f64) {
        self.0.move_transform(dx, dy)
    }

    fn rotate_transform(&mut self, theta: f64) {
        self.0.rotate_transform(theta)
    }

    fn save_transform_state(&mut self) {
        self.0.save_transform_state()
    }

    fn restore_transform_state(&mut self) {
        self.0.restore_transform_state()
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.0.draw_line(x1, y1, x2, y2)
    }

    fn draw_curve_segment(&mut self, points: &[crate::geometry::Point]) {
        self.0.draw_curve_segment(points)
    }

    fn fill_polygon(&mut self, points: &[crate::geometry::Point]) {
        self.0.fill_polygon(points)
    }
}

impl<S: Surface + ?Sized> MotifRenderer for MotifBrush<'_, S> {
    fn render(&mut self, cell: CellSpec) -> Result<()> {
        let mut scope = TransformScope::new(&mut *self.surface);
        scope.move_transform(cell.center.x, cell.center.y);
        scope.rotate_transform(cell.rotation);
        draw_on(self.motif, &mut *scope, cell.radius);
        Ok(())
    }
}
