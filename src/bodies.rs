//! Planet registry.
//!
//! The set of bodies is closed: every planet the viewer knows about is a
//! variant of [`Body`], and its static record lives in [`REGISTRY`] at the
//! index given by [`Body::index`]. Lookup by variant cannot fail; lookup by
//! display name returns `None` for anything outside the table.

/// Known planets, ordered from the Sun outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Static record for this body.
    #[inline]
    pub fn record(self) -> &'static CelestialBody {
        &REGISTRY[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.record().name
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Body> {
        let name = name.trim();
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ring system drawn around a planet's equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Inner radius as a multiple of the planet radius.
    pub inner: f32,
    /// Outer radius as a multiple of the planet radius.
    pub outer: f32,
    /// Texture path relative to the asset root.
    pub texture: &'static str,
    /// Tilt of the ring plane away from the orbital plane, in radians.
    pub tilt: f32,
}

/// Immutable record for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub body: Body,
    pub name: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Rest position in the scene, before orbital revolution.
    pub position: [f32; 3],
    /// Spin increment in radians per frame at 1x speed.
    pub rotation_rate: f32,
    /// Surface texture path relative to the asset root.
    pub texture: &'static str,
    pub ring: Option<Ring>,
    pub description: &'static str,
    pub facts: &'static [&'static str],
}

impl CelestialBody {
    /// Distance of the rest position from the Sun.
    pub fn orbit_radius(&self) -> f32 {
        let [x, y, z] = self.position;
        (x * x + y * y + z * z).sqrt()
    }
}

/// Ordered, read-only sequence of all bodies.
pub fn registry() -> &'static [CelestialBody] {
    &REGISTRY
}

/// Look up a record by display name (linear scan).
pub fn lookup(name: &str) -> Option<&'static CelestialBody> {
    Body::from_name(name).map(Body::record)
}

static REGISTRY: [CelestialBody; 8] = [
    CelestialBody {
        body: Body::Mercury,
        name: "Mercury",
        radius: 0.5,
        position: [4.0, 0.0, 0.0],
        rotation_rate: 0.004,
        texture: "textures/mercury.jpg",
        ring: None,
        description: "The smallest and innermost planet in the Solar System.",
        facts: &[
            "Mercury has no atmosphere and no water",
            "A day on Mercury lasts 176 Earth days",
            "Mercury's surface is covered in craters",
            "It has a large iron core",
        ],
    },
    CelestialBody {
        body: Body::Venus,
        name: "Venus",
        radius: 0.9,
        position: [7.0, 0.0, 0.0],
        rotation_rate: 0.002,
        texture: "textures/venus.jpg",
        ring: None,
        description: "The hottest planet with a toxic atmosphere of carbon dioxide.",
        facts: &[
            "Venus rotates backward compared to other planets",
            "Its thick atmosphere traps heat, making it extremely hot",
            "The pressure on Venus is 92 times Earth's pressure",
            "A day on Venus is longer than its year",
        ],
    },
    CelestialBody {
        body: Body::Earth,
        name: "Earth",
        radius: 1.0,
        position: [10.0, 0.0, 0.0],
        rotation_rate: 0.01,
        texture: "textures/earth.jpg",
        ring: None,
        description: "Our home planet, the only known planet with life.",
        facts: &[
            "Earth is the only planet with liquid water on the surface",
            "Earth's atmosphere is 78% nitrogen and 21% oxygen",
            "Earth's magnetic field protects us from solar radiation",
            "70% of Earth's surface is covered by water",
        ],
    },
    CelestialBody {
        body: Body::Mars,
        name: "Mars",
        radius: 0.7,
        position: [13.0, 0.0, 0.0],
        rotation_rate: 0.008,
        texture: "textures/mars.jpg",
        ring: None,
        description: "Known as the Red Planet due to iron oxide on its surface.",
        facts: &[
            "Mars has the tallest mountain in the solar system",
            "Mars has two small moons: Phobos and Deimos",
            "Mars has polar ice caps made of water and carbon dioxide",
            "Mars has seasons similar to Earth but longer",
        ],
    },
    CelestialBody {
        body: Body::Jupiter,
        name: "Jupiter",
        radius: 2.5,
        position: [18.0, 0.0, 0.0],
        rotation_rate: 0.04,
        texture: "textures/jupiter.jpg",
        ring: None,
        description: "The largest planet in our solar system, a gas giant.",
        facts: &[
            "Jupiter has the Great Red Spot, a giant storm",
            "Jupiter has at least 79 moons",
            "Jupiter's magnetic field is 14 times stronger than Earth's",
            "Jupiter is mainly composed of hydrogen and helium",
        ],
    },
    CelestialBody {
        body: Body::Saturn,
        name: "Saturn",
        radius: 2.2,
        position: [23.0, 0.0, 0.0],
        rotation_rate: 0.03,
        texture: "textures/saturn.jpg",
        ring: Some(Ring {
            inner: 1.3,
            outer: 2.2,
            texture: "textures/saturn_rings.png",
            tilt: 0.47,
        }),
        description: "Famous for its beautiful ring system, Saturn is a gas giant.",
        facts: &[
            "Saturn's rings are made of ice, rock, and dust",
            "Saturn has at least 82 moons",
            "Saturn has a density less than water - it would float",
            "Saturn's atmosphere is mainly hydrogen and helium",
        ],
    },
    CelestialBody {
        body: Body::Uranus,
        name: "Uranus",
        radius: 1.8,
        position: [28.0, 0.0, 0.0],
        rotation_rate: 0.02,
        texture: "textures/uranus.jpg",
        ring: Some(Ring {
            inner: 1.4,
            outer: 1.9,
            texture: "textures/uranus_rings.jpg",
            tilt: 1.71,
        }),
        description: "An ice giant that rotates on its side.",
        facts: &[
            "Uranus rotates on its side, like a rolling ball",
            "Uranus has 13 rings and 27 known moons",
            "Uranus is made mostly of water, methane, and ammonia ices",
            "It appears blue-green due to methane in its atmosphere",
        ],
    },
    CelestialBody {
        body: Body::Neptune,
        name: "Neptune",
        radius: 1.7,
        position: [32.0, 0.0, 0.0],
        rotation_rate: 0.025,
        texture: "textures/neptune.jpg",
        ring: None,
        description: "The windiest planet, with gusts up to 2,100 km/h.",
        facts: &[
            "Neptune has the strongest winds in the solar system",
            "Neptune has 14 known moons",
            "Neptune completes an orbit every 165 Earth years",
            "Neptune's blue color comes from methane in its atmosphere",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_ordered_and_indexed() {
        for (i, rec) in registry().iter().enumerate() {
            assert_eq!(rec.body.index(), i);
            assert_eq!(Body::ALL[i], rec.body);
        }
    }

    #[test]
    fn every_name_resolves_exactly_once() {
        assert_eq!(registry().len(), 8);
        for rec in registry() {
            let hits = registry().iter().filter(|r| r.name == rec.name).count();
            assert_eq!(hits, 1, "duplicate name {}", rec.name);
            assert_eq!(lookup(rec.name).map(|r| r.body), Some(rec.body));
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(Body::from_name("saturn"), Some(Body::Saturn));
        assert_eq!(Body::from_name("  EARTH "), Some(Body::Earth));
        assert_eq!(Body::from_name("Pluto"), None);
        assert!(lookup("").is_none());
    }

    #[test]
    fn records_are_well_formed() {
        for rec in registry() {
            assert!(rec.radius > 0.0);
            assert!(rec.orbit_radius() > rec.radius);
            assert_eq!(rec.facts.len(), 4);
            assert!(!rec.description.is_empty());
        }
        assert!(Body::Saturn.record().ring.is_some());
        assert!(Body::Uranus.record().ring.is_some());
        assert!(Body::Earth.record().ring.is_none());
    }
}
