//! Static page text.

/// A block inside a tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    /// `(label, text)` pairs rendered as "**label:** text".
    Labeled(&'static [(&'static str, &'static str)]),
    Separator,
}

/// One tab of a tabbed card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tab {
    pub label: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const APP_TITLE: &str = "Cosmic Orbit Sandbox";

pub const HERO_TEXT: &str = "Explore the wonders of our solar system through an interactive, \
immersive simulation. Change the pace of the planets, listen to the cosmos, and learn about space.";

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: "\u{2605}",
        title: "Interactive Orbits",
        text: "Control planetary motion and orbit speeds in real time.",
    },
    FeatureCard {
        icon: "\u{266B}",
        title: "Ambient Soundscapes",
        text: "Immerse yourself with cosmic ambient sounds that enhance the space exploration experience.",
    },
    FeatureCard {
        icon: "\u{2139}",
        title: "Educational Content",
        text: "Learn fascinating facts about our solar system while you play and explore.",
    },
];

pub const PREVIEW_HEADING: &str = "Explore The Cosmos";
pub const PREVIEW_TEXT: &str = "Visualize planetary orbits with smooth animation. Adjust orbit \
speeds, zoom in on planets, and learn about our solar system's mechanics.";

pub const LEARN_HEADING: &str = "Learn About Space";
pub const LEARN_INTRO: &str =
    "Explore fascinating facts about our solar system, planets, and the cosmos.";

pub const LEARN_TABS: [Tab; 3] = [
    Tab {
        label: "Solar System",
        blocks: &[
            Block::Heading("The Solar System"),
            Block::Paragraph(
                "Our solar system consists of the Sun and everything that orbits around it, \
                 including planets, moons, asteroids, comets, and meteoroids.",
            ),
            Block::Heading("Formation"),
            Block::Paragraph(
                "The solar system formed about 4.6 billion years ago from a giant cloud of gas \
                 and dust called the solar nebula. As the nebula collapsed under its own gravity, \
                 it spun faster and flattened into a disc.",
            ),
            Block::Separator,
            Block::Heading("Structure"),
            Block::Bullets(&[
                "The Sun - a yellow dwarf star at the center",
                "Inner planets - Mercury, Venus, Earth, and Mars",
                "Asteroid belt - between Mars and Jupiter",
                "Outer planets - Jupiter, Saturn, Uranus, and Neptune",
                "Kuiper Belt - beyond Neptune",
                "Oort Cloud - a distant shell of icy objects",
            ]),
            Block::Separator,
            Block::Heading("Interesting Facts"),
            Block::Bullets(&[
                "Light from the Sun takes about 8 minutes to reach Earth",
                "The solar system is about 26,000 light-years from the center of the Milky Way galaxy",
                "It takes the solar system about 225-250 million years to orbit the Milky Way's center",
                "The solar system is moving at 70,000 kilometers per hour toward the constellation Hercules",
            ]),
        ],
    },
    Tab {
        label: "Planets",
        blocks: &[
            Block::Heading("The Planets"),
            Block::Paragraph(
                "Our solar system has eight planets, each with its own unique characteristics.",
            ),
            Block::Labeled(&[
                ("Mercury", "The smallest and closest planet to the Sun. With no atmosphere to \
                  regulate temperature it swings from 430°C by day to -180°C at night."),
                ("Venus", "Often called Earth's twin due to similar size, Venus has clouds of \
                  sulfuric acid and crushing pressure. It is the hottest planet even though \
                  Mercury is closer to the Sun."),
                ("Earth", "The only known body that supports life, with liquid surface water, \
                  an oxygen-rich atmosphere and a protective magnetic field."),
                ("Mars", "The Red Planet owes its colour to iron oxide. It hosts Olympus Mons, \
                  the largest volcano in the solar system, and the Valles Marineris canyons."),
                ("Jupiter", "A gas giant of hydrogen and helium whose Great Red Spot has been \
                  raging for at least 300 years."),
            ]),
        ],
    },
    Tab {
        label: "Deep Space",
        blocks: &[
            Block::Heading("Deep Space"),
            Block::Paragraph(
                "Beyond our solar system lies a vast universe filled with galaxies, stars, \
                 nebulae, black holes, and countless mysteries.",
            ),
            Block::Labeled(&[
                ("Galaxies", "Massive collections of stars, gas, dust, and dark matter. The Milky \
                  Way contains between 100 and 400 billion stars; the observable universe holds \
                  an estimated 2 trillion galaxies."),
                ("Stars", "Balls of mostly hydrogen and helium that shine through nuclear fusion. \
                  The closest one after the Sun, Proxima Centauri, is about 4.24 light-years away."),
                ("Black Holes", "Regions where gravity is so strong that not even light escapes. \
                  Supermassive black holes sit at the centers of most galaxies."),
                ("The Universe", "It began with the Big Bang about 13.8 billion years ago and its \
                  expansion is accelerating. The observable universe is about 93 billion \
                  light-years across."),
            ]),
        ],
    },
];

pub const SIMULATION_TABS: [Tab; 3] = [
    Tab {
        label: "Overview",
        blocks: &[
            Block::Heading("About This Simulation"),
            Block::Paragraph(
                "This interactive model shows the planets of our solar system circling the Sun. \
                 It is not to scale; if it were, you would not be able to see the planets!",
            ),
            Block::Paragraph(
                "Control the pace with the buttons above the view and click a planet to read \
                 about it.",
            ),
        ],
    },
    Tab {
        label: "Controls",
        blocks: &[
            Block::Heading("Simulation Controls"),
            Block::Labeled(&[
                ("Play/Pause", "Start or stop the planetary motion"),
                ("Speed", "Step or slide between 0.25x and 3x"),
                ("Camera", "Drag to orbit, right-drag to pan, scroll to zoom"),
                ("Fullscreen", "Expand the simulation to fill your screen"),
            ]),
        ],
    },
    Tab {
        label: "Fun Facts",
        blocks: &[
            Block::Heading("Solar System Facts"),
            Block::Bullets(&[
                "The Sun makes up 99.86% of the mass in the solar system",
                "A day on Venus is longer than a year on Venus",
                "Jupiter has the shortest day of all the planets",
                "The Great Red Spot on Jupiter is a storm that has lasted over 300 years",
                "If Saturn were placed in water, it would float",
            ]),
        ],
    },
];
