//! Static genre catalog.
//!
//! Consumers receive the catalog as a `&'static [Genre]` at construction time;
//! [`GENRES`] is the reference list shipped with the widget.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form used by canvas fill styles.
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Genre {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Rgb,
}

const fn genre(key: &'static str, label: &'static str, color: Rgb) -> Genre {
    Genre { key, label, color }
}

pub const GENRES: &[Genre] = &[
    genre("house", "House", Rgb(0xff, 0xb3, 0x47)),
    genre("trance", "Trance", Rgb(0x3d, 0xdc, 0xff)),
    genre("hard_techno", "Hard Techno", Rgb(0xff, 0x47, 0x7e)),
    genre("hard_house", "Hard House", Rgb(0xff, 0x7a, 0x3d)),
    genre(
        "industrial_hard_techno",
        "Industrial Hard Techno",
        Rgb(0x9a, 0xa0, 0xff),
    ),
    genre("hardstyle", "Hardstyle", Rgb(0xff, 0xd1, 0x66)),
    genre("hardcore", "Hardcore", Rgb(0xff, 0x00, 0x6e)),
    genre("drum_bass", "Drum & Bass", Rgb(0x00, 0xd4, 0xa6)),
    genre("afro", "Afro", Rgb(0xff, 0x5e, 0x00)),
    genre("hard_bounce", "Hard Bounce", Rgb(0x7c, 0xfc, 0x00)),
    genre("shranz", "Shranz", Rgb(0xb0, 0x84, 0xff)),
    genre("pop", "Pop", Rgb(0xff, 0x66, 0xcc)),
    genre("groove", "Groove", Rgb(0x34, 0xd3, 0x99)),
    genre("driving_techno", "Driving Techno", Rgb(0x00, 0xbc, 0xd4)),
    genre("turku", "Turku", Rgb(0xa3, 0xe6, 0x35)),
];

#[inline]
pub fn find<'a>(catalog: &'a [Genre], key: &str) -> Option<&'a Genre> {
    catalog.iter().find(|g| g.key == key)
}
