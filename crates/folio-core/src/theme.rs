//! Accent themes and the ambient auto-cycle that user interaction switches
//! off.

use crate::preview::Interaction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

impl Accent {
    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

pub const ACCENTS: [Accent; 3] = [
    Accent {
        name: "Deep Purple",
        rgb: [0x7a, 0x2c, 0xff],
    },
    Accent {
        name: "Pink",
        rgb: [0xff, 0x3b, 0xd4],
    },
    Accent {
        name: "Electric Blue",
        rgb: [0x1f, 0x6b, 0xff],
    },
];

#[derive(Clone, Debug)]
pub struct ThemeCycle {
    index: usize,
    auto_cycle: bool,
}

impl Default for ThemeCycle {
    fn default() -> Self {
        Self {
            index: 0,
            auto_cycle: true,
        }
    }
}

impl ThemeCycle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Accent {
        &ACCENTS[self.index]
    }

    pub fn auto_cycle(&self) -> bool {
        self.auto_cycle
    }

    /// Select accent `idx`, wrapping in both directions.
    pub fn apply(&mut self, idx: i64) -> &'static Accent {
        self.index = idx.rem_euclid(ACCENTS.len() as i64) as usize;
        self.current()
    }

    pub fn next(&mut self) -> &'static Accent {
        self.apply(self.index as i64 + 1)
    }

    /// Interval tick: advances only while auto-cycling is on.
    pub fn tick(&mut self) -> Option<&'static Accent> {
        if self.auto_cycle {
            Some(self.next())
        } else {
            None
        }
    }

    pub fn handle(&mut self, event: Interaction) {
        match event {
            Interaction::UserInteracted => {
                if self.auto_cycle {
                    log::debug!("[theme] auto-cycle off after user interaction");
                }
                self.auto_cycle = false;
            }
        }
    }

    /// The explicit theme toggle: stop auto-cycling and advance once.
    pub fn toggle(&mut self) -> &'static Accent {
        self.handle(Interaction::UserInteracted);
        self.next()
    }
}

/// Viewport-relative pointer position as CSS percentages (`"12.34%"`).
pub fn focal_point_css(client_x: f64, client_y: f64, view_w: f64, view_h: f64) -> (String, String) {
    let pct = |v: f64, extent: f64| {
        if extent > 0.0 {
            v / extent * 100.0
        } else {
            50.0
        }
    };
    (
        format!("{:.2}%", pct(client_x, view_w)),
        format!("{:.2}%", pct(client_y, view_h)),
    )
}
