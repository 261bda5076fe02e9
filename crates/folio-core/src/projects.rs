//! Project details shown in the "learn more" modal.

use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: &'static str,
    pub meta: &'static str,
    pub bullets: &'static [&'static str],
    pub next: &'static str,
}

static PROJECTS: &[(&str, ProjectDetails)] = &[
    (
        "spend",
        ProjectDetails {
            title: "Corporate Spend Approval Engine",
            meta: "Python • Flask • SQL/SQLite",
            bullets: &[
                "Multi-tier routing (auto / manager / VP) using dynamic thresholds.",
                "Fraud checks for duplicates and policy violations in real time.",
                "Audit-first schema with immutable logs and traceable state transitions.",
            ],
            next: "Build a real front-end dashboard (roles, queues, audit view), then add auth + analytics.",
        },
    ),
    (
        "physics",
        ProjectDetails {
            title: "2D Physics Simulation Engine",
            meta: "C++ • SFML",
            bullets: &[
                "Realtime simulation with gravity and collision handling at 60 FPS.",
                "Optimized entity management to support 50+ active objects smoothly.",
                "Modular foundation for future particle systems and tooling.",
            ],
            next: "Support more shapes (boxes/polygons), add friction, and constraints/joints.",
        },
    ),
    (
        "topography",
        ProjectDetails {
            title: "Topography Animation Visual Interactive",
            meta: "C++ • SFML",
            bullets: &[
                "Fluid ring/tube geometry with smooth motion and 3D projection.",
                "Mouse-driven mode blending (twist / vertical wave / spiral flow).",
                "Glow-style rendering via layered passes (core + aura).",
            ],
            next: "Add presets + UI controls, optimize batching further, add fullscreen toggle + export/recording.",
        },
    ),
    (
        "vehicle",
        ProjectDetails {
            title: "Autonomous Assistive Vehicle Prototype",
            meta: "Leadership • University Project",
            bullets: &[
                "Leadership-focused build: coordinated timeline, roles, and iteration milestones.",
                "Guided design tradeoffs and testing priorities to keep the project moving.",
                "Emphasized practical execution: reliability, safety considerations, and documentation.",
            ],
            next: "Add sensors + closed-loop control, then autonomy (navigation + obstacle avoidance).",
        },
    ),
];

pub struct ProjectCatalog {
    by_key: FnvHashMap<&'static str, &'static ProjectDetails>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            by_key: PROJECTS.iter().map(|(k, d)| (*k, d)).collect(),
        }
    }
}

impl ProjectCatalog {
    pub fn get(&self, key: &str) -> Option<&'static ProjectDetails> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl ProjectDetails {
    /// Modal body markup; every text field is escaped.
    pub fn render_html(&self) -> String {
        let items: String = self
            .bullets
            .iter()
            .map(|b| format!("<li>{}</li>", escape_html(b)))
            .collect();
        format!(
            "<h3>{}</h3><div class=\"meta\">{}</div><ul>{}</ul><div class=\"nextBlock\"><strong>Next steps:</strong> {}</div>",
            escape_html(self.title),
            escape_html(self.meta),
            items,
            escape_html(self.next)
        )
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
