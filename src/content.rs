//! Static page content.

pub struct Owner {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub resume_href: &'static str,
}

pub const OWNER: Owner = Owner {
    name: "Alex Morgan",
    initials: "AM",
    role: "Systems Engineer",
    tagline: "I build fast, reliable software from the kernel boundary up to the browser.",
    location: "Lisbon, Portugal",
    email: "hello@alexmorgan.dev",
    resume_href: "resume.pdf",
};

pub const ABOUT: &[&str] = &[
    "I enjoy the parts of software most people would rather not look at: \
     schedulers, parsers, storage layers, and the glue between them.",
    "Lately that has meant Rust on the server and in the browser, where a \
     strong type system pays for itself on every refactor.",
];

/// One entry on the education or experience timeline
pub struct TimelineEntry {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "MSc Computer Science",
        place: "University of Lisbon",
        period: "2017 - 2019",
        summary: "Thesis on lock-free queues for soft real-time audio.",
    },
    TimelineEntry {
        title: "BSc Software Engineering",
        place: "University of Porto",
        period: "2014 - 2017",
        summary: "Compilers, operating systems and distributed algorithms.",
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Senior Systems Engineer",
        place: "Northwind Data",
        period: "2022 - Present",
        summary: "Own the ingestion pipeline: 2M events per second on a Rust and Kafka stack.",
    },
    TimelineEntry {
        title: "Software Engineer",
        place: "Harbor Labs",
        period: "2019 - 2022",
        summary: "Built the sync engine behind an offline-first field app.",
    },
    TimelineEntry {
        title: "Engineering Intern",
        place: "Atlas Robotics",
        period: "2018",
        summary: "Wrote the telemetry decoder for the warehouse fleet.",
    },
];

pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// (label, href)
    pub links: &'static [(&'static str, &'static str)],
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "tidepool",
        summary: "An embedded time-series store with columnar compression and a tiny \
                  query language.",
        tags: &["Rust", "Storage", "SIMD"],
        links: &[
            ("Live Demo", "https://example.com/tidepool"),
            ("Source", "https://example.com/tidepool/src"),
        ],
    },
    Project {
        name: "wirecat",
        summary: "Packet capture viewer that decodes a dozen protocols and runs in the browser.",
        tags: &["Rust", "WebAssembly", "Networking"],
        links: &[
            ("Live Demo", "https://example.com/wirecat"),
            ("Source", "https://example.com/wirecat/src"),
        ],
    },
    Project {
        name: "lanternd",
        summary: "Home automation daemon with a plugin system and zero-downtime reloads.",
        tags: &["Rust", "Tokio", "IoT"],
        links: &[
            ("Docs", "https://example.com/lanternd"),
            ("Source", "https://example.com/lanternd/src"),
        ],
    },
];

/// A project link with its position among every `.project-link` on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectLinkRef {
    pub index: usize,
    pub label: &'static str,
    pub href: &'static str,
}

/// Links of each project, numbered in document order.
pub fn project_links() -> Vec<Vec<ProjectLinkRef>> {
    let mut index = 0;
    PROJECTS
        .iter()
        .map(|project| {
            project
                .links
                .iter()
                .map(|&(label, href)| {
                    let link = ProjectLinkRef { index, label, href };
                    index += 1;
                    link
                })
                .collect()
        })
        .collect()
}

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages",
        skills: &["Rust", "C", "TypeScript", "Python", "SQL"],
    },
    SkillGroup {
        name: "Systems",
        skills: &["Linux", "eBPF", "Async runtimes", "Profiling"],
    },
    SkillGroup {
        name: "Web",
        skills: &["WebAssembly", "Dioxus", "HTTP/2", "WebSockets"],
    },
    SkillGroup {
        name: "Data",
        skills: &["PostgreSQL", "Kafka", "Columnar formats"],
    },
];

pub struct Achievement {
    pub title: &'static str,
    pub detail: &'static str,
    pub year: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Conference Speaker",
        detail: "Talked about zero-copy parsing at a European Rust conference.",
        year: "2024",
    },
    Achievement {
        title: "Open Source Maintainer",
        detail: "Co-maintainer of a widely used async serial port crate.",
        year: "2023",
    },
    Achievement {
        title: "Hackathon Winner",
        detail: "First place for a mesh-networked disaster response app.",
        year: "2021",
    },
];
