use chrono::Utc;

use heroes_types::hero::{Effectiveness, Hero};

struct SeedHero {
    id: &'static str,
    name: &'static str,
    real_name: &'static str,
    powers: &'static [&'static str],
    weaknesses: &'static [&'static str],
    effectiveness: u8,
}

const ROSTER: [SeedHero; 6] = [
    SeedHero {
        id: "1",
        name: "CAPTAIN FIREWALL",
        real_name: "Alice Johnson",
        powers: &[
            "Blocks malicious attacks",
            "Generates protective shields",
            "Monitors digital traffic in real-time",
        ],
        weaknesses: &["Cannot stop physical breaches"],
        effectiveness: 92,
    },
    SeedHero {
        id: "2",
        name: "CODEMASTER",
        real_name: "Raj Patel",
        powers: &[
            "Writes flawless code instantly",
            "Debugs errors by touch",
            "Optimizes legacy systems",
        ],
        weaknesses: &["Overconfidence in algorithms"],
        effectiveness: 95,
    },
    SeedHero {
        id: "3",
        name: "LADY ENCRYPTION",
        real_name: "Sofia Martínez",
        powers: &[
            "Encrypts data with unbreakable algorithms",
            "Generates one-time passcodes",
        ],
        weaknesses: &["Users forgetting their keys"],
        effectiveness: 97,
    },
    SeedHero {
        id: "4",
        name: "BUG HUNTER",
        real_name: "Daniel OConnor",
        powers: &["Detects vulnerabilities instantly", "Neutralizes malware"],
        weaknesses: &["Easily distracted by puzzles"],
        effectiveness: 88,
    },
    SeedHero {
        id: "5",
        name: "CLOUD RIDER",
        real_name: "Mina Chen",
        powers: &[
            "Spins up servers in seconds",
            "Balances workloads automatically",
        ],
        weaknesses: &["Latency storms"],
        effectiveness: 90,
    },
    SeedHero {
        id: "6",
        name: "THE PATCHER",
        real_name: "Igor Petrov",
        powers: &["Heals broken systems", "Upgrades outdated code silently"],
        weaknesses: &[
            "Legacy systems that refuse updates",
            "Reboots slow him down",
        ],
        effectiveness: 85,
    },
];

/// The six heroes the store starts with, all alive and without an image.
pub fn default_roster() -> Vec<Hero> {
    let now = Utc::now();
    ROSTER
        .iter()
        .filter_map(|seed| {
            let effectiveness = Effectiveness::new(i32::from(seed.effectiveness)).ok()?;
            Some(Hero {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                real_name: Some(seed.real_name.to_string()),
                powers: seed.powers.iter().map(|p| p.to_string()).collect(),
                weaknesses: seed.weaknesses.iter().map(|w| w.to_string()).collect(),
                effectiveness,
                is_alive: true,
                image_url: None,
                created_at: now,
                updated_at: now,
            })
        })
        .collect()
}
