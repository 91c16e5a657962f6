//! Static terminal art and animation frames.

use serde::{Deserialize, Serialize};

use crate::games::global_war::Scenario;

pub const WOPR_LOGO: &str = r"
╔══════════════════════════════════════════════════════════════════════╗
║                                                                      ║
║   ██╗    ██╗ ██████╗ ██████╗ ██████╗                                 ║
║   ██║    ██║██╔═══██╗██╔══██╗██╔══██╗                                ║
║   ██║ █╗ ██║██║   ██║██████╔╝██████╔╝                                ║
║   ██║███╗██║██║   ██║██╔═══╝ ██╔══██╗                                ║
║   ╚███╔███╔╝╚██████╔╝██║     ██║  ██║                                ║
║    ╚══╝╚══╝  ╚═════╝ ╚═╝     ╚═╝  ╚═╝                                ║
║                                                                      ║
║            WAR OPERATION PLAN RESPONSE                               ║
║            STRATEGIC DEFENSE COMPUTER                                ║
║            NORAD - NORTH AMERICAN AEROSPACE DEFENSE COMMAND          ║
║                                                                      ║
║            BUILD: 1983.06.03                                         ║
║            CLEARANCE LEVEL: TOP SECRET                               ║
║                                                                      ║
╚══════════════════════════════════════════════════════════════════════╝
";

pub const BOOT_SEQUENCE: [&str; 19] = [
    "NORAD STRATEGIC DEFENSE SYSTEM",
    "INITIALIZING...",
    "",
    "PERFORMING SYSTEM DIAGNOSTICS...",
    "MEMORY CHECK.................. 65536K OK",
    "PROCESSOR STATUS.............. OPERATIONAL",
    "THREAT DETECTION SYSTEMS...... ONLINE",
    "",
    "LOADING WOPR KERNEL........... OK",
    "MOUNTING /DEV/RADAR........... OK",
    "MOUNTING /DEV/SATELLITE....... OK",
    "CONNECTING TO STRATEGIC COMMAND OK",
    "LOADING WAR SCENARIOS......... OK",
    "",
    "ESTABLISHING SECURE LINK TO NORAD...",
    "ENCRYPTION: AES-256",
    "AUTHENTICATION: CONFIRMED",
    "CONNECTION: ESTABLISHED",
    "",
];

pub const MUSHROOM_CLOUD: &str = r"
      .-.
     (   )
      '-'
     /   \
    |     |
    |     |
    |     |
   /       \
  |         |
  |         |
  |_________|
   | | | | |
   | | | | |
";

const MISSILE_LAUNCH: [&str; 12] = [
    "MISSILE LAUNCH SEQUENCE INITIATED...",
    "T-MINUS 10 SECONDS...",
    "T-MINUS 5 SECONDS...",
    "IGNITION!",
    "     ^",
    "     |",
    "        ^",
    "        |",
    "           ^",
    "           |",
    "TARGET ACQUIRED...",
    "IMPACT IMMINENT...",
];

const EXPLOSION: [&str; 12] = [
    "IMPACT!",
    "      *",
    "     ***",
    "    *****",
    "   *******",
    "  *********",
    " ***********",
    "  *********",
    "   *******",
    "     ***",
    "",
    "DETONATION CONFIRMED.",
];

const COUNTER_STRIKE: [&str; 9] = [
    "ENEMY COUNTERSTRIKE DETECTED!",
    "INCOMING ICBM TRAJECTORY CONFIRMED...",
    "ALERT: DEFENSE SYSTEMS ACTIVATED...",
    "                    *",
    "              *",
    "        *",
    "     *",
    "",
    "INCOMING IMPACT!",
];

const DEFCON_ALERT: [&str; 7] = [
    "!!! WARNING !!!",
    "DEFCON 1 ACTIVATED",
    "NUCLEAR LAUNCH AUTHORIZED",
    "",
    "!!! WARNING !!!",
    "DEFCON 1 ACTIVATED",
    "NUCLEAR LAUNCH AUTHORIZED",
];

/// Frame sequences a terminal front end may play between outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    MissileLaunch,
    Explosion,
    CounterStrike,
    DefconAlert,
}

impl Animation {
    #[must_use]
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Animation::MissileLaunch => &MISSILE_LAUNCH,
            Animation::Explosion => &EXPLOSION,
            Animation::CounterStrike => &COUNTER_STRIKE,
            Animation::DefconAlert => &DEFCON_ALERT,
        }
    }

    /// Delay between frames, in milliseconds.
    #[must_use]
    pub fn frame_delay_ms(self) -> u64 {
        match self {
            Animation::MissileLaunch | Animation::CounterStrike => 150,
            Animation::Explosion => 100,
            Animation::DefconAlert => 200,
        }
    }
}

/// Briefing lines printed when a scenario starts.
#[must_use]
pub fn scenario_intro(scenario: Scenario) -> &'static [&'static str] {
    match scenario {
        Scenario::GlobalThermonuclearWar => &[
            "INITIALIZING GLOBAL THERMONUCLEAR WAR SCENARIO...",
            "LOADING ICBM TRAJECTORIES...",
            "SETTING DEFCON LEVEL TO 1...",
            "STRATEGIC AIR COMMAND ON FULL ALERT...",
        ],
        Scenario::EuropeTheater => &[
            "INITIALIZING EUROPEAN THEATER...",
            "NATO FORCES: STANDING BY",
            "WARSAW PACT: MOBILIZING",
            "CONVENTIONAL FORCES ENGAGING...",
        ],
        Scenario::PacificTheater => &[
            "INITIALIZING PACIFIC THEATER...",
            "NAVAL FORCES POSITIONING...",
            "AIR SUPERIORITY CONTESTED...",
            "CARRIER GROUPS ENGAGED...",
        ],
        Scenario::MiddleEastCrisis => &[
            "INITIALIZING MIDDLE EAST CRISIS...",
            "OIL FIELDS UNDER THREAT...",
            "COALITION FORCES ASSEMBLING...",
        ],
        Scenario::CyberWarfare => &[
            "INITIALIZING CYBER WARFARE SCENARIO...",
            "PROBING INFRASTRUCTURE NETWORKS...",
            "POWER GRID EXPOSURE: CRITICAL",
        ],
    }
}

/// Difficulty label shown in the scenario list.
#[must_use]
pub fn scenario_difficulty(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::GlobalThermonuclearWar => "██████████ EXTREME",
        Scenario::EuropeTheater | Scenario::CyberWarfare => "████████░░ HARD",
        Scenario::PacificTheater | Scenario::MiddleEastCrisis => "██████░░░░ MEDIUM",
    }
}

/// One-line scenario summary shown in the scenario list.
#[must_use]
pub fn scenario_summary(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::GlobalThermonuclearWar => "Full-scale US vs USSR nuclear exchange",
        Scenario::EuropeTheater => "NATO vs Warsaw Pact conventional forces",
        Scenario::PacificTheater => "Naval and air combat in the Pacific",
        Scenario::MiddleEastCrisis => "Oil fields and coalition warfare",
        Scenario::CyberWarfare => "Modern infrastructure attacks",
    }
}
